// ==========================================
// Fleetify Import Core - Import Config
// ==========================================
// Role: resolved tuning values for one ImportPipeline
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::config::config_manager::config_keys;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub sample_size: usize,
    /// Deepest computed level; codes longer than this saturate here.
    /// The default 6 gives the standard `min(6, len)` tiers; any other value moves
    /// that cap. Declared levels above it are kept and flagged with a warning.
    pub max_account_level: u32,
    pub header_max_level: u32,
    pub require_date_separator: bool,
    pub drop_unknown_headers: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            sample_size: 10,
            max_account_level: 6,
            header_max_level: 3,
            require_date_separator: false,
            drop_unknown_headers: false,
        }
    }
}

impl ImportConfig {
    /// Read every value through a config reader, then validate.
    pub fn load(reader: &dyn ImportConfigReader) -> ImportResult<Self> {
        let config = Self {
            sample_size: reader.get_sample_size()?,
            max_account_level: reader.get_max_account_level()?,
            header_max_level: reader.get_header_max_level()?,
            require_date_separator: reader.get_require_date_separator()?,
            drop_unknown_headers: reader.get_drop_unknown_headers()?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ImportResult<()> {
        if self.sample_size == 0 {
            return Err(invalid(
                config_keys::SAMPLE_SIZE,
                self.sample_size,
                "must be at least 1",
            ));
        }
        if self.max_account_level == 0 {
            return Err(invalid(
                config_keys::MAX_ACCOUNT_LEVEL,
                self.max_account_level,
                "must be at least 1",
            ));
        }
        if self.header_max_level > self.max_account_level {
            return Err(invalid(
                config_keys::HEADER_MAX_LEVEL,
                self.header_max_level,
                "must not exceed max_account_level",
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, value: impl ToString, message: &str) -> ImportError {
    ImportError::ConfigValueError {
        key: key.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

impl ImportConfigReader for ImportConfig {
    fn get_sample_size(&self) -> ImportResult<usize> {
        Ok(self.sample_size)
    }

    fn get_require_date_separator(&self) -> ImportResult<bool> {
        Ok(self.require_date_separator)
    }

    fn get_drop_unknown_headers(&self) -> ImportResult<bool> {
        Ok(self.drop_unknown_headers)
    }

    fn get_max_account_level(&self) -> ImportResult<u32> {
        Ok(self.max_account_level)
    }

    fn get_header_max_level(&self) -> ImportResult<u32> {
        Ok(self.header_max_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ImportConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(ImportConfig::load(&config).unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_zero_sample_size() {
        let config = ImportConfig {
            sample_size: 0,
            ..ImportConfig::default()
        };
        match config.validate() {
            Err(ImportError::ConfigValueError { key, .. }) => assert_eq!(key, "sample_size"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_validate_header_level_bound() {
        let config = ImportConfig {
            max_account_level: 4,
            header_max_level: 5,
            ..ImportConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ImportConfig =
            serde_json::from_str(r#"{"require_date_separator": true}"#).unwrap();
        assert!(config.require_date_separator);
        assert_eq!(config.sample_size, 10);
        assert_eq!(config.max_account_level, 6);
    }
}
