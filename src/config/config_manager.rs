// ==========================================
// Fleetify Import Core - Config Manager
// ==========================================
// Role: key-value config store backing ImportConfigReader
// Source: (key, value) string pairs or a flat JSON object
// ==========================================

use crate::config::import_config_trait::ImportConfigReader;
use crate::importer::error::{ImportError, ImportResult};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::str::FromStr;

// ==========================================
// ConfigManager
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load from a flat JSON object; scalar values are stored as their text.
    ///
    /// # Errors
    /// - ConfigReadError: not JSON, not an object, or a nested value
    pub fn from_json_str(raw: &str) -> ImportResult<Self> {
        let parsed: Value = serde_json::from_str(raw).map_err(|e| ImportError::ConfigReadError {
            key: "*".to_string(),
            message: e.to_string(),
        })?;

        let object = parsed.as_object().ok_or_else(|| ImportError::ConfigReadError {
            key: "*".to_string(),
            message: "expected a JSON object".to_string(),
        })?;

        let mut values = HashMap::with_capacity(object.len());
        for (key, value) in object {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null => continue,
                _ => {
                    return Err(ImportError::ConfigReadError {
                        key: key.clone(),
                        message: "nested values are not supported".to_string(),
                    })
                }
            };
            values.insert(key.clone(), text);
        }

        Ok(Self { values })
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    fn get_config_or_default<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get_config_value(key).unwrap_or(default)
    }

    /// Parse a key, falling back to `default` when absent.
    fn parse_or_default<T: FromStr>(&self, key: &str, default: &str) -> ImportResult<T> {
        let raw = self.get_config_or_default(key, default).trim();
        raw.parse::<T>().map_err(|_| ImportError::ConfigValueError {
            key: key.to_string(),
            value: raw.to_string(),
            message: format!("expected {}", std::any::type_name::<T>()),
        })
    }

    fn parse_flag(&self, key: &str, default: bool) -> ImportResult<bool> {
        let raw = match self.get_config_value(key) {
            Some(raw) => raw.trim(),
            None => return Ok(default),
        };
        match raw.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ImportError::ConfigValueError {
                key: key.to_string(),
                value: raw.to_string(),
                message: "expected a boolean".to_string(),
            }),
        }
    }

    /// Snapshot of all stored values as a JSON object, keys sorted.
    pub fn get_config_snapshot(&self) -> ImportResult<String> {
        let sorted: BTreeMap<&String, &String> = self.values.iter().collect();
        Ok(serde_json::to_string(&json!(sorted))?)
    }
}

// ==========================================
// ImportConfigReader implementation
// ==========================================
impl ImportConfigReader for ConfigManager {
    fn get_sample_size(&self) -> ImportResult<usize> {
        self.parse_or_default(config_keys::SAMPLE_SIZE, "10")
    }

    fn get_require_date_separator(&self) -> ImportResult<bool> {
        self.parse_flag(config_keys::REQUIRE_DATE_SEPARATOR, false)
    }

    fn get_drop_unknown_headers(&self) -> ImportResult<bool> {
        self.parse_flag(config_keys::DROP_UNKNOWN_HEADERS, false)
    }

    fn get_max_account_level(&self) -> ImportResult<u32> {
        self.parse_or_default(config_keys::MAX_ACCOUNT_LEVEL, "6")
    }

    fn get_header_max_level(&self) -> ImportResult<u32> {
        self.parse_or_default(config_keys::HEADER_MAX_LEVEL, "3")
    }
}

// ==========================================
// Config keys
// ==========================================
pub mod config_keys {
    // type inference
    pub const SAMPLE_SIZE: &str = "sample_size";
    pub const REQUIRE_DATE_SEPARATOR: &str = "require_date_separator";

    // headers
    pub const DROP_UNKNOWN_HEADERS: &str = "drop_unknown_headers";

    // chart of accounts
    pub const MAX_ACCOUNT_LEVEL: &str = "max_account_level";
    pub const HEADER_MAX_LEVEL: &str = "header_max_level";
}
