// ==========================================
// Fleetify Import Core - Import Error Types
// ==========================================
// Tooling: thiserror derive
// Scope: programmer / configuration errors only. Row-level data problems
//        are reported as CellIssue / HierarchyIssue records, never as Err.
// ==========================================

use thiserror::Error;

/// Import module error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Caller contract =====
    #[error("unknown entity kind: '{0}' (expected customer, vehicle, contract, payment or chart_account)")]
    UnknownEntityKind(String),

    // ===== Configuration =====
    #[error("config read failed (key: {key}): {message}")]
    ConfigReadError { key: String, message: String },

    #[error("invalid config value (key: {key}, value: {value}): {message}")]
    ConfigValueError {
        key: String,
        value: String,
        message: String,
    },

    // ===== Reporting =====
    #[error("import report serialization failed: {0}")]
    ReportSerialization(String),

    // ===== Generic =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::ReportSerialization(err.to_string())
    }
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ImportError::UnknownEntityKind("invoice".to_string());
        assert!(err.to_string().contains("'invoice'"));

        let err = ImportError::ConfigValueError {
            key: "sample_size".to_string(),
            value: "0".to_string(),
            message: "must be at least 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value (key: sample_size, value: 0): must be at least 1"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ImportError = json_err.into();
        assert!(matches!(err, ImportError::ReportSerialization(_)));
    }

    #[test]
    fn test_anyhow_passes_through() {
        let err: ImportError = anyhow::anyhow!("reader closed early").into();
        assert!(matches!(err, ImportError::Other(_)));
        assert_eq!(err.to_string(), "reader closed early");
    }
}
