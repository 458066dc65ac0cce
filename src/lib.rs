// ==========================================
// Fleetify Import Core - Library Root
// ==========================================
// Scope: bulk import normalization for customers, vehicles, contracts,
//        payments and the chart of accounts
// Out of scope: file reading, persistence, UI
// ==========================================

// ==========================================
// Modules
// ==========================================

// domain - batch and account types
pub mod domain;

// import stages and pipeline
pub mod importer;

// import tuning values
pub mod config;

// subscriber setup for host applications
pub mod logging;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{
    AccountImport, AccountRecord, AccountType, BalanceType, CanonicalRow, CellIssue, CellValue,
    CleanedRow, EntityKind, FieldType, FieldTypes, HierarchyIssue, HierarchyValidation,
    ImportOutcome, ImportRequest, ImportSummary, IssueSeverity, LevelSource,
};

pub use config::{ConfigManager, ImportConfig, ImportConfigReader};
pub use importer::{ImportError, ImportPipeline, ImportResult};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
