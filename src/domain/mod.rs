// ==========================================
// Fleetify Import Core - Domain Layer
// ==========================================
// Role: entities, value types, batch and account models
// Red line: no canonicalization / inference / cleaning logic here
// ==========================================

pub mod account;
pub mod import;
pub mod types;

// Re-export core types
pub use account::{
    AccountImport, AccountRecord, HierarchyIssue, HierarchyValidation, LevelSource,
    OrderViolation, ResolvedLevel,
};
pub use import::{
    CanonicalRow, CellIssue, CleanResult, CleanedRow, FieldTypes, ImportOutcome, ImportRequest,
    ImportSummary, IssueSeverity,
};
pub use types::{AccountType, BalanceType, CellValue, EntityKind, FieldType};
