// ==========================================
// Fleetify Import Core - Import Batch Model
// ==========================================
// Role: canonical rows, cleaned rows, cell issues, batch outcome
// Lifecycle: everything here lives for a single import call
// ==========================================

use crate::domain::account::AccountImport;
use crate::domain::types::{CellValue, EntityKind, FieldType};
use crate::importer::error::ImportResult;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Canonical field key → value. BTreeMap keeps iteration deterministic.
pub type CanonicalRow = BTreeMap<String, CellValue>;

/// Column → type, keyed by canonical header.
pub type FieldTypes = BTreeMap<String, FieldType>;

// ==========================================
// CleanedRow - a canonical row after type coercion
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedRow {
    pub row_index: usize, // 0-based position in the batch
    pub fields: CanonicalRow,
    /// Columns that were empty in the source row, before coercion defaults.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub blank_fields: BTreeSet<String>,
}

impl CleanedRow {
    pub fn new(row_index: usize, fields: CanonicalRow) -> Self {
        Self {
            row_index,
            fields,
            blank_fields: BTreeSet::new(),
        }
    }

    /// True when the source cell was empty or the column is absent.
    pub fn is_blank(&self, key: &str) -> bool {
        self.blank_fields.contains(key) || self.fields.get(key).map_or(true, CellValue::is_empty)
    }

    pub fn get(&self, key: &str) -> Option<&CellValue> {
        self.fields.get(key)
    }

    /// Trimmed non-empty text of a field.
    pub fn text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(CellValue::to_trimmed_text)
    }
}

// ==========================================
// IssueSeverity
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Error,   // value could not be coerced, row returned for caller disposition
    Warning, // safe default applied, import proceeds
}

// ==========================================
// CellIssue - row/column addressed problem
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellIssue {
    pub severity: IssueSeverity,
    pub row_index: usize,
    pub row_number: usize, // spreadsheet line, header is line 1
    pub column: String,
    pub value: String,
    pub message: String,
}

impl CellIssue {
    pub fn error(
        row_index: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(IssueSeverity::Error, row_index, column, value, message)
    }

    pub fn warning(
        row_index: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(IssueSeverity::Warning, row_index, column, value, message)
    }

    fn new(
        severity: IssueSeverity,
        row_index: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            row_index,
            row_number: row_index + 2,
            column: column.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

impl fmt::Display for CellIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} column '{}': {} (value: '{}')",
            self.row_number, self.column, self.message, self.value
        )
    }
}

// ==========================================
// CleanResult - DataCleaner output
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanResult {
    pub data: Vec<CleanedRow>,
    pub errors: Vec<CellIssue>,
    pub warnings: Vec<CellIssue>,
}

impl CleanResult {
    /// Row indices carrying at least one hard error.
    pub fn error_rows(&self) -> BTreeSet<usize> {
        self.errors.iter().map(|e| e.row_index).collect()
    }

    pub fn push_issue(&mut self, issue: CellIssue) {
        if issue.is_error() {
            self.errors.push(issue);
        } else {
            self.warnings.push(issue);
        }
    }
}

// ==========================================
// ImportRequest - one batch handed in by the external reader
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    pub entity_kind: EntityKind,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
    /// Caller-declared column types, keyed by raw or canonical header.
    #[serde(default)]
    pub declared_types: BTreeMap<String, FieldType>,
    /// Columns that must be non-empty in every row, keyed by raw or canonical header.
    #[serde(default)]
    pub required_fields: BTreeSet<String>,
    /// Correlation id for logs and reports; generated when absent.
    #[serde(default)]
    pub batch_id: Option<String>,
}

impl ImportRequest {
    pub fn new(entity_kind: EntityKind, headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            entity_kind,
            headers,
            rows,
            declared_types: BTreeMap::new(),
            required_fields: BTreeSet::new(),
            batch_id: None,
        }
    }

    pub fn with_declared_type(mut self, header: impl Into<String>, field_type: FieldType) -> Self {
        self.declared_types.insert(header.into(), field_type);
        self
    }

    pub fn with_required_field(mut self, header: impl Into<String>) -> Self {
        self.required_fields.insert(header.into());
        self
    }

    pub fn with_batch_id(mut self, batch_id: impl Into<String>) -> Self {
        self.batch_id = Some(batch_id.into());
        self
    }
}

// ==========================================
// ImportSummary - batch statistics
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSummary {
    pub total_rows: usize,
    pub clean_rows: usize,  // rows without hard errors
    pub error_rows: usize,  // rows with at least one hard error
    pub error_count: usize,
    pub warning_count: usize,
    pub hierarchy_issue_count: usize,
}

// ==========================================
// ImportOutcome - pipeline result handed to persistence
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub batch_id: String,
    pub entity_kind: EntityKind,
    pub headers: Vec<String>, // canonical, in column order
    pub field_types: FieldTypes,
    pub rows: Vec<CleanedRow>,
    pub errors: Vec<CellIssue>,
    pub warnings: Vec<CellIssue>,
    pub accounts: Option<AccountImport>,
    pub summary: ImportSummary,
}

impl ImportOutcome {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Pretty JSON report for the persistence layer / UI.
    pub fn to_json(&self) -> ImportResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
