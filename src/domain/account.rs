// ==========================================
// Fleetify Import Core - Chart-of-Accounts Model
// ==========================================
// Role: account records, level provenance, hierarchy validation report
// Invariant: account_code is non-empty and unique within a batch
// Invariant: a declared account_level is authoritative and never recomputed
// ==========================================

use crate::domain::import::CanonicalRow;
use crate::domain::types::{AccountType, BalanceType};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// LevelSource - where account_level came from
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelSource {
    Declared,        // taken verbatim from the source row
    Computed,        // derived from the code length
    InvalidDeclared, // source value was not a positive integer, computed instead
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLevel {
    pub level: u32,
    pub source: LevelSource,
}

// ==========================================
// AccountRecord - one chart-of-accounts entry
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub account_code: String,
    pub account_name: String,
    pub account_name_ar: String,
    pub account_type: AccountType,
    pub balance_type: BalanceType,
    pub parent_account_code: Option<String>,
    pub parent_declared: bool, // parent came from the row, not from the code
    pub account_level: u32,
    pub level_source: LevelSource,
    pub is_header: bool, // header accounts take no direct postings
    pub description: String,
    pub row_index: usize,
    pub extra: CanonicalRow, // remaining cleaned fields, passed through
}

// ==========================================
// HierarchyIssue - advisory validation finding
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HierarchyIssue {
    MissingParent {
        account_code: String,
        expected_parent: String,
    },
    ParentConflict {
        account_code: String,
        declared_parent: String,
        computed_parent: String,
    },
}

impl HierarchyIssue {
    pub fn account_code(&self) -> &str {
        match self {
            HierarchyIssue::MissingParent { account_code, .. } => account_code,
            HierarchyIssue::ParentConflict { account_code, .. } => account_code,
        }
    }
}

impl fmt::Display for HierarchyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HierarchyIssue::MissingParent {
                account_code,
                expected_parent,
            } => write!(
                f,
                "account {}: parent account {} is missing from the batch",
                account_code, expected_parent
            ),
            HierarchyIssue::ParentConflict {
                account_code,
                declared_parent,
                computed_parent,
            } => {
                let computed = if computed_parent.is_empty() {
                    "none (top level)"
                } else {
                    computed_parent.as_str()
                };
                write!(
                    f,
                    "account {}: declared parent {} conflicts with code-derived parent {}",
                    account_code, declared_parent, computed
                )
            }
        }
    }
}

// ==========================================
// HierarchyValidation - validate_hierarchy output
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyValidation {
    pub is_valid: bool,
    pub issues: Vec<HierarchyIssue>,
    pub suggestions: Vec<String>,
}

impl HierarchyValidation {
    pub fn missing_parents(&self) -> impl Iterator<Item = &HierarchyIssue> {
        self.issues
            .iter()
            .filter(|i| matches!(i, HierarchyIssue::MissingParent { .. }))
    }
}

// ==========================================
// OrderViolation - parent placed after its child
// ==========================================
// Only possible when a declared level override breaks level/length monotonicity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderViolation {
    pub account_code: String,
    pub parent_account_code: String,
    pub position: usize,
    pub parent_position: usize,
}

// ==========================================
// AccountImport - chart-of-accounts part of an import outcome
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountImport {
    pub ordered: Vec<AccountRecord>, // parents before children
    pub validation: HierarchyValidation,
    pub order_violations: Vec<OrderViolation>,
}
