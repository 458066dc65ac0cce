// ==========================================
// Fleetify Import Core - Import Stage Traits
// ==========================================
// Role: one trait per pipeline stage (no implementations here)
// Flow: canonicalize → infer → clean → (accounts) map → infer hierarchy → sort
// ==========================================

use crate::domain::account::{AccountRecord, HierarchyValidation, OrderViolation, ResolvedLevel};
use crate::domain::import::{CanonicalRow, CleanResult, FieldTypes};
use crate::domain::types::{CellValue, EntityKind, FieldType};
use crate::importer::header_canonicalizer::HeaderPlan;

// ==========================================
// HeaderCanonicalizer Trait
// ==========================================
// Implementor: header_canonicalizer::HeaderCanonicalizer
pub trait HeaderCanonicalizer: Send + Sync {
    /// Resolve a raw column header to its canonical key.
    ///
    /// # Matching order
    /// 1. exact (trimmed) header
    /// 2. lowercased header
    /// 3. pass-through of the trimmed header
    ///
    /// Never fails: unknown headers come back unchanged.
    fn canonicalize(&self, header: &str, entity_kind: EntityKind) -> String;

    /// Whether a header is a generic amount alias whose resolved key is
    /// entity-specific, so the row must also carry a literal `amount` key.
    fn keeps_literal_amount(&self, header: &str, entity_kind: EntityKind) -> bool;

    /// Canonicalize a whole header row once per batch.
    fn plan_headers(&self, headers: &[String], entity_kind: EntityKind) -> HeaderPlan;
}

// ==========================================
// TypeInferencer Trait
// ==========================================
// Implementor: type_inferencer::TypeInferencer
pub trait TypeInferencer: Send + Sync {
    /// Classify every column from its first non-empty cells.
    ///
    /// # Arguments
    /// - rows: the whole batch; each column reads its first non-empty cells
    /// - headers: canonical headers to classify
    fn infer_types(&self, rows: &[CanonicalRow], headers: &[String]) -> FieldTypes;

    /// Classify one column from its non-empty samples.
    ///
    /// # Rules (first match wins)
    /// 1. every sample is a boolean literal → Boolean
    /// 2. every sample is a finite number → Number
    /// 3. any sample is a date → Date
    /// 4. any sample contains '@' → Email
    /// 5. otherwise (or no samples) → Text
    fn infer_column(&self, samples: &[&CellValue]) -> FieldType;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// Implementor: data_cleaner::DataCleaner
pub trait DataCleaner: Send + Sync {
    /// Coerce every cell to its column type and collect issues.
    ///
    /// Never fails: errors and warnings are returned alongside the data,
    /// and rows with errors are still emitted.
    fn clean(&self, rows: Vec<CanonicalRow>, headers: &[String], types: &FieldTypes)
        -> CleanResult;
}

// ==========================================
// HierarchyInferencer Trait
// ==========================================
// Implementor: hierarchy_inferencer::HierarchyInferencer
pub trait HierarchyInferencer: Send + Sync {
    /// Code minus its last character; empty for codes of length <= 1.
    fn detect_parent(&self, code: &str) -> String;

    /// Depth from code length, saturating at the deepest reporting tier.
    fn compute_level(&self, code: &str) -> u32;

    /// Single precedence rule: a declared non-null level wins, otherwise computed.
    fn resolve_level(&self, declared: Option<&CellValue>, code: &str) -> ResolvedLevel;

    /// A declared non-empty parent wins, otherwise the code-derived one (None at the top tier).
    fn resolve_parent(&self, declared: Option<&str>, code: &str) -> Option<String>;

    /// Immediate-parent validation over one batch.
    fn validate_hierarchy(&self, batch: &[AccountRecord]) -> HierarchyValidation;
}

// ==========================================
// HierarchySorter Trait
// ==========================================
// Implementor: hierarchy_sorter::HierarchySorter
pub trait HierarchySorter: Send + Sync {
    /// Order by (account_level, account_code) so parents precede children.
    fn order_for_insertion(&self, batch: Vec<AccountRecord>) -> Vec<AccountRecord>;

    /// Records whose in-batch parent sits at a later position.
    fn find_order_violations(&self, ordered: &[AccountRecord]) -> Vec<OrderViolation>;
}
