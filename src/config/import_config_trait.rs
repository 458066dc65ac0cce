// ==========================================
// Fleetify Import Core - Import Config Reader Trait
// ==========================================
// Role: read interface for import tuning values (no implementation here)
// Red line: no config writes, no import logic
// ==========================================

use crate::importer::error::ImportResult;

// ==========================================
// ImportConfigReader Trait
// ==========================================
// Implementors: ConfigManager (key-value store), ImportConfig (in-memory)
pub trait ImportConfigReader: Send + Sync {
    // ===== Type inference =====

    /// Non-empty samples inspected per column.
    ///
    /// # Default
    /// - 10
    fn get_sample_size(&self) -> ImportResult<usize>;

    /// Whether all-digit samples are excluded from date detection.
    ///
    /// # Default
    /// - false (permissive)
    fn get_require_date_separator(&self) -> ImportResult<bool>;

    // ===== Header handling =====

    /// Whether headers outside the canonical vocabulary are dropped.
    ///
    /// # Default
    /// - false (unknown headers pass through)
    fn get_drop_unknown_headers(&self) -> ImportResult<bool>;

    // ===== Chart of accounts =====

    /// Deepest reporting tier; longer codes saturate here.
    ///
    /// # Default
    /// - 6
    fn get_max_account_level(&self) -> ImportResult<u32>;

    /// Accounts at or above this level are header accounts when the
    /// source row does not say otherwise.
    ///
    /// # Default
    /// - 3
    fn get_header_max_level(&self) -> ImportResult<u32>;
}
