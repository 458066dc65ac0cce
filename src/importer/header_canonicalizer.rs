// ==========================================
// Fleetify Import Core - Header Canonicalizer
// ==========================================
// Role: raw header → canonical key (entity-aware), row → CanonicalRow
// Rule: no header is ever rejected; unknown headers pass through trimmed
// ==========================================

use crate::domain::import::CanonicalRow;
use crate::domain::types::{CellValue, EntityKind};
use crate::importer::header_dictionary::{is_canonical, lookup_header, HeaderAlias, AMOUNT_KEY};
use crate::importer::import_trait::HeaderCanonicalizer as HeaderCanonicalizerTrait;
use serde::{Deserialize, Serialize};

pub struct HeaderCanonicalizer;

impl HeaderCanonicalizer {
    /// Exact match first, then lowercased.
    fn find_alias(header: &str) -> Option<HeaderAlias> {
        lookup_header(header).or_else(|| lookup_header(&header.to_lowercase()))
    }
}

impl HeaderCanonicalizerTrait for HeaderCanonicalizer {
    fn canonicalize(&self, header: &str, entity_kind: EntityKind) -> String {
        let trimmed = header.trim();
        match Self::find_alias(trimmed) {
            Some(alias) => alias.resolve(entity_kind).to_string(),
            None => trimmed.to_string(),
        }
    }

    fn keeps_literal_amount(&self, header: &str, entity_kind: EntityKind) -> bool {
        Self::find_alias(header.trim())
            .map(|alias| alias.dual_amount && alias.resolve(entity_kind) != AMOUNT_KEY)
            .unwrap_or(false)
    }

    fn plan_headers(&self, headers: &[String], entity_kind: EntityKind) -> HeaderPlan {
        let mut plan = HeaderPlan::default();

        for (source_index, raw_header) in headers.iter().enumerate() {
            let key = self.canonicalize(raw_header, entity_kind);
            let literal_amount = self.keeps_literal_amount(raw_header, entity_kind);

            plan.push_header(&key);
            if literal_amount {
                plan.push_header(AMOUNT_KEY);
            }

            plan.columns.push(ColumnMapping {
                source_index,
                raw_header: raw_header.clone(),
                key,
                literal_amount,
            });
        }

        plan
    }
}

// ==========================================
// ColumnMapping - one source column
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub source_index: usize,
    pub raw_header: String,
    pub key: String,
    pub literal_amount: bool,
}

// ==========================================
// HeaderPlan - canonicalized header row of a batch
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderPlan {
    pub columns: Vec<ColumnMapping>,
    /// Deduplicated canonical headers, first-occurrence order.
    pub canonical_headers: Vec<String>,
}

impl HeaderPlan {
    fn push_header(&mut self, key: &str) {
        if !self.canonical_headers.iter().any(|h| h == key) {
            self.canonical_headers.push(key.to_string());
        }
    }

    /// Build the canonical row for one raw row.
    ///
    /// Missing trailing cells are empty. When several raw columns share a key,
    /// the first non-empty value wins.
    pub fn canonicalize_row(&self, row: &[CellValue]) -> CanonicalRow {
        let mut canonical: CanonicalRow = self
            .canonical_headers
            .iter()
            .map(|h| (h.clone(), CellValue::Empty))
            .collect();

        for column in &self.columns {
            let value = row.get(column.source_index).cloned().unwrap_or_default();
            if value.is_empty() {
                continue;
            }
            if column.literal_amount {
                Self::fill(&mut canonical, AMOUNT_KEY, value.clone());
            }
            Self::fill(&mut canonical, &column.key, value);
        }

        canonical
    }

    fn fill(row: &mut CanonicalRow, key: &str, value: CellValue) {
        let slot = row.entry(key.to_string()).or_default();
        if slot.is_empty() {
            *slot = value;
        }
    }

    /// Drop columns whose key is outside the canonical vocabulary.
    pub fn retain_known(&mut self) -> Vec<String> {
        let dropped: Vec<String> = self
            .canonical_headers
            .iter()
            .filter(|h| !is_canonical(h))
            .cloned()
            .collect();
        self.columns.retain(|c| is_canonical(&c.key));
        self.canonical_headers.retain(|h| is_canonical(h));
        dropped
    }
}
