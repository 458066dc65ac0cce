// ==========================================
// Fleetify Import Core - Hierarchy Inferencer
// ==========================================
// Role: parent / level derivation from positional account codes
// Rule: code "1110101" → parent "111010" → ... → "1" (one char per tier)
// Red line: a declared level or parent is authoritative, never overwritten
// ==========================================

use crate::config::ImportConfig;
use crate::domain::account::{
    AccountRecord, HierarchyIssue, HierarchyValidation, LevelSource, ResolvedLevel,
};
use crate::domain::types::CellValue;
use crate::importer::import_trait::HierarchyInferencer as HierarchyInferencerTrait;
use crate::importer::value_parser::parse_number;
use std::collections::HashSet;

pub const DEFAULT_MAX_ACCOUNT_LEVEL: u32 = 6;

pub struct HierarchyInferencer {
    max_level: u32, // deepest reporting tier, longer codes saturate here
}

impl HierarchyInferencer {
    pub fn new(max_level: u32) -> Self {
        Self {
            max_level: max_level.max(1),
        }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(config.max_account_level)
    }

    fn declared_level(value: &CellValue) -> Option<u32> {
        let n = match value {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => parse_number(s),
            _ => None,
        }?;
        let level = n.trunc();
        (level >= 1.0 && level <= u32::MAX as f64).then_some(level as u32)
    }
}

impl Default for HierarchyInferencer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ACCOUNT_LEVEL)
    }
}

impl HierarchyInferencerTrait for HierarchyInferencer {
    fn detect_parent(&self, code: &str) -> String {
        let code = code.trim();
        let mut chars = code.chars();
        if chars.next_back().is_none() || chars.as_str().is_empty() {
            return String::new();
        }
        chars.as_str().to_string()
    }

    fn compute_level(&self, code: &str) -> u32 {
        let len = code.trim().chars().count() as u32;
        len.clamp(1, self.max_level)
    }

    fn resolve_level(&self, declared: Option<&CellValue>, code: &str) -> ResolvedLevel {
        let computed = self.compute_level(code);

        match declared.filter(|v| !v.is_empty()) {
            None => ResolvedLevel {
                level: computed,
                source: LevelSource::Computed,
            },
            Some(value) => match Self::declared_level(value) {
                Some(level) => ResolvedLevel {
                    level,
                    source: LevelSource::Declared,
                },
                None => ResolvedLevel {
                    level: computed,
                    source: LevelSource::InvalidDeclared,
                },
            },
        }
    }

    fn resolve_parent(&self, declared: Option<&str>, code: &str) -> Option<String> {
        match declared.map(str::trim).filter(|p| !p.is_empty()) {
            Some(parent) => Some(parent.to_string()),
            None => {
                let detected = self.detect_parent(code);
                (!detected.is_empty()).then_some(detected)
            }
        }
    }

    fn validate_hierarchy(&self, batch: &[AccountRecord]) -> HierarchyValidation {
        let codes: HashSet<&str> = batch.iter().map(|r| r.account_code.as_str()).collect();
        let mut issues = Vec::new();
        let mut suggestions: Vec<String> = Vec::new();

        for record in batch {
            let expected = self.detect_parent(&record.account_code);

            // immediate parent only; ancestors further up are not checked
            if !expected.is_empty() && !codes.contains(expected.as_str()) {
                issues.push(HierarchyIssue::MissingParent {
                    account_code: record.account_code.clone(),
                    expected_parent: expected.clone(),
                });
                let suggestion = format!("create parent account {} first", expected);
                if !suggestions.contains(&suggestion) {
                    suggestions.push(suggestion);
                }
            }

            if record.parent_declared {
                if let Some(declared) = &record.parent_account_code {
                    if *declared != expected {
                        issues.push(HierarchyIssue::ParentConflict {
                            account_code: record.account_code.clone(),
                            declared_parent: declared.clone(),
                            computed_parent: expected,
                        });
                    }
                }
            }
        }

        HierarchyValidation {
            is_valid: issues.is_empty(),
            issues,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::import::CanonicalRow;
    use crate::domain::types::{AccountType, BalanceType};

    fn record(code: &str) -> AccountRecord {
        let inferencer = HierarchyInferencer::default();
        AccountRecord {
            account_code: code.to_string(),
            account_name: format!("Account {}", code),
            account_name_ar: String::new(),
            account_type: AccountType::from_code(code),
            balance_type: BalanceType::Debit,
            parent_account_code: inferencer.resolve_parent(None, code),
            parent_declared: false,
            account_level: inferencer.compute_level(code),
            level_source: LevelSource::Computed,
            is_header: false,
            description: String::new(),
            row_index: 0,
            extra: CanonicalRow::new(),
        }
    }

    #[test]
    fn test_detect_parent() {
        let inferencer = HierarchyInferencer::default();
        assert_eq!(inferencer.detect_parent("1110101"), "111010");
        assert_eq!(inferencer.detect_parent("11"), "1");
        assert_eq!(inferencer.detect_parent("1"), "");
        assert_eq!(inferencer.detect_parent(""), "");
    }

    #[test]
    fn test_compute_level_table() {
        let inferencer = HierarchyInferencer::default();
        let cases = [
            ("1", 1),
            ("11", 2),
            ("111", 3),
            ("1110", 4),
            ("11101", 5),
            ("111010", 6),
            ("1110101", 6),
            ("111010101", 6),
        ];
        for (code, level) in cases {
            assert_eq!(inferencer.compute_level(code), level, "code {}", code);
        }
    }

    #[test]
    fn test_resolve_level_declared_wins() {
        let inferencer = HierarchyInferencer::default();

        let declared = CellValue::Number(3.0);
        let resolved = inferencer.resolve_level(Some(&declared), "1110101");
        assert_eq!(resolved.level, 3);
        assert_eq!(resolved.source, LevelSource::Declared);

        let declared = CellValue::text("4");
        assert_eq!(inferencer.resolve_level(Some(&declared), "11").level, 4);
    }

    #[test]
    fn test_resolve_level_absent_or_invalid() {
        let inferencer = HierarchyInferencer::default();

        let resolved = inferencer.resolve_level(None, "11101");
        assert_eq!(resolved.level, 5);
        assert_eq!(resolved.source, LevelSource::Computed);

        let resolved = inferencer.resolve_level(Some(&CellValue::Empty), "11");
        assert_eq!(resolved.source, LevelSource::Computed);

        let resolved = inferencer.resolve_level(Some(&CellValue::text("top")), "11");
        assert_eq!(resolved.level, 2);
        assert_eq!(resolved.source, LevelSource::InvalidDeclared);

        let resolved = inferencer.resolve_level(Some(&CellValue::Number(0.0)), "111");
        assert_eq!(resolved.source, LevelSource::InvalidDeclared);
    }

    #[test]
    fn test_resolve_parent() {
        let inferencer = HierarchyInferencer::default();
        assert_eq!(
            inferencer.resolve_parent(Some("11"), "1110101"),
            Some("11".to_string())
        );
        assert_eq!(
            inferencer.resolve_parent(Some("  "), "1110101"),
            Some("111010".to_string())
        );
        assert_eq!(inferencer.resolve_parent(None, "1"), None);
    }

    #[test]
    fn test_validate_single_missing_parent() {
        let inferencer = HierarchyInferencer::default();
        let batch = vec![record("1"), record("1110101")];

        let validation = inferencer.validate_hierarchy(&batch);

        assert!(!validation.is_valid);
        assert_eq!(validation.issues.len(), 1);
        assert_eq!(
            validation.issues[0],
            HierarchyIssue::MissingParent {
                account_code: "1110101".to_string(),
                expected_parent: "111010".to_string(),
            }
        );
        assert_eq!(validation.suggestions, vec!["create parent account 111010 first"]);
    }

    #[test]
    fn test_validate_complete_chain() {
        let inferencer = HierarchyInferencer::default();
        let batch: Vec<AccountRecord> = ["1", "11", "111"].iter().map(|c| record(c)).collect();

        let validation = inferencer.validate_hierarchy(&batch);

        assert!(validation.is_valid);
        assert!(validation.issues.is_empty());
        assert!(validation.suggestions.is_empty());
    }

    #[test]
    fn test_validate_parent_conflict() {
        let inferencer = HierarchyInferencer::default();
        let mut child = record("12");
        child.parent_account_code = Some("2".to_string());
        child.parent_declared = true;
        let batch = vec![record("1"), record("2"), child];

        let validation = inferencer.validate_hierarchy(&batch);

        assert!(!validation.is_valid);
        assert_eq!(validation.issues.len(), 1);
        assert!(matches!(
            validation.issues[0],
            HierarchyIssue::ParentConflict { .. }
        ));
        assert!(validation.suggestions.is_empty());
    }

    #[test]
    fn test_validate_deduplicates_suggestions() {
        let inferencer = HierarchyInferencer::default();
        let batch = vec![record("1101"), record("1102"), record("110")];
        // 1101 and 1102 share parent 110 (present); 110 misses 11
        let validation = inferencer.validate_hierarchy(&batch);
        assert_eq!(validation.issues.len(), 1);

        let batch = vec![record("1101"), record("1102")];
        let validation = inferencer.validate_hierarchy(&batch);
        assert_eq!(validation.issues.len(), 2);
        assert_eq!(validation.suggestions.len(), 1);
    }
}
