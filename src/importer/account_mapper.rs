// ==========================================
// Fleetify Import Core - Account Mapper
// ==========================================
// Role: CleanedRow → AccountRecord for chart-of-accounts batches
// Red line: rows without code / name and duplicate codes never enter the batch
// ==========================================

use crate::config::ImportConfig;
use crate::domain::account::{AccountRecord, LevelSource};
use crate::domain::import::{CellIssue, CleanedRow};
use crate::domain::types::{AccountType, BalanceType, CellValue};
use crate::importer::hierarchy_inferencer::DEFAULT_MAX_ACCOUNT_LEVEL;
use crate::importer::import_trait::HierarchyInferencer;
use crate::importer::value_parser::parse_bool_literal;
use std::collections::HashSet;
use tracing::debug;

pub const DEFAULT_HEADER_MAX_LEVEL: u32 = 3;

// keys consumed into AccountRecord fields; everything else lands in `extra`
const MAPPED_KEYS: &[&str] = &[
    "account_code",
    "account_name",
    "account_name_ar",
    "account_type",
    "balance_type",
    "parent_account_code",
    "account_level",
    "is_header",
    "description",
];

#[derive(Debug, Default)]
pub struct MappedAccounts {
    pub records: Vec<AccountRecord>,
    pub issues: Vec<CellIssue>, // errors and warnings, row-addressed
}

pub struct AccountMapper {
    header_max_level: u32,
    max_account_level: u32, // declared levels above this are kept but flagged
}

impl AccountMapper {
    pub fn new(header_max_level: u32, max_account_level: u32) -> Self {
        Self {
            header_max_level,
            max_account_level,
        }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(config.header_max_level, config.max_account_level)
    }

    /// Map cleaned rows to account records, in input order.
    pub fn map_rows(
        &self,
        rows: &[CleanedRow],
        hierarchy: &dyn HierarchyInferencer,
    ) -> MappedAccounts {
        let mut mapped = MappedAccounts::default();
        let mut seen: HashSet<String> = HashSet::new();

        for row in rows {
            let code = match row.text("account_code") {
                Some(code) => code,
                None => {
                    mapped.issues.push(CellIssue::error(
                        row.row_index,
                        "account_code",
                        "",
                        "account code is required",
                    ));
                    continue;
                }
            };

            let name = row.text("account_name");
            let name_ar = row.text("account_name_ar");
            if name.is_none() && name_ar.is_none() {
                mapped.issues.push(CellIssue::error(
                    row.row_index,
                    "account_name",
                    "",
                    "account name is required",
                ));
                continue;
            }

            if !seen.insert(code.clone()) {
                mapped.issues.push(CellIssue::error(
                    row.row_index,
                    "account_code",
                    code.as_str(),
                    "duplicate account code in batch",
                ));
                continue;
            }

            let record = self.build_record(row, code, name, name_ar, hierarchy, &mut mapped.issues);
            mapped.records.push(record);
        }

        debug!(
            accounts = mapped.records.len(),
            issues = mapped.issues.len(),
            "account rows mapped"
        );
        mapped
    }

    fn build_record(
        &self,
        row: &CleanedRow,
        code: String,
        name: Option<String>,
        name_ar: Option<String>,
        hierarchy: &dyn HierarchyInferencer,
        issues: &mut Vec<CellIssue>,
    ) -> AccountRecord {
        let account_name = name.clone().or_else(|| name_ar.clone()).unwrap_or_default();
        let account_name_ar = name_ar.or(name).unwrap_or_default();

        let resolved = hierarchy.resolve_level(row.get("account_level"), &code);
        if resolved.source == LevelSource::InvalidDeclared {
            issues.push(CellIssue::warning(
                row.row_index,
                "account_level",
                row.text("account_level").unwrap_or_default(),
                format!(
                    "account level is not a positive integer, computed level {} used",
                    resolved.level
                ),
            ));
        } else if resolved.source == LevelSource::Declared
            && resolved.level > self.max_account_level
        {
            issues.push(CellIssue::warning(
                row.row_index,
                "account_level",
                resolved.level.to_string(),
                format!(
                    "account level {} exceeds the deepest level {}",
                    resolved.level, self.max_account_level
                ),
            ));
        }

        let declared_parent = row.text("parent_account_code");
        let parent_declared = declared_parent.is_some();
        let parent_account_code = hierarchy.resolve_parent(declared_parent.as_deref(), &code);

        let account_type = match row.text("account_type") {
            Some(raw) => raw.parse::<AccountType>().unwrap_or_else(|message| {
                let fallback = AccountType::from_code(&code);
                issues.push(CellIssue::warning(
                    row.row_index,
                    "account_type",
                    raw.as_str(),
                    format!("{}, {} used", message, fallback),
                ));
                fallback
            }),
            None => AccountType::from_code(&code),
        };

        let balance_type = match row.text("balance_type") {
            Some(raw) => raw.parse::<BalanceType>().unwrap_or_else(|message| {
                let fallback = account_type.natural_balance();
                issues.push(CellIssue::warning(
                    row.row_index,
                    "balance_type",
                    raw.as_str(),
                    format!("{}, {} used", message, fallback),
                ));
                fallback
            }),
            None => account_type.natural_balance(),
        };

        // a blank source cell counts as absent, not as the cleaner's boolean default
        let is_header = match row.get("is_header").filter(|_| !row.is_blank("is_header")) {
            Some(CellValue::Boolean(b)) => *b,
            Some(CellValue::Number(n)) => *n != 0.0,
            Some(CellValue::Text(s)) => {
                parse_bool_literal(s).unwrap_or(resolved.level <= self.header_max_level)
            }
            _ => resolved.level <= self.header_max_level,
        };

        let description = row
            .text("description")
            .unwrap_or_else(|| format!("{} - {}", account_name_ar, account_name));

        let extra = row
            .fields
            .iter()
            .filter(|(key, _)| !MAPPED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        AccountRecord {
            account_code: code,
            account_name,
            account_name_ar,
            account_type,
            balance_type,
            parent_account_code,
            parent_declared,
            account_level: resolved.level,
            level_source: resolved.source,
            is_header,
            description,
            row_index: row.row_index,
            extra,
        }
    }
}

impl Default for AccountMapper {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER_MAX_LEVEL, DEFAULT_MAX_ACCOUNT_LEVEL)
    }
}
