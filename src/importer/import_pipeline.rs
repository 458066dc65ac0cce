// ==========================================
// Fleetify Import Core - Import Pipeline
// ==========================================
// Role: run one batch through every stage and assemble the outcome
// Flow: plan headers → canonicalize rows → infer types → clean
//       → (chart_account) map → validate hierarchy → order
// Rule: row problems are reported, never returned as Err
// ==========================================

use crate::config::{ImportConfig, ImportConfigReader};
use crate::domain::account::AccountImport;
use crate::domain::import::{
    CanonicalRow, CellIssue, CleanedRow, FieldTypes, ImportOutcome, ImportRequest,
    ImportSummary,
};
use crate::domain::types::{CellValue, EntityKind, FieldType};
use crate::importer::account_mapper::AccountMapper;
use crate::importer::data_cleaner::DataCleaner as DefaultDataCleaner;
use crate::importer::error::ImportResult;
use crate::importer::header_canonicalizer::{
    HeaderCanonicalizer as DefaultHeaderCanonicalizer, HeaderPlan,
};
use crate::importer::header_dictionary::{declared_field_type, AMOUNT_KEY};
use crate::importer::hierarchy_inferencer::HierarchyInferencer as DefaultHierarchyInferencer;
use crate::importer::hierarchy_sorter::HierarchySorter as DefaultHierarchySorter;
use crate::importer::import_trait::{
    DataCleaner, HeaderCanonicalizer, HierarchyInferencer, HierarchySorter, TypeInferencer,
};
use crate::importer::type_inferencer::TypeInferencer as DefaultTypeInferencer;
use std::collections::{BTreeMap, BTreeSet};
use std::time::Instant;
use tracing::{debug, info, instrument, warn, Span};
use uuid::Uuid;

// ==========================================
// ImportPipeline
// ==========================================
pub struct ImportPipeline {
    config: ImportConfig,

    // stages
    header_canonicalizer: Box<dyn HeaderCanonicalizer>,
    type_inferencer: Box<dyn TypeInferencer>,
    data_cleaner: Box<dyn DataCleaner>,
    hierarchy_inferencer: Box<dyn HierarchyInferencer>,
    hierarchy_sorter: Box<dyn HierarchySorter>,

    account_mapper: AccountMapper,
}

impl ImportPipeline {
    /// Pipeline with the default stage implementations.
    ///
    /// # Errors
    /// - ConfigValueError: the config failed validation
    pub fn new(config: ImportConfig) -> ImportResult<Self> {
        config.validate()?;
        Ok(Self {
            header_canonicalizer: Box::new(DefaultHeaderCanonicalizer),
            type_inferencer: Box::new(DefaultTypeInferencer::from_config(&config)),
            data_cleaner: Box::new(DefaultDataCleaner),
            hierarchy_inferencer: Box::new(DefaultHierarchyInferencer::from_config(&config)),
            hierarchy_sorter: Box::new(DefaultHierarchySorter),
            account_mapper: AccountMapper::from_config(&config),
            config,
        })
    }

    /// Pipeline configured through a config reader (e.g. ConfigManager).
    pub fn from_reader(reader: &dyn ImportConfigReader) -> ImportResult<Self> {
        Self::new(ImportConfig::load(reader)?)
    }

    /// Pipeline with caller-supplied stages.
    pub fn with_components(
        config: ImportConfig,
        header_canonicalizer: Box<dyn HeaderCanonicalizer>,
        type_inferencer: Box<dyn TypeInferencer>,
        data_cleaner: Box<dyn DataCleaner>,
        hierarchy_inferencer: Box<dyn HierarchyInferencer>,
        hierarchy_sorter: Box<dyn HierarchySorter>,
    ) -> ImportResult<Self> {
        config.validate()?;
        Ok(Self {
            header_canonicalizer,
            type_inferencer,
            data_cleaner,
            hierarchy_inferencer,
            hierarchy_sorter,
            account_mapper: AccountMapper::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Run a batch whose entity kind arrives as text (e.g. from a UI route).
    ///
    /// # Errors
    /// - UnknownEntityKind: the name matches no entity kind
    pub fn run_named(
        &self,
        entity_kind: &str,
        headers: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> ImportResult<ImportOutcome> {
        let entity_kind: EntityKind = entity_kind.parse()?;
        self.run(ImportRequest::new(entity_kind, headers, rows))
    }

    /// Run one batch.
    ///
    /// # Returns
    /// - Ok(ImportOutcome): cleaned rows plus every error and warning found
    /// - Err: only for programmer errors; row problems land in the outcome
    #[instrument(skip(self, request), fields(batch_id, entity_kind = %request.entity_kind))]
    pub fn run(&self, request: ImportRequest) -> ImportResult<ImportOutcome> {
        let start_time = Instant::now();
        let ImportRequest {
            entity_kind,
            headers: raw_headers,
            rows: raw_rows,
            declared_types,
            required_fields,
            batch_id,
        } = request;

        let batch_id = batch_id.unwrap_or_else(|| Uuid::new_v4().to_string());
        Span::current().record("batch_id", batch_id.as_str());

        let total_rows = raw_rows.len();
        info!(
            total_rows,
            columns = raw_headers.len(),
            "import batch started"
        );

        // === step 1: headers ===
        let mut plan = self
            .header_canonicalizer
            .plan_headers(&raw_headers, entity_kind);
        if self.config.drop_unknown_headers {
            let dropped = plan.retain_known();
            if !dropped.is_empty() {
                warn!(dropped = ?dropped, "unknown headers dropped");
            }
        }
        let headers = plan.canonical_headers.clone();
        debug!(headers = ?headers, "headers canonicalized");

        // === step 2: rows ===
        let mut layout_warnings = Vec::new();
        let canonical_rows: Vec<CanonicalRow> = raw_rows
            .iter()
            .enumerate()
            .map(|(row_index, row)| {
                if let Some(issue) = surplus_cells(row_index, row, raw_headers.len()) {
                    layout_warnings.push(issue);
                }
                plan.canonicalize_row(row)
            })
            .collect();
        drop(raw_rows);

        // === step 3: types ===
        // the inferencer takes the first sample_size non-empty cells per column
        let field_types =
            self.resolve_types(&plan, &canonical_rows, &declared_types, entity_kind);
        debug!(field_types = ?field_types, "column types resolved");

        // === step 4: cleaning ===
        let mut cleaned = self
            .data_cleaner
            .clean(canonical_rows, &headers, &field_types);
        for issue in layout_warnings {
            cleaned.push_issue(issue);
        }
        let required = self.required_keys(&required_fields, entity_kind);
        for issue in missing_required(&cleaned.data, &required) {
            cleaned.push_issue(issue);
        }
        info!(
            errors = cleaned.errors.len(),
            warnings = cleaned.warnings.len(),
            "rows cleaned"
        );

        // === step 5: chart of accounts ===
        let accounts = if entity_kind == EntityKind::ChartAccount {
            let (accounts, issues) = self.import_accounts(&cleaned.data);
            for issue in issues {
                cleaned.push_issue(issue);
            }
            Some(accounts)
        } else {
            None
        };

        // row order first, stage order within a row
        cleaned.errors.sort_by_key(|issue| issue.row_index);
        cleaned.warnings.sort_by_key(|issue| issue.row_index);

        let error_rows: BTreeSet<usize> = cleaned.error_rows();
        let summary = ImportSummary {
            total_rows,
            clean_rows: total_rows - error_rows.len(),
            error_rows: error_rows.len(),
            error_count: cleaned.errors.len(),
            warning_count: cleaned.warnings.len(),
            hierarchy_issue_count: accounts
                .as_ref()
                .map(|a| a.validation.issues.len())
                .unwrap_or(0),
        };

        info!(
            total = summary.total_rows,
            clean = summary.clean_rows,
            error_rows = summary.error_rows,
            warnings = summary.warning_count,
            hierarchy_issues = summary.hierarchy_issue_count,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "import batch finished"
        );

        Ok(ImportOutcome {
            batch_id,
            entity_kind,
            headers,
            field_types,
            rows: cleaned.data,
            errors: cleaned.errors,
            warnings: cleaned.warnings,
            accounts,
            summary,
        })
    }

    /// Inferred types, overridden by vocabulary types, overridden by caller types.
    fn resolve_types(
        &self,
        plan: &HeaderPlan,
        rows: &[CanonicalRow],
        declared: &BTreeMap<String, FieldType>,
        entity_kind: EntityKind,
    ) -> FieldTypes {
        let headers = &plan.canonical_headers;
        let mut types = self.type_inferencer.infer_types(rows, headers);

        for header in headers {
            if let Some(field_type) = declared_field_type(header) {
                types.insert(header.clone(), field_type);
            }
        }

        for (raw, field_type) in declared {
            let key = self.header_canonicalizer.canonicalize(raw, entity_kind);
            if headers.contains(&key) {
                if self.header_canonicalizer.keeps_literal_amount(raw, entity_kind) {
                    types.insert(AMOUNT_KEY.to_string(), *field_type);
                }
                types.insert(key, *field_type);
            } else {
                debug!(header = %raw, "declared type for absent column ignored");
            }
        }

        types
    }

    /// Caller-required columns as canonical keys.
    fn required_keys(&self, required: &BTreeSet<String>, entity_kind: EntityKind) -> Vec<String> {
        let keys: BTreeSet<String> = required
            .iter()
            .map(|raw| self.header_canonicalizer.canonicalize(raw, entity_kind))
            .collect();
        keys.into_iter().collect()
    }

    fn import_accounts(
        &self,
        rows: &[CleanedRow],
    ) -> (AccountImport, Vec<CellIssue>) {
        let mapped = self
            .account_mapper
            .map_rows(rows, self.hierarchy_inferencer.as_ref());
        let mut issues = mapped.issues;

        let validation = self.hierarchy_inferencer.validate_hierarchy(&mapped.records);
        if !validation.is_valid {
            warn!(
                issues = validation.issues.len(),
                missing_parents = validation.missing_parents().count(),
                "chart of accounts hierarchy has issues"
            );
            for issue in &validation.issues {
                debug!(account_code = %issue.account_code(), "{}", issue);
            }
        }

        let ordered = self.hierarchy_sorter.order_for_insertion(mapped.records);
        let order_violations = self.hierarchy_sorter.find_order_violations(&ordered);
        for violation in &order_violations {
            warn!(
                account_code = %violation.account_code,
                parent = %violation.parent_account_code,
                "parent account ordered after its child"
            );
            if let Some(record) = ordered.get(violation.position) {
                issues.push(CellIssue::warning(
                    record.row_index,
                    "account_level",
                    record.account_level.to_string(),
                    format!(
                        "parent account {} is ordered after this account",
                        violation.parent_account_code
                    ),
                ));
            }
        }

        info!(
            accounts = ordered.len(),
            hierarchy_valid = validation.is_valid,
            "chart of accounts ordered"
        );

        (
            AccountImport {
                ordered,
                validation,
                order_violations,
            },
            issues,
        )
    }
}

/// One error per row and required column whose source cell was empty or absent.
fn missing_required(rows: &[CleanedRow], required: &[String]) -> Vec<CellIssue> {
    let mut issues = Vec::new();
    for row in rows {
        for key in required.iter().filter(|key| row.is_blank(key)) {
            issues.push(CellIssue::error(
                row.row_index,
                key.as_str(),
                "",
                format!("{} is required", key),
            ));
        }
    }
    issues
}

/// Warning for non-empty cells beyond the header row.
fn surplus_cells(row_index: usize, row: &[CellValue], header_count: usize) -> Option<CellIssue> {
    let surplus: Vec<String> = row
        .iter()
        .skip(header_count)
        .filter(|cell| !cell.is_empty())
        .map(ToString::to_string)
        .collect();
    if surplus.is_empty() {
        return None;
    }
    Some(CellIssue::warning(
        row_index,
        format!("#{}", header_count + 1),
        surplus.join(", "),
        format!(
            "row has {} cells beyond the header row, ignored",
            row.len() - header_count
        ),
    ))
}
