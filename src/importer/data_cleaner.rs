// ==========================================
// Fleetify Import Core - Data Cleaner
// ==========================================
// Role: TRIM / NULL normalization / type coercion per column
// Rule: never aborts; every problem becomes a CellIssue
//   boolean: unrecognized → false + WARNING, empty → false silently
//   number:  unparseable  → ERROR, original value kept
//   date:    unparseable  → WARNING, trimmed text kept
// ==========================================

use crate::domain::import::{CanonicalRow, CellIssue, CleanResult, CleanedRow, FieldTypes};
use crate::domain::types::{CellValue, FieldType};
use crate::importer::import_trait::DataCleaner as DataCleanerTrait;
use crate::importer::value_parser::{parse_bool_literal, parse_date, parse_number};
use chrono::{Duration, NaiveDate};

// Spreadsheet serial dates count days from 1899-12-30.
const SERIAL_DATE_MAX: f64 = 2_958_465.0; // 9999-12-31

pub struct DataCleaner;

impl DataCleaner {
    /// TRIM + NULL normalization (whitespace-only → Empty).
    pub fn clean_text(&self, value: &str) -> CellValue {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    /// Coerce one cell.
    ///
    /// # Returns
    /// - the coerced value (or the original one when coercion failed)
    /// - an optional issue addressed by row and column
    pub fn clean_cell(
        &self,
        row_index: usize,
        column: &str,
        value: CellValue,
        field_type: FieldType,
    ) -> (CellValue, Option<CellIssue>) {
        match field_type {
            FieldType::Text | FieldType::Email => (self.to_text(value), None),
            FieldType::Boolean => self.clean_boolean(row_index, column, value),
            FieldType::Number => self.clean_number(row_index, column, value),
            FieldType::Date => self.clean_date(row_index, column, value),
        }
    }

    fn to_text(&self, value: CellValue) -> CellValue {
        match value {
            CellValue::Text(s) => self.clean_text(&s),
            CellValue::Empty => CellValue::Empty,
            other => CellValue::Text(other.to_string()),
        }
    }

    fn clean_boolean(
        &self,
        row_index: usize,
        column: &str,
        value: CellValue,
    ) -> (CellValue, Option<CellIssue>) {
        if value.is_empty() {
            return (CellValue::Boolean(false), None);
        }

        let recognized = match &value {
            CellValue::Boolean(b) => Some(*b),
            CellValue::Number(n) if *n == 1.0 => Some(true),
            CellValue::Number(n) if *n == 0.0 => Some(false),
            CellValue::Text(s) => parse_bool_literal(s),
            _ => None,
        };

        match recognized {
            Some(b) => (CellValue::Boolean(b), None),
            None => (
                CellValue::Boolean(false),
                Some(CellIssue::warning(
                    row_index,
                    column,
                    value.to_string(),
                    "unrecognized boolean value, defaulted to false",
                )),
            ),
        }
    }

    fn clean_number(
        &self,
        row_index: usize,
        column: &str,
        value: CellValue,
    ) -> (CellValue, Option<CellIssue>) {
        if value.is_empty() {
            return (CellValue::Empty, None);
        }

        let parsed = match &value {
            CellValue::Number(n) if n.is_finite() => Some(*n),
            CellValue::Text(s) => parse_number(s),
            _ => None,
        };

        match parsed {
            Some(n) => (CellValue::Number(n), None),
            None => {
                let issue = CellIssue::error(
                    row_index,
                    column,
                    value.to_string(),
                    "value is not a valid number",
                );
                (value, Some(issue))
            }
        }
    }

    fn clean_date(
        &self,
        row_index: usize,
        column: &str,
        value: CellValue,
    ) -> (CellValue, Option<CellIssue>) {
        if value.is_empty() {
            return (CellValue::Empty, None);
        }

        let parsed = match &value {
            CellValue::Date(d) => Some(*d),
            CellValue::Text(s) => parse_date(s),
            CellValue::Number(n) => parse_date(&value.to_string()).or_else(|| serial_date(*n)),
            _ => None,
        };

        match parsed {
            Some(date) => (CellValue::Date(date), None),
            None => {
                let issue = CellIssue::warning(
                    row_index,
                    column,
                    value.to_string(),
                    "unrecognized date format, kept as text",
                );
                (self.to_text(value), Some(issue))
            }
        }
    }
}

fn serial_date(serial: f64) -> Option<NaiveDate> {
    if serial < 1.0 || serial > SERIAL_DATE_MAX {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

impl DataCleanerTrait for DataCleaner {
    fn clean(
        &self,
        rows: Vec<CanonicalRow>,
        headers: &[String],
        types: &FieldTypes,
    ) -> CleanResult {
        let mut result = CleanResult {
            data: Vec::with_capacity(rows.len()),
            ..CleanResult::default()
        };

        for (row_index, mut row) in rows.into_iter().enumerate() {
            let mut cleaned = CleanedRow::new(row_index, CanonicalRow::new());

            for header in headers {
                let value = row.remove(header).unwrap_or_default();
                if value.is_empty() {
                    cleaned.blank_fields.insert(header.clone());
                }
                let field_type = types.get(header).copied().unwrap_or(FieldType::Text);
                let (value, issue) = self.clean_cell(row_index, header, value, field_type);
                if let Some(issue) = issue {
                    result.push_issue(issue);
                }
                cleaned.fields.insert(header.clone(), value);
            }

            // keys outside the header list are passed through as text
            for (key, value) in row {
                cleaned.fields.insert(key, self.to_text(value));
            }

            result.data.push(cleaned);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::import::IssueSeverity;

    fn row(pairs: &[(&str, CellValue)]) -> CanonicalRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn types(pairs: &[(&str, FieldType)]) -> FieldTypes {
        pairs.iter().map(|(k, t)| (k.to_string(), *t)).collect()
    }

    #[test]
    fn test_clean_text_basic() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_text("  hello  "), CellValue::text("hello"));
        assert_eq!(cleaner.clean_text("   "), CellValue::Empty);
    }

    #[test]
    fn test_boolean_coercion_and_warning() {
        let cleaner = DataCleaner;
        let rows = vec![
            row(&[("is_active", CellValue::text("Yes"))]),
            row(&[("is_active", CellValue::Empty)]),
            row(&[("is_active", CellValue::text("maybe"))]),
        ];
        let headers = vec!["is_active".to_string()];

        let result = cleaner.clean(rows, &headers, &types(&[("is_active", FieldType::Boolean)]));

        assert_eq!(result.data[0].get("is_active"), Some(&CellValue::Boolean(true)));
        assert_eq!(result.data[1].get("is_active"), Some(&CellValue::Boolean(false)));
        assert_eq!(result.data[2].get("is_active"), Some(&CellValue::Boolean(false)));
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].row_index, 2);
        assert_eq!(result.warnings[0].column, "is_active");
        assert_eq!(result.warnings[0].value, "maybe");
        assert_eq!(result.warnings[0].severity, IssueSeverity::Warning);
    }

    #[test]
    fn test_number_error_keeps_original_value() {
        let cleaner = DataCleaner;
        let rows = vec![
            row(&[("amount", CellValue::text(" 1500 "))]),
            row(&[("amount", CellValue::text("12abc"))]),
            row(&[("amount", CellValue::Empty)]),
        ];
        let headers = vec!["amount".to_string()];

        let result = cleaner.clean(rows, &headers, &types(&[("amount", FieldType::Number)]));

        assert_eq!(result.data.len(), 3);
        assert_eq!(result.data[0].get("amount"), Some(&CellValue::Number(1500.0)));
        assert_eq!(result.data[1].get("amount"), Some(&CellValue::text("12abc")));
        assert_eq!(result.data[2].get("amount"), Some(&CellValue::Empty));
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].row_number, 3);
        assert_eq!(result.errors[0].value, "12abc");
    }

    #[test]
    fn test_date_coercion() {
        let cleaner = DataCleaner;
        let (value, issue) =
            cleaner.clean_cell(0, "start_date", CellValue::text("15/01/2024"), FieldType::Date);
        assert_eq!(value, CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        assert!(issue.is_none());

        let (value, issue) =
            cleaner.clean_cell(0, "start_date", CellValue::Number(45306.0), FieldType::Date);
        assert_eq!(value, CellValue::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
        assert!(issue.is_none());

        let (value, issue) =
            cleaner.clean_cell(4, "start_date", CellValue::text(" soon "), FieldType::Date);
        assert_eq!(value, CellValue::text("soon"));
        assert_eq!(issue.unwrap().severity, IssueSeverity::Warning);
    }

    #[test]
    fn test_text_column_stringifies_numbers() {
        let cleaner = DataCleaner;
        let (value, issue) =
            cleaner.clean_cell(0, "account_code", CellValue::Number(1110101.0), FieldType::Text);
        assert_eq!(value, CellValue::text("1110101"));
        assert!(issue.is_none());
    }

    #[test]
    fn test_untyped_and_extra_columns_are_text() {
        let cleaner = DataCleaner;
        let rows = vec![row(&[
            ("notes", CellValue::text("  late  ")),
            ("Dealer Notes", CellValue::text(" x ")),
        ])];

        let result = cleaner.clean(rows, &["notes".to_string()], &FieldTypes::new());

        assert_eq!(result.data[0].get("notes"), Some(&CellValue::text("late")));
        assert_eq!(result.data[0].get("Dealer Notes"), Some(&CellValue::text("x")));
    }

    #[test]
    fn test_blank_source_cells_are_recorded() {
        let cleaner = DataCleaner;
        let rows = vec![row(&[
            ("is_header", CellValue::text("   ")),
            ("account_code", CellValue::text("11")),
        ])];
        let headers = vec!["is_header".to_string(), "account_code".to_string()];

        let result = cleaner.clean(rows, &headers, &types(&[("is_header", FieldType::Boolean)]));

        let cleaned = &result.data[0];
        assert_eq!(cleaned.get("is_header"), Some(&CellValue::Boolean(false)));
        assert!(cleaned.is_blank("is_header"));
        assert!(!cleaned.is_blank("account_code"));
        assert!(cleaned.is_blank("parent_account_code"));
    }
}
