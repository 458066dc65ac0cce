// ==========================================
// Fleetify Import Core - Type Inferencer
// ==========================================
// Role: classify each column as boolean / number / date / email / text
// Cost: bounded by sample_size regardless of batch size
// ==========================================

use crate::config::ImportConfig;
use crate::domain::import::{CanonicalRow, FieldTypes};
use crate::domain::types::{CellValue, FieldType};
use crate::importer::import_trait::TypeInferencer as TypeInferencerTrait;
use crate::importer::value_parser::{looks_like_date, parse_bool_literal, parse_number};

pub const DEFAULT_SAMPLE_SIZE: usize = 10;

pub struct TypeInferencer {
    sample_size: usize,           // max non-empty samples per column
    require_date_separator: bool, // all-digit samples never count as dates
}

impl TypeInferencer {
    pub fn new(sample_size: usize, require_date_separator: bool) -> Self {
        Self {
            sample_size,
            require_date_separator,
        }
    }

    pub fn from_config(config: &ImportConfig) -> Self {
        Self::new(config.sample_size, config.require_date_separator)
    }

    fn is_boolean(value: &CellValue) -> bool {
        match value {
            CellValue::Boolean(_) => true,
            CellValue::Number(n) => *n == 0.0 || *n == 1.0,
            CellValue::Text(s) => parse_bool_literal(s).is_some(),
            _ => false,
        }
    }

    fn is_number(value: &CellValue) -> bool {
        match value {
            CellValue::Number(n) => n.is_finite(),
            CellValue::Text(s) => parse_number(s).is_some(),
            _ => false,
        }
    }

    fn is_date(&self, value: &CellValue) -> bool {
        match value {
            CellValue::Date(_) => true,
            CellValue::Text(s) => looks_like_date(s, self.require_date_separator),
            _ => false,
        }
    }

    fn is_email(value: &CellValue) -> bool {
        matches!(value, CellValue::Text(s) if s.contains('@'))
    }
}

impl Default for TypeInferencer {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_SIZE, false)
    }
}

impl TypeInferencerTrait for TypeInferencer {
    fn infer_types(&self, rows: &[CanonicalRow], headers: &[String]) -> FieldTypes {
        headers
            .iter()
            .map(|header| {
                let samples: Vec<&CellValue> = rows
                    .iter()
                    .filter_map(|row| row.get(header))
                    .filter(|value| !value.is_empty())
                    .take(self.sample_size)
                    .collect();
                (header.clone(), self.infer_column(&samples))
            })
            .collect()
    }

    fn infer_column(&self, samples: &[&CellValue]) -> FieldType {
        if samples.is_empty() {
            return FieldType::Text;
        }

        // boolean / number must hold for every sample
        if samples.iter().all(|v| Self::is_boolean(v)) {
            return FieldType::Boolean;
        }
        if samples.iter().all(|v| Self::is_number(v)) {
            return FieldType::Number;
        }

        // date / email: one match is enough
        if samples.iter().any(|v| self.is_date(v)) {
            return FieldType::Date;
        }
        if samples.iter().any(|v| Self::is_email(v)) {
            return FieldType::Email;
        }

        FieldType::Text
    }
}
