// ==========================================
// Fleetify Import Core - Cell Value Parsers
// ==========================================
// Role: boolean literal / number / date recognition shared by
//       TypeInferencer (classification) and DataCleaner (coercion)
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const TRUE_LITERALS: &[&str] = &["true", "1", "yes", "y", "نعم", "صحيح", "صح"];
const FALSE_LITERALS: &[&str] = &["false", "0", "no", "n", "لا", "خطأ", "خطا"];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y", "%d.%m.%Y", "%m/%d/%Y", "%Y%m%d",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Recognize a boolean literal (case-insensitive, English or Arabic).
pub fn parse_bool_literal(value: &str) -> Option<bool> {
    let token = value.trim().to_lowercase();
    if TRUE_LITERALS.contains(&token.as_str()) {
        Some(true)
    } else if FALSE_LITERALS.contains(&token.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Map Arabic-Indic / Persian digits and the Arabic decimal separator to ASCII.
pub fn normalize_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            '\u{06F0}'..='\u{06F9}' => char::from(b'0' + (c as u32 - 0x06F0) as u8),
            '\u{066B}' => '.',
            other => other,
        })
        .collect()
}

/// Parse a finite number. NaN and infinities are rejected.
pub fn parse_number(value: &str) -> Option<f64> {
    let normalized = normalize_digits(value.trim());
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Permissive date parser: common day-first / ISO / compact layouts and ISO date-times.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let normalized = normalize_digits(value.trim());
    if normalized.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&normalized, format) {
            return Some(date);
        }
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, format) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(&normalized)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Date detection used by type inference.
///
/// With `require_separator`, all-digit samples (e.g. 8-digit identifiers that
/// happen to fit YYYYMMDD) never count as dates.
pub fn looks_like_date(value: &str, require_separator: bool) -> bool {
    let normalized = normalize_digits(value.trim());
    if require_separator && normalized.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    parse_date(&normalized).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_literal() {
        assert_eq!(parse_bool_literal("TRUE"), Some(true));
        assert_eq!(parse_bool_literal(" yes "), Some(true));
        assert_eq!(parse_bool_literal("نعم"), Some(true));
        assert_eq!(parse_bool_literal("0"), Some(false));
        assert_eq!(parse_bool_literal("لا"), Some(false));
        assert_eq!(parse_bool_literal("maybe"), None);
        assert_eq!(parse_bool_literal(""), None);
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("10"), Some(10.0));
        assert_eq!(parse_number(" 20.5 "), Some(20.5));
        assert_eq!(parse_number("-7"), Some(-7.0));
        assert_eq!(parse_number("١٢٣"), Some(123.0));
        assert_eq!(parse_number("٣٫٥"), Some(3.5));
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("12abc"), None);
        assert_eq!(parse_number(""), None);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date("15/01/2024"), Some(expected));
        assert_eq!(parse_date("15-01-2024"), Some(expected));
        assert_eq!(parse_date("2024-01-15 08:30:00"), Some(expected));
        assert_eq!(parse_date("2024-01-15T08:30:00+03:00"), Some(expected));
        assert_eq!(parse_date("20240115"), Some(expected));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_looks_like_date_separator_rule() {
        assert!(looks_like_date("20240115", false));
        assert!(!looks_like_date("20240115", true));
        assert!(looks_like_date("2024-01-15", true));
    }
}
