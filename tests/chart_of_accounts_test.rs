// ==========================================
// Fleetify Import Core - Chart of Accounts integration tests
// ==========================================
// Scope: mapping, level precedence, hierarchy validation, insertion order
// ==========================================

mod test_helpers;

use fleetify_import::domain::LevelSource;
use fleetify_import::{
    AccountType, BalanceType, CellValue, EntityKind, FieldType, HierarchyIssue, ImportConfig,
    ImportPipeline, ImportRequest,
};
use std::collections::HashMap;
use test_helpers::{default_pipeline, fixture_request, CHART_OF_ACCOUNTS};

fn codes(request: ImportRequest) -> Vec<String> {
    let outcome = default_pipeline().run(request).unwrap();
    outcome
        .accounts
        .unwrap()
        .ordered
        .into_iter()
        .map(|r| r.account_code)
        .collect()
}

#[test]
fn test_chart_import_orders_parents_first() {
    fleetify_import::logging::init_test();
    let outcome = default_pipeline()
        .run(fixture_request(EntityKind::ChartAccount, CHART_OF_ACCOUNTS))
        .unwrap();

    assert_eq!(
        outcome.headers,
        vec![
            "account_code",
            "account_name_ar",
            "account_name",
            "account_level",
            "parent_account_code"
        ]
    );

    let accounts = outcome.accounts.expect("chart import carries accounts");
    let ordered: Vec<&str> = accounts
        .ordered
        .iter()
        .map(|r| r.account_code.as_str())
        .collect();
    assert_eq!(ordered, vec!["1", "2", "11", "111", "1110101"]);

    // every in-batch parent precedes its child
    let positions: HashMap<&str, usize> =
        ordered.iter().enumerate().map(|(i, c)| (*c, i)).collect();
    for (i, record) in accounts.ordered.iter().enumerate() {
        if let Some(parent) = record.parent_account_code.as_deref() {
            if let Some(&parent_position) = positions.get(parent) {
                assert!(parent_position < i, "{} before parent {}", record.account_code, parent);
            }
        }
    }
    assert!(accounts.order_violations.is_empty());
}

#[test]
fn test_declared_level_survives() {
    let outcome = default_pipeline()
        .run(fixture_request(EntityKind::ChartAccount, CHART_OF_ACCOUNTS))
        .unwrap();
    let accounts = outcome.accounts.unwrap();

    let cash_box = accounts
        .ordered
        .iter()
        .find(|r| r.account_code == "1110101")
        .unwrap();
    assert_eq!(cash_box.account_level, 3);
    assert_eq!(cash_box.level_source, LevelSource::Declared);
    assert!(cash_box.is_header);
    assert_eq!(cash_box.parent_account_code.as_deref(), Some("111010"));
    assert_eq!(cash_box.account_name, "Main Cash Box");
    assert_eq!(cash_box.account_name_ar, "الصندوق الرئيسي");
    assert_eq!(cash_box.description, "الصندوق الرئيسي - Main Cash Box");

    let liabilities = accounts
        .ordered
        .iter()
        .find(|r| r.account_code == "2")
        .unwrap();
    assert_eq!(liabilities.account_level, 1);
    assert_eq!(liabilities.level_source, LevelSource::Computed);
    assert_eq!(liabilities.account_type, AccountType::Liabilities);
    assert_eq!(liabilities.balance_type, BalanceType::Credit);
    assert_eq!(liabilities.parent_account_code, None);
}

#[test]
fn test_single_missing_parent_issue() {
    let text = "account_code,account_name\n1,Assets\n1110101,Main Cash Box";

    let outcome = default_pipeline()
        .run(fixture_request(EntityKind::ChartAccount, text))
        .unwrap();
    let validation = outcome.accounts.unwrap().validation;

    assert!(!validation.is_valid);
    assert_eq!(validation.issues.len(), 1);
    assert_eq!(
        validation.issues[0],
        HierarchyIssue::MissingParent {
            account_code: "1110101".to_string(),
            expected_parent: "111010".to_string(),
        }
    );
    assert_eq!(validation.suggestions.len(), 1);
    assert_eq!(outcome.summary.hierarchy_issue_count, 1);
    // hierarchy issues are advisory, the row itself is clean
    assert_eq!(outcome.summary.clean_rows, 2);
}

#[test]
fn test_chart_rows_with_missing_fields() {
    let text = "account_code,account_name\n,Orphan name\n5,\n5,Expenses\n5,Expenses again";

    let outcome = default_pipeline()
        .run(fixture_request(EntityKind::ChartAccount, text))
        .unwrap();

    let accounts = outcome.accounts.unwrap();
    assert_eq!(accounts.ordered.len(), 1);
    assert_eq!(accounts.ordered[0].row_index, 2);
    assert_eq!(accounts.ordered[0].account_type, AccountType::Expenses);
    assert_eq!(accounts.ordered[0].balance_type, BalanceType::Debit);

    let error_rows: Vec<usize> = outcome.errors.iter().map(|e| e.row_index).collect();
    assert_eq!(error_rows, vec![0, 1, 3]);
    assert_eq!(outcome.summary.error_rows, 3);
    assert_eq!(outcome.summary.clean_rows, 1);
}

#[test]
fn test_leading_zero_codes_stay_text() {
    let request = ImportRequest::new(
        EntityKind::ChartAccount,
        vec!["رقم الحساب".to_string(), "اسم الحساب".to_string()],
        vec![
            vec![CellValue::text("01"), CellValue::text("حساب")],
            vec![CellValue::Number(11.0), CellValue::text("فرعي")],
        ],
    );

    let ordered = codes(request);

    assert_eq!(ordered, vec!["01", "11"]);
}

#[test]
fn test_declared_level_override_reports_order_violation() {
    let text = "account_code,account_name,account_level\n111,Cash,5\n1110,Petty cash,";

    let outcome = default_pipeline()
        .run(fixture_request(EntityKind::ChartAccount, text))
        .unwrap();
    let accounts = outcome.accounts.unwrap();

    assert_eq!(accounts.order_violations.len(), 1);
    assert_eq!(accounts.order_violations[0].account_code, "1110");
    assert!(outcome
        .warnings
        .iter()
        .any(|w| w.row_index == 1 && w.message.contains("ordered after")));
}

#[test]
fn test_declared_level_beyond_deepest_tier_warns() {
    let text = "account_code,account_name,account_level\n1,Assets,9";

    let outcome = default_pipeline()
        .run(fixture_request(EntityKind::ChartAccount, text))
        .unwrap();
    let record = &outcome.accounts.as_ref().unwrap().ordered[0];

    // the declared value is kept, only flagged
    assert_eq!(record.account_level, 9);
    assert_eq!(record.level_source, LevelSource::Declared);
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(outcome.warnings[0].column, "account_level");
    assert_eq!(outcome.warnings[0].value, "9");
    assert!(outcome.warnings[0].message.contains("exceeds the deepest level 6"));
}

#[test]
fn test_blank_header_cells_fall_back_to_level() {
    let text = "account_code,account_name,is_header\n1,Assets,\n11,Current,true\n111,Cash,\n1110,Petty cash,";

    let outcome = default_pipeline()
        .run(fixture_request(EntityKind::ChartAccount, text))
        .unwrap();

    assert_eq!(outcome.field_types.get("is_header"), Some(&FieldType::Boolean));
    let flags: Vec<(String, bool)> = outcome
        .accounts
        .unwrap()
        .ordered
        .into_iter()
        .map(|r| (r.account_code, r.is_header))
        .collect();
    assert_eq!(
        flags,
        vec![
            ("1".to_string(), true),
            ("11".to_string(), true),
            ("111".to_string(), true),
            ("1110".to_string(), false),
        ]
    );
}

#[test]
fn test_max_account_level_from_config() {
    let config = ImportConfig {
        max_account_level: 4,
        ..ImportConfig::default()
    };
    let pipeline = ImportPipeline::new(config).unwrap();
    let text = "account_code,account_name\n1110101,Main Cash Box";

    let outcome = pipeline
        .run(fixture_request(EntityKind::ChartAccount, text))
        .unwrap();

    assert_eq!(outcome.accounts.unwrap().ordered[0].account_level, 4);
}

#[test]
fn test_chart_import_is_deterministic() {
    let pipeline = default_pipeline();
    let first = pipeline
        .run(fixture_request(EntityKind::ChartAccount, CHART_OF_ACCOUNTS))
        .unwrap();
    let second = pipeline
        .run(fixture_request(EntityKind::ChartAccount, CHART_OF_ACCOUNTS))
        .unwrap();
    assert_eq!(first, second);
}
