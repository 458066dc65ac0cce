// ==========================================
// Test helpers
// ==========================================
// Role: turn CSV fixture text into the header/row matrix the external
//       reader would hand to the pipeline
// ==========================================

#![allow(dead_code)]

use fleetify_import::{CellValue, EntityKind, ImportConfig, ImportPipeline, ImportRequest};

/// Split CSV text into (headers, rows). Empty cells become `CellValue::Empty`.
///
/// Rows may be ragged; no cell is trimmed so whitespace handling stays
/// under test.
pub fn parse_fixture(text: &str) -> (Vec<String>, Vec<Vec<CellValue>>) {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.trim().as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .expect("fixture has no header row")
        .iter()
        .map(String::from)
        .collect();

    let rows = reader
        .records()
        .map(|record| {
            record
                .expect("malformed fixture row")
                .iter()
                .map(CellValue::from)
                .collect()
        })
        .collect();

    (headers, rows)
}

/// Build a request from fixture text with a fixed batch id.
pub fn fixture_request(entity_kind: EntityKind, text: &str) -> ImportRequest {
    let (headers, rows) = parse_fixture(text);
    ImportRequest::new(entity_kind, headers, rows).with_batch_id("test-batch")
}

pub fn default_pipeline() -> ImportPipeline {
    ImportPipeline::new(ImportConfig::default()).expect("default config is valid")
}

// ==========================================
// Fixtures
// ==========================================

pub const CUSTOMERS_AR: &str = "
الاسم,الهاتف,البريد الإلكتروني,نشط,تاريخ الميلاد
أحمد علي,55501234,ahmed@example.com,نعم,1990-05-12
سارة محمد,55505678,,لا,12/08/1988
";

pub const CONTRACTS_AR: &str = "
رقم العقد,المبلغ,تاريخ البداية,الهاتف
C-001,1500,2024-01-15,55501234
C-002,abc,15/02/2024,55505678
";

pub const CHART_OF_ACCOUNTS: &str = "
رقم الحساب,اسم الحساب,الاسم بالإنجليزي,المستوى,الحساب الأب
1110101,الصندوق الرئيسي,Main Cash Box,3,
11,الأصول المتداولة,Current Assets,,
2,الخصوم,Liabilities,,
111,النقدية,Cash,,
1,الأصول,Assets,,
";
