//! Shared test utilities for integration tests

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::json;

use termplan::{
    Analysis, AnalyzeError, DataStoreAdapter, Dictionary, ExecuteError, QueryInput, QueryPlan,
    Row, TableInfo,
};

/// Load a dictionary fixture from the test_data directory
pub fn load_fixture(name: &str) -> Dictionary {
    let path = format!("test_data/{}", name);
    termplan::parser::parse_file(&path)
        .unwrap_or_else(|e| panic!("Failed to load test data {}: {}", name, e))
}

/// The instant every test anchors temporal phrases to (a Friday)
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
}

pub fn fixed_today() -> NaiveDate {
    fixed_now().date_naive()
}

/// Build a request with the standard test user and clock
pub fn request(text: &str) -> QueryInput {
    QueryInput::new(text).with_user("Ahmed").with_now(fixed_now())
}

/// In-memory adapter: one known user, canned rows, optional hard failure
pub struct MockStore {
    pub rows: Vec<Row>,
    pub fail: bool,
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            rows: sample_rows(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
        }
    }
}

impl DataStoreAdapter for MockStore {
    fn execute(&self, plan: &QueryPlan) -> Result<Vec<Row>, ExecuteError> {
        if self.fail {
            return Err(ExecuteError::Backend("connection refused".to_string()));
        }
        if plan.primary_table.is_empty() {
            return Err(ExecuteError::UnknownTable(String::new()));
        }
        Ok(self.rows.clone())
    }

    fn find_user_by_name(&self, name: &str) -> Option<String> {
        (name == "Ahmed").then(|| "user-7".to_string())
    }

    fn describe_table(&self, name: &str) -> Option<TableInfo> {
        (name == "stock").then(|| TableInfo {
            searchable_fields: vec!["warehouse".to_string()],
            numeric_fields: vec!["quantity".to_string()],
            foreign_keys: vec!["product_id".to_string()],
        })
    }
}

fn sample_rows() -> Vec<Row> {
    let row = json!({"id": 1, "name": "laptop pro 15", "quantity": 3});
    match row {
        serde_json::Value::Object(map) => vec![map],
        _ => unreachable!(),
    }
}

/// Run the analysis pipeline against the default fixture and mock store
pub fn analyze_text(text: &str) -> Result<Analysis, AnalyzeError> {
    let dict = load_fixture("business.yaml");
    termplan::analyze(&request(text), &dict, &MockStore::new())
}

/// Assert the span invariants hold for an analysis over `text`
pub fn assert_spans_valid(text: &str, analysis: &Analysis) {
    for entity in &analysis.entities {
        assert!(entity.start < entity.end && entity.end <= text.len());
        assert_eq!(&text[entity.start..entity.end], entity.text);
    }
    for pair in analysis.entities.windows(2) {
        assert!(
            pair[0].end <= pair[1].start,
            "overlapping entities: {:?} / {:?}",
            pair[0],
            pair[1]
        );
    }
}
