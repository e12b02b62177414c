//! Schema completeness: the required trade columns must all be present.

use polars::prelude::DataFrame;

use tq_model::{CheckResult, Detail, Details, Severity};

use crate::columns::{ColumnLookup, REQUIRED_COLUMNS};

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !lookup.contains(name))
        .map(|name| (*name).to_string())
        .collect();

    let severity = if missing.is_empty() {
        Severity::Ok
    } else {
        Severity::Critical
    };

    let mut details = Details::new();
    details.insert("missing_columns".to_string(), Detail::Columns(missing));
    details.insert(
        "total_columns".to_string(),
        Detail::Count(df.width() as u64),
    );
    CheckResult::with_severity(severity, details)
}
