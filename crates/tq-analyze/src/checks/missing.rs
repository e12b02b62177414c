//! Missing values: per-column missing percentages plus the grand total of
//! null cells across the frame.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use tq_ingest::is_missing_value;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;

pub fn check(df: &DataFrame) -> CheckResult {
    let row_count = df.height();
    let mut by_column: BTreeMap<String, f64> = BTreeMap::new();
    let mut total: u64 = 0;

    for column in df.get_columns() {
        let mut nulls: u64 = 0;
        for idx in 0..row_count {
            if is_missing_value(&cell(column, idx)) {
                nulls += 1;
            }
        }
        total += nulls;
        let pct = if row_count == 0 {
            0.0
        } else {
            nulls as f64 / row_count as f64 * 100.0
        };
        by_column.insert(column.name().to_string(), pct);
    }

    // Critical when the null cells outnumber 10% of the rows.
    let severity = if total as f64 > row_count as f64 * 0.1 {
        Severity::Critical
    } else if total > 0 {
        Severity::Warning
    } else {
        Severity::Ok
    };

    let mut details = Details::new();
    details.insert("total_missing".to_string(), Detail::Count(total));
    details.insert(
        "missing_pct_by_column".to_string(),
        Detail::NumberByColumn(by_column),
    );
    CheckResult::with_severity(severity, details)
}
