//! Outlier detection: IQR fences per numeric column.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use tq_ingest::any_to_f64;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::numeric_columns;
use crate::stats::iqr_fences;

pub fn check(df: &DataFrame) -> CheckResult {
    let row_count = df.height();
    let mut by_column: BTreeMap<String, u64> = BTreeMap::new();
    let mut total: u64 = 0;

    for column in numeric_columns(df) {
        let mut values: Vec<f64> = Vec::with_capacity(row_count);
        for idx in 0..row_count {
            if let Some(value) = any_to_f64(cell(column, idx))
                && !value.is_nan()
            {
                values.push(value);
            }
        }
        if values.is_empty() {
            continue;
        }
        values.sort_by(|a, b| a.total_cmp(b));
        let Some((lower, upper)) = iqr_fences(&values) else {
            continue;
        };
        let outliers = values.iter().filter(|v| **v < lower || **v > upper).count() as u64;
        if outliers > 0 {
            total += outliers;
            by_column.insert(column.name().to_string(), outliers);
        }
    }

    // More outliers than 5% of the rows is a warning, any at all is info.
    let severity = if total as f64 > row_count as f64 * 0.05 {
        Severity::Warning
    } else if total > 0 {
        Severity::Info
    } else {
        Severity::Ok
    };

    let mut details = Details::new();
    details.insert("total".to_string(), Detail::Count(total));
    details.insert("by_column".to_string(), Detail::CountByColumn(by_column));
    CheckResult::with_severity(severity, details)
}
