//! Distribution skewness: flag numeric columns whose sample skewness
//! exceeds 3 in magnitude.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use tq_ingest::any_to_f64;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::numeric_columns;
use crate::stats::skewness;

const SKEW_THRESHOLD: f64 = 3.0;

pub fn check(df: &DataFrame) -> CheckResult {
    let mut skew_by_column: BTreeMap<String, f64> = BTreeMap::new();

    for column in numeric_columns(df) {
        let mut values: Vec<f64> = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            if let Some(value) = any_to_f64(cell(column, idx))
                && !value.is_nan()
            {
                values.push(value);
            }
        }
        if let Some(skew) = skewness(&values)
            && skew.abs() > SKEW_THRESHOLD
        {
            skew_by_column.insert(column.name().to_string(), skew);
        }
    }

    if skew_by_column.is_empty() {
        return CheckResult::pass();
    }
    let mut details = Details::new();
    details.insert(
        "skew_by_column".to_string(),
        Detail::NumberByColumn(skew_by_column),
    );
    CheckResult::with_severity(Severity::Info, details)
}
