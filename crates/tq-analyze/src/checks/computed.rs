//! Computed-value consistency: `Value` must equal `Quantity * Price`
//! within 1% relative error. The denominator carries a +1 smoothing term
//! so near-zero expectations cannot blow the ratio up.

use polars::prelude::DataFrame;

use tq_ingest::any_to_f64;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};

const RELATIVE_TOLERANCE: f64 = 0.01;

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let Some(values) = columns::resolve(df, lookup, columns::VALUE) else {
        return CheckResult::pass();
    };
    let Some(quantities) = columns::resolve(df, lookup, columns::QUANTITY) else {
        return CheckResult::pass();
    };
    let Some(prices) = columns::resolve(df, lookup, columns::PRICE) else {
        return CheckResult::pass();
    };

    let mut mismatches: u64 = 0;
    for idx in 0..df.height() {
        let (Some(value), Some(quantity), Some(price)) = (
            any_to_f64(cell(values, idx)),
            any_to_f64(cell(quantities, idx)),
            any_to_f64(cell(prices, idx)),
        ) else {
            continue;
        };
        if value.is_nan() || quantity.is_nan() || price.is_nan() {
            continue;
        }
        let expected = quantity * price;
        if (value - expected).abs() / (expected.abs() + 1.0) > RELATIVE_TOLERANCE {
            mismatches += 1;
        }
    }

    if mismatches == 0 {
        return CheckResult::pass();
    }
    let mut details = Details::new();
    details.insert("value_mismatch_rows".to_string(), Detail::Count(mismatches));
    CheckResult::with_severity(Severity::Warning, details)
}
