//! Business-logic sanity: zero quantities and zero prices are suspicious
//! in executed trade records.

use polars::prelude::DataFrame;

use tq_ingest::any_to_f64;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let mut details = Details::new();

    if let Some(zeros) = count_zeros(df, lookup, columns::QUANTITY) {
        details.insert("quantity_zero".to_string(), Detail::Count(zeros));
    }
    if let Some(zeros) = count_zeros(df, lookup, columns::PRICE) {
        details.insert("price_zero".to_string(), Detail::Count(zeros));
    }

    if details.is_empty() {
        return CheckResult::pass();
    }
    CheckResult::with_severity(Severity::Warning, details)
}

fn count_zeros(df: &DataFrame, lookup: &ColumnLookup, name: &str) -> Option<u64> {
    let column = columns::resolve(df, lookup, name)?;
    let mut zeros: u64 = 0;
    for idx in 0..df.height() {
        if let Some(value) = any_to_f64(cell(column, idx))
            && value == 0.0
        {
            zeros += 1;
        }
    }
    (zeros > 0).then_some(zeros)
}
