//! Duplicates: repeated `TradeID` values when that key column exists,
//! otherwise fully duplicated rows. Counts occurrences after the first.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;

use tq_ingest::any_to_string;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let row_count = df.height();
    let dupes = match columns::resolve(df, lookup, columns::TRADE_ID) {
        Some(key) => {
            let mut seen = BTreeSet::new();
            let mut dupes: u64 = 0;
            for idx in 0..row_count {
                if !seen.insert(any_to_string(cell(key, idx))) {
                    dupes += 1;
                }
            }
            dupes
        }
        None => duplicated_rows(df),
    };

    let severity = if dupes > 0 {
        Severity::Critical
    } else {
        Severity::Ok
    };
    let percentage = if row_count == 0 {
        0.0
    } else {
        dupes as f64 / row_count as f64 * 100.0
    };

    let mut details = Details::new();
    details.insert("count".to_string(), Detail::Count(dupes));
    details.insert("percentage".to_string(), Detail::Number(percentage));
    CheckResult::with_severity(severity, details)
}

fn duplicated_rows(df: &DataFrame) -> u64 {
    let mut seen = BTreeSet::new();
    let mut dupes: u64 = 0;
    for idx in 0..df.height() {
        let key: Vec<String> = df
            .get_columns()
            .iter()
            .map(|column| any_to_string(cell(column, idx)))
            .collect();
        if !seen.insert(key) {
            dupes += 1;
        }
    }
    dupes
}
