//! Referential integrity: `Counterparty` and `Instrument` must be
//! populated in every row they appear in.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use tq_ingest::is_missing_value;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let mut missing_by_column: BTreeMap<String, u64> = BTreeMap::new();

    for name in [columns::COUNTERPARTY, columns::INSTRUMENT] {
        let Some(column) = columns::resolve(df, lookup, name) else {
            continue;
        };
        let mut missing: u64 = 0;
        for idx in 0..df.height() {
            if is_missing_value(&cell(column, idx)) {
                missing += 1;
            }
        }
        if missing > 0 {
            missing_by_column.insert(name.to_string(), missing);
        }
    }

    if missing_by_column.is_empty() {
        return CheckResult::pass();
    }
    let mut details = Details::new();
    details.insert(
        "missing_by_column".to_string(),
        Detail::CountByColumn(missing_by_column),
    );
    CheckResult::with_severity(Severity::Critical, details)
}
