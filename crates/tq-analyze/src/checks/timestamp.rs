//! Timestamp format: `EntryTime` values must match `HH:MM:SS`. Reports a
//! single flag, not a per-row count.

use polars::prelude::DataFrame;

use tq_ingest::{any_to_string, is_missing_value};
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};
use crate::dates::parse_entry_time;

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let Some(column) = columns::resolve(df, lookup, columns::ENTRY_TIME) else {
        return CheckResult::pass();
    };

    for idx in 0..df.height() {
        let value = cell(column, idx);
        if is_missing_value(&value) {
            continue;
        }
        if parse_entry_time(&any_to_string(value)).is_none() {
            let mut details = Details::new();
            details.insert("invalid_time_format".to_string(), Detail::Flag(true));
            return CheckResult::with_severity(Severity::Warning, details);
        }
    }
    CheckResult::pass()
}
