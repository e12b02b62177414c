//! Type validity: every value in the date-typed columns must parse as a
//! date. Records the invalid-value count per offending column.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use tq_ingest::{any_to_string, is_missing_value};
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};
use crate::dates::parse_date;

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let mut invalid_by_column: BTreeMap<String, u64> = BTreeMap::new();

    for name in columns::DATE_COLUMNS {
        let Some(column) = columns::resolve(df, lookup, name) else {
            continue;
        };
        let mut invalid: u64 = 0;
        for idx in 0..df.height() {
            let value = cell(column, idx);
            if is_missing_value(&value) {
                continue;
            }
            if parse_date(&any_to_string(value)).is_none() {
                invalid += 1;
            }
        }
        if invalid > 0 {
            invalid_by_column.insert((*name).to_string(), invalid);
        }
    }

    if invalid_by_column.is_empty() {
        return CheckResult::pass();
    }
    let mut details = Details::new();
    details.insert(
        "invalid_by_column".to_string(),
        Detail::CountByColumn(invalid_by_column),
    );
    CheckResult::with_severity(Severity::Warning, details)
}
