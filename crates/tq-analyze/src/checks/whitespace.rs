//! String hygiene: leading or trailing spaces in text columns. A value
//! with both counts twice, once per side.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use tq_ingest::any_to_string;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::text_columns;

pub fn check(df: &DataFrame) -> CheckResult {
    let mut by_column: BTreeMap<String, u64> = BTreeMap::new();

    for column in text_columns(df) {
        let mut count: u64 = 0;
        for idx in 0..df.height() {
            let value = any_to_string(cell(column, idx));
            if value.starts_with(' ') {
                count += 1;
            }
            if value.ends_with(' ') {
                count += 1;
            }
        }
        if count > 0 {
            by_column.insert(column.name().to_string(), count);
        }
    }

    if by_column.is_empty() {
        return CheckResult::pass();
    }
    let mut details = Details::new();
    details.insert(
        "whitespace_by_column".to_string(),
        Detail::CountByColumn(by_column),
    );
    CheckResult::with_severity(Severity::Info, details)
}
