//! Categorical validity: `Status` and `TradeType` must stay inside their
//! enumerated vocabularies. Comparison is exact; a missing cell is outside
//! the vocabulary and counts as invalid.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use tq_ingest::any_to_string;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let mut invalid_by_column: BTreeMap<String, u64> = BTreeMap::new();

    count_invalid(
        df,
        lookup,
        columns::STATUS,
        columns::VALID_STATUS,
        &mut invalid_by_column,
    );
    count_invalid(
        df,
        lookup,
        columns::TRADE_TYPE,
        columns::VALID_TRADE_TYPE,
        &mut invalid_by_column,
    );

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

fn count_invalid(
    df: &DataFrame,
    lookup: &ColumnLookup,
    name: &str,
    valid: &[&str],
    invalid_by_column: &mut BTreeMap<String, u64>,
) {
    let Some(column) = columns::resolve(df, lookup, name) else {
        return;
    };
    let mut invalid: u64 = 0;
    for idx in 0..df.height() {
        let value = any_to_string(cell(column, idx));
        if !valid.contains(&value.as_str()) {
            invalid += 1;
        }
    }
    if invalid > 0 {
        invalid_by_column.insert(name.to_string(), invalid);
    }
}
