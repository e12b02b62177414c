//! Range validity: domain bounds on `Quantity` (>= 0), `Price` (>= 0) and
//! `Commission` (within [0, 1]).

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use tq_ingest::any_to_f64;
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let mut violations: BTreeMap<String, u64> = BTreeMap::new();

    count_violations(df, lookup, columns::QUANTITY, &mut violations, |v| v < 0.0);
    count_violations(df, lookup, columns::PRICE, &mut violations, |v| v < 0.0);
    count_violations(df, lookup, columns::COMMISSION, &mut violations, |v| {
        !(0.0..=1.0).contains(&v)
    });

    if violations.is_empty() {
        return CheckResult::pass();
    }
    let mut details = Details::new();
    details.insert(
        "violations_by_column".to_string(),
        Detail::CountByColumn(violations),
    );
    CheckResult::with_severity(Severity::Critical, details)
}

fn count_violations(
    df: &DataFrame,
    lookup: &ColumnLookup,
    name: &str,
    violations: &mut BTreeMap<String, u64>,
    out_of_range: impl Fn(f64) -> bool,
) {
    let Some(column) = columns::resolve(df, lookup, name) else {
        return;
    };
    let mut count: u64 = 0;
    for idx in 0..df.height() {
        if let Some(value) = any_to_f64(cell(column, idx))
            && !value.is_nan()
            && out_of_range(value)
        {
            count += 1;
        }
    }
    if count > 0 {
        violations.insert(name.to_string(), count);
    }
}
