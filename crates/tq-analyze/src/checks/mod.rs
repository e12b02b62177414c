//! The fifteen quality checks.
//!
//! Each module implements one check as a total function over the dataset
//! snapshot: `(df, lookup) -> CheckResult`. Checks never mutate the frame,
//! never depend on each other's output, and convert every internal failure
//! (unparseable cell, absent column) into result data instead of an error.

pub mod business;
pub mod categorical;
pub mod computed;
pub mod date_order;
pub mod datatype;
pub mod distribution;
pub mod duplicates;
pub mod freshness;
pub mod missing;
pub mod outliers;
pub mod ranges;
pub mod referential;
pub mod schema;
pub mod timestamp;
pub mod whitespace;

use polars::prelude::{AnyValue, Column, DataFrame};

use tq_model::{CheckId, CheckResult};

use crate::columns::ColumnLookup;

/// Dispatch one check by id. Exhaustive over the registry, so a new
/// `CheckId` variant fails to compile until it gets an implementation here.
pub fn run_check(check: CheckId, df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    match check {
        CheckId::MissingValues => missing::check(df),
        CheckId::Duplicates => duplicates::check(df, lookup),
        CheckId::TypeValidity => datatype::check(df, lookup),
        CheckId::Outliers => outliers::check(df),
        CheckId::Ranges => ranges::check(df, lookup),
        CheckId::DateOrder => date_order::check(df, lookup),
        CheckId::Categorical => categorical::check(df, lookup),
        CheckId::Referential => referential::check(df, lookup),
        CheckId::ComputedValues => computed::check(df, lookup),
        CheckId::StringHygiene => whitespace::check(df),
        CheckId::BusinessLogic => business::check(df, lookup),
        CheckId::Schema => schema::check(df, lookup),
        CheckId::TimestampFormat => timestamp::check(df, lookup),
        CheckId::Distribution => distribution::check(df),
        CheckId::Freshness => freshness::check(df, lookup),
    }
}

/// Cell access that treats any polars-level miss as a null.
pub(crate) fn cell<'a>(column: &'a Column, idx: usize) -> AnyValue<'a> {
    column.get(idx).unwrap_or(AnyValue::Null)
}
