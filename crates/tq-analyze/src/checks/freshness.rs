//! Freshness: the newest trade date must be under a year old.
//!
//! Best-effort: any unparseable date value makes the whole check pass
//! silently, with no recorded issue. Date-order treats the same situation
//! as a reportable problem; keep the two policies divergent.

use chrono::Utc;
use polars::prelude::DataFrame;

use tq_ingest::{any_to_string, is_missing_value};
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};
use crate::dates::parse_date;

const MAX_AGE_DAYS: i64 = 365;

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let Some(column) = columns::resolve(df, lookup, columns::DATE) else {
        return CheckResult::pass();
    };

    let mut newest = None;
    for idx in 0..df.height() {
        let value = cell(column, idx);
        if is_missing_value(&value) {
            continue;
        }
        let Some(date) = parse_date(&any_to_string(value)) else {
            return CheckResult::pass();
        };
        newest = Some(match newest {
            Some(current) if current >= date => current,
            _ => date,
        });
    }
    let Some(newest) = newest else {
        return CheckResult::pass();
    };

    let age_days = (Utc::now().date_naive() - newest).num_days();
    if age_days <= MAX_AGE_DAYS {
        return CheckResult::pass();
    }
    let mut details = Details::new();
    details.insert("age_days".to_string(), Detail::Count(age_days as u64));
    CheckResult::with_severity(Severity::Info, details)
}
