//! Date ordering: settlement may not precede the trade date.
//!
//! Unparseable values in either column degrade the whole check to a
//! `parse_error` issue instead of a row count. Contrast with the freshness
//! check, which passes silently on unparseable dates; the asymmetry is
//! deliberate policy, not an accident.

use polars::prelude::DataFrame;

use tq_ingest::{any_to_string, is_missing_value};
use tq_model::{CheckResult, Detail, Details, Severity};

use super::cell;
use crate::columns::{self, ColumnLookup};
use crate::dates::parse_date;

pub fn check(df: &DataFrame, lookup: &ColumnLookup) -> CheckResult {
    let Some(trade_dates) = columns::resolve(df, lookup, columns::DATE) else {
        return CheckResult::pass();
    };
    let Some(settlements) = columns::resolve(df, lookup, columns::SETTLEMENT_DATE) else {
        return CheckResult::pass();
    };

    let mut parse_error = false;
    let mut violations: u64 = 0;
    for idx in 0..df.height() {
        let trade_value = cell(trade_dates, idx);
        let settlement_value = cell(settlements, idx);

        let trade = if is_missing_value(&trade_value) {
            None
        } else {
            let parsed = parse_date(&any_to_string(trade_value));
            if parsed.is_none() {
                parse_error = true;
                break;
            }
            parsed
        };
        let settlement = if is_missing_value(&settlement_value) {
            None
        } else {
            let parsed = parse_date(&any_to_string(settlement_value));
            if parsed.is_none() {
                parse_error = true;
                break;
            }
            parsed
        };

        if let (Some(trade), Some(settlement)) = (trade, settlement)
            && settlement < trade
        {
            violations += 1;
        }
    }

    let mut details = Details::new();
    if parse_error {
        details.insert("parse_error".to_string(), Detail::Flag(true));
        return CheckResult::with_severity(Severity::Critical, details);
    }
    if violations > 0 {
        details.insert(
            "settlement_before_trade".to_string(),
            Detail::Count(violations),
        );
        return CheckResult::with_severity(Severity::Critical, details);
    }
    CheckResult::pass()
}
