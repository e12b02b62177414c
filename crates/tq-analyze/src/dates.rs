//! Date and time parsing for the format-sensitive checks.
//!
//! The analyzer accepts a fixed list of common date layouts rather than a
//! fully heuristic parser. Parse failures never escape a check: callers
//! turn them into diagnostic issues (type-validity, date-order) or pass
//! silently (freshness).

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Parse a trade date. Accepts plain dates and datetimes; datetimes are
/// truncated to their date component.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    None
}

/// Parse an `HH:MM:SS` entry time. Strict: no trimming, no other layouts.
pub fn parse_entry_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_date_layouts() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(expected));
        assert_eq!(parse_date("2024/01/15"), Some(expected));
        assert_eq!(parse_date("15/01/2024"), Some(expected));
        assert_eq!(parse_date("2024-01-15T09:30:00"), Some(expected));
        assert_eq!(parse_date(" 2024-01-15 "), Some(expected));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("2024-13-40"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn entry_time_is_strict_hms() {
        assert!(parse_entry_time("09:30:00").is_some());
        assert!(parse_entry_time("23:59:59").is_some());
        assert!(parse_entry_time("9:30").is_none());
        assert!(parse_entry_time(" 09:30:00").is_none());
        assert!(parse_entry_time("25:00:00").is_none());
    }
}
