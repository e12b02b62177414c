//! Polars AnyValue utility functions.
//!
//! Helpers for reading typed cells out of a `DataFrame` without caring
//! which concrete numeric or string variant a column carries.

use polars::prelude::AnyValue;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null. String values keep their whitespace;
/// the hygiene check depends on seeing it.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "true" } else { "false" }.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(&s),
        _ => None,
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// True for cells the analyzer treats as missing: null, or a float NaN.
pub fn is_missing_value(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::Float32(v) => v.is_nan(),
        AnyValue::Float64(v) => v.is_nan(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_conversion_preserves_whitespace() {
        assert_eq!(any_to_string(AnyValue::String(" AAPL ")), " AAPL ");
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn numeric_formatting_drops_trailing_zeros() {
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn f64_conversion_handles_strings_and_nulls() {
        assert_eq!(any_to_f64(AnyValue::Int64(3)), Some(3.0));
        assert_eq!(any_to_f64(AnyValue::String(" 2.5 ")), Some(2.5));
        assert_eq!(any_to_f64(AnyValue::String("abc")), None);
        assert_eq!(any_to_f64(AnyValue::Null), None);
    }

    #[test]
    fn missing_detection() {
        assert!(is_missing_value(&AnyValue::Null));
        assert!(is_missing_value(&AnyValue::Float64(f64::NAN)));
        assert!(!is_missing_value(&AnyValue::Float64(0.0)));
        assert!(!is_missing_value(&AnyValue::String("")));
    }
}
