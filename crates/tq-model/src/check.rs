//! The fixed registry of quality checks.
//!
//! `CheckId::ALL` defines both the execution order and the insertion order
//! of results in an [`crate::AnalysisRun`]. Adding or removing a check means
//! updating `ALL`, the analyzer dispatch, and [`CHECKS_TOTAL`] together;
//! a unit test pins the constant to the registry length so the three cannot
//! drift apart silently.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of defined checks. Kept as a named constant rather than derived
/// at runtime; `registry_matches_total` guards it against the registry.
pub const CHECKS_TOTAL: usize = 15;

/// Identifier of one quality check, stable across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckId {
    MissingValues,
    Duplicates,
    TypeValidity,
    Outliers,
    Ranges,
    DateOrder,
    Categorical,
    Referential,
    ComputedValues,
    StringHygiene,
    BusinessLogic,
    Schema,
    TimestampFormat,
    Distribution,
    Freshness,
}

impl CheckId {
    /// Every check, in execution order.
    pub const ALL: [CheckId; CHECKS_TOTAL] = [
        CheckId::MissingValues,
        CheckId::Duplicates,
        CheckId::TypeValidity,
        CheckId::Outliers,
        CheckId::Ranges,
        CheckId::DateOrder,
        CheckId::Categorical,
        CheckId::Referential,
        CheckId::ComputedValues,
        CheckId::StringHygiene,
        CheckId::BusinessLogic,
        CheckId::Schema,
        CheckId::TimestampFormat,
        CheckId::Distribution,
        CheckId::Freshness,
    ];

    /// Stable snake_case name used as the result key.
    pub fn name(self) -> &'static str {
        match self {
            CheckId::MissingValues => "missing_values",
            CheckId::Duplicates => "duplicates",
            CheckId::TypeValidity => "type_validity",
            CheckId::Outliers => "outliers",
            CheckId::Ranges => "ranges",
            CheckId::DateOrder => "date_order",
            CheckId::Categorical => "categorical",
            CheckId::Referential => "referential",
            CheckId::ComputedValues => "computed_values",
            CheckId::StringHygiene => "string_hygiene",
            CheckId::BusinessLogic => "business_logic",
            CheckId::Schema => "schema",
            CheckId::TimestampFormat => "timestamp_format",
            CheckId::Distribution => "distribution",
            CheckId::Freshness => "freshness",
        }
    }

    /// Human-readable label for tables and reports.
    pub fn label(self) -> &'static str {
        match self {
            CheckId::MissingValues => "Missing Values",
            CheckId::Duplicates => "Duplicates",
            CheckId::TypeValidity => "Type Validity",
            CheckId::Outliers => "Outlier Detection",
            CheckId::Ranges => "Range Validity",
            CheckId::DateOrder => "Date Ordering",
            CheckId::Categorical => "Categorical Validity",
            CheckId::Referential => "Referential Integrity",
            CheckId::ComputedValues => "Computed Values",
            CheckId::StringHygiene => "String Hygiene",
            CheckId::BusinessLogic => "Business Logic",
            CheckId::Schema => "Schema Completeness",
            CheckId::TimestampFormat => "Timestamp Format",
            CheckId::Distribution => "Distribution Skewness",
            CheckId::Freshness => "Freshness",
        }
    }
}

impl fmt::Display for CheckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
