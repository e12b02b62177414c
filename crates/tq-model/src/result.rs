//! Result model for a quality analysis run.
//!
//! Each check produces a [`CheckResult`] with two fixed fields (`passed`,
//! `severity`) and a free-form diagnostic payload. The payload keys differ
//! per check; consumers must treat them as opaque diagnostics. A completed
//! [`AnalysisRun`] holds the fifteen results in registry order; the summary
//! figures (`checks_passed`, `score`, `status`) are always recomputed from
//! the results, never cached alongside them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::check::CheckId;
use crate::severity::{QualityStatus, Severity};

/// One value in a check's diagnostic payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Detail {
    Flag(bool),
    Count(u64),
    Number(f64),
    Text(String),
    Columns(Vec<String>),
    CountByColumn(BTreeMap<String, u64>),
    NumberByColumn(BTreeMap<String, f64>),
}

/// Diagnostic payload: check-specific keys to detail values.
pub type Details = BTreeMap<String, Detail>;

/// Outcome of one quality check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    /// True iff the check found zero violations.
    pub passed: bool,
    /// Severity tier; `Ok` exactly when `passed` is true.
    pub severity: Severity,
    /// Free-form diagnostic payload.
    pub details: Details,
}

impl CheckResult {
    /// A trivially passing result with no diagnostics. Used when a check's
    /// relevant columns are absent from the dataset.
    pub fn pass() -> Self {
        Self {
            passed: true,
            severity: Severity::Ok,
            details: Details::new(),
        }
    }

    /// Build a result from a severity and payload; `passed` is derived
    /// (severity `Ok` means zero violations were found).
    pub fn with_severity(severity: Severity, details: Details) -> Self {
        Self {
            passed: severity == Severity::Ok,
            severity,
            details,
        }
    }
}

/// The completed result of running every check against one dataset.
///
/// Created fresh per dataset load, immutable once populated, never merged
/// or persisted. `results` preserves the registry execution order.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    results: Vec<(CheckId, CheckResult)>,
    row_count: usize,
    timestamp: DateTime<Utc>,
}

impl AnalysisRun {
    /// Assemble a run from results in registry order.
    pub fn new(results: Vec<(CheckId, CheckResult)>, row_count: usize) -> Self {
        Self {
            results,
            row_count,
            timestamp: Utc::now(),
        }
    }

    /// Results in execution order.
    pub fn results(&self) -> &[(CheckId, CheckResult)] {
        &self.results
    }

    /// Look up the result for a specific check.
    pub fn result(&self, check: CheckId) -> Option<&CheckResult> {
        self.results
            .iter()
            .find(|(id, _)| *id == check)
            .map(|(_, result)| result)
    }

    /// Row count of the analyzed dataset at analysis time.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Wall-clock time the run was created.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Number of results with `passed == true`. Recomputed on every call.
    pub fn checks_passed(&self) -> usize {
        self.results
            .iter()
            .filter(|(_, result)| result.passed)
            .count()
    }

    /// Aggregate quality score in `[0, 100]`.
    pub fn score(&self) -> u8 {
        score(self.results.iter().map(|(_, result)| result))
    }

    /// Presentation band for the current score.
    pub fn status(&self) -> QualityStatus {
        QualityStatus::from_score(self.score())
    }
}

/// Scoring algorithm: start at 100, subtract each result's severity penalty,
/// clamp at 0. Pure over the multiset of severities; order-independent.
pub fn score<'a>(results: impl Iterator<Item = &'a CheckResult>) -> u8 {
    let penalty: u32 = results.map(|result| result.severity.penalty()).sum();
    100u32.saturating_sub(penalty) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_at(severity: Severity) -> CheckResult {
        CheckResult::with_severity(severity, Details::new())
    }

    #[test]
    fn pass_is_ok_with_empty_details() {
        let result = CheckResult::pass();
        assert!(result.passed);
        assert_eq!(result.severity, Severity::Ok);
        assert!(result.details.is_empty());
    }

    #[test]
    fn passed_derived_from_severity() {
        assert!(result_at(Severity::Ok).passed);
        assert!(!result_at(Severity::Info).passed);
        assert!(!result_at(Severity::Warning).passed);
        assert!(!result_at(Severity::Critical).passed);
    }

    #[test]
    fn score_subtracts_penalties() {
        let results = vec![
            result_at(Severity::Critical),
            result_at(Severity::Warning),
            result_at(Severity::Info),
            result_at(Severity::Ok),
        ];
        assert_eq!(score(results.iter()), 100 - 15 - 5 - 1);
    }

    #[test]
    fn score_clamps_at_zero() {
        let results: Vec<CheckResult> = (0..15).map(|_| result_at(Severity::Critical)).collect();
        assert_eq!(score(results.iter()), 0);
    }

    #[test]
    fn run_summary_recomputes_from_results() {
        let run = AnalysisRun::new(
            vec![
                (CheckId::MissingValues, result_at(Severity::Ok)),
                (CheckId::Duplicates, result_at(Severity::Critical)),
            ],
            10,
        );
        assert_eq!(run.checks_passed(), 1);
        assert_eq!(run.score(), 85);
        assert_eq!(run.status(), QualityStatus::Good);
        assert_eq!(run.row_count(), 10);
        assert!(run.result(CheckId::Duplicates).is_some());
        assert!(run.result(CheckId::Freshness).is_none());
    }

    #[test]
    fn details_serialize_by_shape() {
        let mut details = Details::new();
        details.insert("parse_error".to_string(), Detail::Flag(true));
        details.insert("total".to_string(), Detail::Count(3));
        details.insert(
            "missing_columns".to_string(),
            Detail::Columns(vec!["Status".to_string()]),
        );
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["parse_error"], serde_json::json!(true));
        assert_eq!(json["total"], serde_json::json!(3));
        assert_eq!(json["missing_columns"], serde_json::json!(["Status"]));
    }
}
