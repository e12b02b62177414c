//! Severity tiers and score banding.
//!
//! Severity drives both display and the score penalty: a check result at
//! `Ok` contributes nothing, while `Critical` costs 15 points. The tiers
//! and penalties are fixed; they are not configurable at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative impact tier of a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Ok,
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Score penalty subtracted for a result at this severity.
    pub fn penalty(self) -> u32 {
        match self {
            Severity::Ok => 0,
            Severity::Info => 1,
            Severity::Warning => 5,
            Severity::Critical => 15,
        }
    }

    /// Canonical uppercase label, as it appears in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Ok => "OK",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Presentation band for an overall quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityStatus {
    Excellent,
    Good,
    Poor,
}

impl QualityStatus {
    /// Band a score: >= 90 Excellent, >= 70 Good, else Poor.
    pub fn from_score(score: u8) -> Self {
        if score >= 90 {
            QualityStatus::Excellent
        } else if score >= 70 {
            QualityStatus::Good
        } else {
            QualityStatus::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityStatus::Excellent => "Excellent",
            QualityStatus::Good => "Good",
            QualityStatus::Poor => "Poor",
        }
    }
}

impl fmt::Display for QualityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
