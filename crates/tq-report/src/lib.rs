//! JSON quality-report output.
//!
//! Serializes a completed [`AnalysisRun`] into a versioned, machine-readable
//! payload: the scorecard summary plus one block per check with pass/fail,
//! severity, and the check's diagnostic payload.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use tq_model::{AnalysisRun, CHECKS_TOTAL, Details, Severity};

const REPORT_SCHEMA: &str = "trade-quality.analysis-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct QualityReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub source: String,
    pub summary: RunSummaryJson,
    pub checks: Vec<CheckResultJson>,
}

#[derive(Debug, Serialize)]
pub struct RunSummaryJson {
    pub score: u8,
    pub status: String,
    pub row_count: usize,
    pub checks_passed: usize,
    pub checks_total: usize,
    pub analyzed_at: String,
    /// Seconds the caller measured around the analysis, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_seconds: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CheckResultJson {
    pub name: String,
    pub label: String,
    pub passed: bool,
    pub severity: Severity,
    pub details: Details,
}

/// Build the report payload from a run.
pub fn build_payload(
    source: &str,
    run: &AnalysisRun,
    elapsed_seconds: Option<f64>,
) -> QualityReportPayload {
    QualityReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        source: source.to_string(),
        summary: RunSummaryJson {
            score: run.score(),
            status: run.status().as_str().to_string(),
            row_count: run.row_count(),
            checks_passed: run.checks_passed(),
            checks_total: CHECKS_TOTAL,
            analyzed_at: run.timestamp().to_rfc3339(),
            elapsed_seconds,
        },
        checks: run
            .results()
            .iter()
            .map(|(check, result)| CheckResultJson {
                name: check.name().to_string(),
                label: check.label().to_string(),
                passed: result.passed,
                severity: result.severity,
                details: result.details.clone(),
            })
            .collect(),
    }
}

/// Write the JSON report into `output_dir/quality_report.json`.
pub fn write_quality_report_json(
    output_dir: &Path,
    source: &str,
    run: &AnalysisRun,
    elapsed_seconds: Option<f64>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create report dir: {}", output_dir.display()))?;
    let output_path = output_dir.join("quality_report.json");
    let payload = build_payload(source, run, elapsed_seconds);
    let json = serde_json::to_string_pretty(&payload).context("serialize quality report")?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write report: {}", output_path.display()))?;
    Ok(output_path)
}
