//! Command implementations.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info};

use tq_analyze::run_all;
use tq_ingest::read_trades_csv;
use tq_model::{AnalysisRun, CheckId};
use tq_report::write_quality_report_json;

use crate::cli::AnalyzeArgs;
use crate::summary::apply_table_style;

/// Everything the scorecard needs; elapsed time is measured here, around
/// the analysis call, not inside the analyzer.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub source: String,
    pub column_count: usize,
    pub run: AnalysisRun,
    pub elapsed_seconds: f64,
    pub report_path: Option<PathBuf>,
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let source = args.input.display().to_string();
    let df = read_trades_csv(&args.input).with_context(|| format!("load dataset: {source}"))?;
    info!(
        rows = df.height(),
        columns = df.width(),
        "loaded dataset {source}"
    );

    let started = Instant::now();
    let run = run_all(&df);
    let elapsed_seconds = started.elapsed().as_secs_f64();
    debug!(
        score = run.score(),
        checks_passed = run.checks_passed(),
        "analysis finished in {elapsed_seconds:.3}s"
    );

    let report_path = match &args.report_dir {
        Some(dir) => {
            let path = write_quality_report_json(dir, &source, &run, Some(elapsed_seconds))
                .context("write quality report")?;
            info!("quality report written to {}", path.display());
            Some(path)
        }
        None => None,
    };

    Ok(AnalyzeResult {
        source,
        column_count: df.width(),
        run,
        elapsed_seconds,
        report_path,
    })
}

pub fn run_checks() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "Name", "Check"]);
    apply_table_style(&mut table);
    for (idx, check) in CheckId::ALL.into_iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            check.name().to_string(),
            check.label().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
