//! CLI argument definitions for the trade quality analyzer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "tq",
    version,
    about = "Trade Quality - data-quality analysis for trade datasets",
    long_about = "Run a fixed battery of fifteen data-quality checks against a CSV of\n\
                  financial trade records, producing a 0-100 score, per-check results\n\
                  with severity levels, and an optional JSON report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a trade CSV and print the quality scorecard.
    Analyze(AnalyzeArgs),

    /// List the quality checks in execution order.
    Checks,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Path to the CSV file of trade records.
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Write a JSON quality report into this directory.
    #[arg(long = "report-dir", value_name = "DIR")]
    pub report_dir: Option<PathBuf>,

    /// Exit with status 1 when the score falls below this threshold.
    #[arg(long = "fail-under", value_name = "SCORE")]
    pub fail_under: Option<u8>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
