//! The Quality Analyzer.
//!
//! Runs the fixed battery of fifteen data-quality checks against one
//! in-memory dataset snapshot and produces an [`AnalysisRun`]. Checks are
//! independent, read-only, and fault-isolated: one bad column never aborts
//! the other fourteen. `run_all` is total over any syntactically valid
//! frame, including zero rows, zero columns, and all-null columns.

pub mod checks;
pub mod columns;
pub mod dates;
pub mod stats;

use polars::prelude::DataFrame;

use tq_model::{AnalysisRun, CheckId};

use crate::checks::run_check;
use crate::columns::ColumnLookup;

/// Execute every check in registry order against the dataset.
pub fn run_all(df: &DataFrame) -> AnalysisRun {
    let lookup = ColumnLookup::new(df);
    let results = CheckId::ALL
        .into_iter()
        .map(|check| (check, run_check(check, df, &lookup)))
        .collect();
    AnalysisRun::new(results, df.height())
}
