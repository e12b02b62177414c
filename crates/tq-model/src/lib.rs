pub mod check;
pub mod result;
pub mod severity;

pub use check::{CHECKS_TOTAL, CheckId};
pub use result::{AnalysisRun, CheckResult, Detail, Details, score};
pub use severity::{QualityStatus, Severity};
