//! CLI library components for the trade quality analyzer.

pub mod logging;
