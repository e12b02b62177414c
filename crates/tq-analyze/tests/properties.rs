//! Invariants that must hold for arbitrary datasets.

use polars::prelude::{DataFrame, NamedFrom, Series};
use proptest::prelude::*;

use tq_analyze::run_all;
use tq_model::CHECKS_TOTAL;

fn arbitrary_frame() -> impl Strategy<Value = DataFrame> {
    let quantity = proptest::collection::vec(proptest::option::of(-1000.0..1000.0f64), 0..40);
    let status = proptest::collection::vec(
        proptest::option::of(prop_oneof![
            Just("EXECUTED".to_string()),
            Just("PENDING".to_string()),
            Just("bogus".to_string()),
            Just(" SETTLED".to_string()),
        ]),
        0..40,
    );
    (quantity, status).prop_map(|(quantity, status)| {
        let rows = quantity.len().min(status.len());
        DataFrame::new(vec![
            Series::new("Quantity".into(), &quantity[..rows]).into(),
            Series::new("Status".into(), &status[..rows]).into(),
        ])
        .unwrap()
    })
}

proptest! {
    #[test]
    fn run_always_has_fifteen_results(df in arbitrary_frame()) {
        let run = run_all(&df);
        prop_assert_eq!(run.results().len(), CHECKS_TOTAL);
        prop_assert_eq!(run.row_count(), df.height());
    }

    #[test]
    fn score_is_penalty_sum_clamped(df in arbitrary_frame()) {
        let run = run_all(&df);
        let penalty: u32 = run
            .results()
            .iter()
            .map(|(_, result)| result.severity.penalty())
            .sum();
        prop_assert_eq!(u32::from(run.score()), 100u32.saturating_sub(penalty));
        prop_assert!(run.score() <= 100);
    }

    #[test]
    fn checks_passed_counts_passing_results(df in arbitrary_frame()) {
        let run = run_all(&df);
        let passing = run.results().iter().filter(|(_, r)| r.passed).count();
        prop_assert_eq!(run.checks_passed(), passing);
        for (_, result) in run.results() {
            // Severity is OK exactly when the check passed.
            prop_assert_eq!(result.passed, result.severity == tq_model::Severity::Ok);
        }
    }

    #[test]
    fn reruns_are_identical(df in arbitrary_frame()) {
        let first = run_all(&df);
        let second = run_all(&df);
        prop_assert_eq!(first.results(), second.results());
        prop_assert_eq!(first.score(), second.score());
    }
}
