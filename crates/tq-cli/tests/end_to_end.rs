//! Ingest -> analyze -> report, end to end over a real CSV file.

use std::path::PathBuf;

use tq_analyze::run_all;
use tq_ingest::read_trades_csv;
use tq_model::{CHECKS_TOTAL, CheckId, Severity};
use tq_report::write_quality_report_json;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "tq-cli-test-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn analyze_a_messy_csv_and_write_the_report() {
    let dir = temp_dir();
    let csv_path = dir.join("trades.csv");
    // TradeID T1 is duplicated; one price is negative; Status has a bad
    // value; Instrument carries stray whitespace.
    std::fs::write(
        &csv_path,
        "TradeID,Date,SettlementDate,Instrument,Quantity,Price,Status,TradeType\n\
         T1,2099-01-10,2099-01-12,AAPL,100,10.5,EXECUTED,SPOT\n\
         T1,2099-01-11,2099-01-13, MSFT,200,-20.0,EXECUTED,SPOT\n\
         T3,2099-01-12,2099-01-14,GOOG,300,30.0,WRONG,SPOT\n",
    )
    .unwrap();

    let df = read_trades_csv(&csv_path).unwrap();
    assert_eq!(df.height(), 3);
    let run = run_all(&df);
    assert_eq!(run.results().len(), CHECKS_TOTAL);

    let duplicates = run.result(CheckId::Duplicates).unwrap();
    assert_eq!(duplicates.severity, Severity::Critical);
    let ranges = run.result(CheckId::Ranges).unwrap();
    assert_eq!(ranges.severity, Severity::Critical);
    let categorical = run.result(CheckId::Categorical).unwrap();
    assert_eq!(categorical.severity, Severity::Warning);
    let hygiene = run.result(CheckId::StringHygiene).unwrap();
    assert_eq!(hygiene.severity, Severity::Info);

    let report_path =
        write_quality_report_json(&dir, "trades.csv", &run, Some(0.01)).unwrap();
    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["summary"]["checks_total"], 15);
    assert_eq!(report["summary"]["row_count"], 3);
    assert_eq!(report["checks"].as_array().unwrap().len(), 15);
}

#[test]
fn unloadable_csv_never_reaches_the_analyzer() {
    let missing = temp_dir().join("absent.csv");
    assert!(read_trades_csv(&missing).is_err());
}
