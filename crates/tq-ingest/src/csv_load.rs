//! CSV loading: the external data-loading collaborator.
//!
//! Reads a trade CSV into an in-memory polars `DataFrame` with typed
//! columns. A column where every non-blank cell parses as a number becomes
//! `Float64`; everything else stays `String`. Blank cells become nulls.
//! Cell values are NOT trimmed: leading/trailing whitespace is real data
//! the string-hygiene check must see.
//!
//! Malformed files fail here with a user-facing error; the analyzer is
//! never invoked on an unloadable dataset.

use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use polars::prelude::{Column, DataFrame, NamedFrom, PolarsError, Series};
use thiserror::Error;

use crate::value::parse_f64;

/// Why a CSV file could not be turned into a DataFrame.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("read csv {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("csv has no usable header row: {path}")]
    EmptyHeader { path: PathBuf },
    #[error("assemble dataframe: {0}")]
    Frame(#[from] PolarsError),
}

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Load a CSV file into a DataFrame with inferred column types.
pub fn read_trades_csv(path: &Path) -> Result<DataFrame, LoadError> {
    let read_err = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(read_err)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(|h| h.is_empty()) && !headers.is_empty() {
        return Err(LoadError::EmptyHeader {
            path: path.to_path_buf(),
        });
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        for (idx, slot) in cells.iter_mut().enumerate() {
            let raw = record.get(idx).unwrap_or("");
            slot.push(if raw.trim().is_empty() {
                None
            } else {
                Some(raw.to_string())
            });
        }
    }

    build_frame(&headers, cells)
}

/// Build a typed DataFrame from raw column-major cells.
pub fn build_frame(
    headers: &[String],
    cells: Vec<Vec<Option<String>>>,
) -> Result<DataFrame, LoadError> {
    let mut columns: Vec<Column> = Vec::with_capacity(headers.len());
    for (header, values) in headers.iter().zip(cells) {
        if is_numeric_column(&values) {
            let numeric: Vec<Option<f64>> = values
                .iter()
                .map(|value| value.as_deref().and_then(parse_f64))
                .collect();
            columns.push(Series::new(header.as_str().into(), numeric).into());
        } else {
            columns.push(Series::new(header.as_str().into(), values).into());
        }
    }
    Ok(DataFrame::new(columns)?)
}

/// A column is numeric when it has at least one value and every non-null
/// value parses as f64.
fn is_numeric_column(values: &[Option<String>]) -> bool {
    let mut any = false;
    for value in values.iter().flatten() {
        if parse_f64(value).is_none() {
            return false;
        }
        any = true;
    }
    any
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    fn temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "tq-ingest-test-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn infers_numeric_and_text_columns() {
        let path = temp_csv("trades.csv", "TradeID,Price\nT1,100.5\nT2,99\n");
        let df = read_trades_csv(&path).unwrap();
        assert_eq!(df.height(), 2);
        assert_eq!(df.column("TradeID").unwrap().dtype(), &DataType::String);
        assert_eq!(df.column("Price").unwrap().dtype(), &DataType::Float64);
    }

    #[test]
    fn blank_cells_become_nulls() {
        let path = temp_csv("trades.csv", "TradeID,Price\nT1,\n,99\n");
        let df = read_trades_csv(&path).unwrap();
        assert_eq!(df.column("Price").unwrap().null_count(), 1);
        assert_eq!(df.column("TradeID").unwrap().null_count(), 1);
    }

    #[test]
    fn whitespace_survives_ingestion() {
        let path = temp_csv("trades.csv", "Instrument\n AAPL\n");
        let df = read_trades_csv(&path).unwrap();
        let value = df.column("Instrument").unwrap().get(0).unwrap();
        assert_eq!(crate::value::any_to_string(value), " AAPL");
    }

    #[test]
    fn header_only_file_yields_zero_rows() {
        let path = temp_csv("trades.csv", "TradeID,Date,Price\n");
        let df = read_trades_csv(&path).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 3);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let path = std::path::Path::new("/nonexistent/trades.csv");
        assert!(read_trades_csv(path).is_err());
    }
}
