//! Well-known trade columns and column access helpers.
//!
//! Column names carry the semantic meaning the checks consume. A name
//! missing from the dataset disables the checks that reference it; it is
//! never an error. Lookup is case-insensitive so `tradeid` and `TradeID`
//! address the same column.

use std::collections::HashMap;

use polars::prelude::{Column, DataFrame, DataType};

pub const TRADE_ID: &str = "TradeID";
pub const DATE: &str = "Date";
pub const SETTLEMENT_DATE: &str = "SettlementDate";
pub const CREATED_AT: &str = "CreatedAt";
pub const INSTRUMENT: &str = "Instrument";
pub const QUANTITY: &str = "Quantity";
pub const PRICE: &str = "Price";
pub const VALUE: &str = "Value";
pub const COUNTERPARTY: &str = "Counterparty";
pub const STATUS: &str = "Status";
pub const TRADE_TYPE: &str = "TradeType";
pub const COMMISSION: &str = "Commission";
pub const ENTRY_TIME: &str = "EntryTime";

/// Columns the type-validity check parses as dates.
pub const DATE_COLUMNS: &[&str] = &[DATE, SETTLEMENT_DATE, CREATED_AT];

/// Columns the schema-completeness check requires.
pub const REQUIRED_COLUMNS: &[&str] = &[TRADE_ID, DATE, INSTRUMENT, QUANTITY, PRICE, STATUS];

pub const VALID_STATUS: &[&str] = &["EXECUTED", "PENDING", "CANCELLED", "SETTLED", "CONFIRMED"];
pub const VALID_TRADE_TYPE: &[&str] = &["SPOT", "FORWARD", "SWAP", "OPTION", "NDF"];

/// Case-insensitive column lookup over one DataFrame snapshot.
#[derive(Debug, Clone)]
pub struct ColumnLookup {
    map: HashMap<String, String>,
}

impl ColumnLookup {
    pub fn new(df: &DataFrame) -> Self {
        let mut map = HashMap::new();
        for name in df.get_column_names() {
            let key = name.to_ascii_uppercase();
            map.entry(key).or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    /// Resolve a well-known name to the dataset's actual column name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .get(&name.to_ascii_uppercase())
            .map(|value| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_ascii_uppercase())
    }
}

/// Resolve a well-known column in the frame, if present.
pub fn resolve<'a>(df: &'a DataFrame, lookup: &ColumnLookup, name: &str) -> Option<&'a Column> {
    let actual = lookup.get(name)?;
    df.column(actual).ok()
}

pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

pub fn is_text_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String)
}

/// Numeric columns of the frame, in frame order.
pub fn numeric_columns(df: &DataFrame) -> Vec<&Column> {
    df.get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .collect()
}

/// Text columns of the frame, in frame order.
pub fn text_columns(df: &DataFrame) -> Vec<&Column> {
    df.get_columns()
        .iter()
        .filter(|column| is_text_dtype(column.dtype()))
        .collect()
}
