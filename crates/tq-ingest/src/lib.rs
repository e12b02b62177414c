pub mod csv_load;
pub mod value;

pub use csv_load::{LoadError, build_frame, read_trades_csv};
pub use value::{any_to_f64, any_to_string, format_numeric, is_missing_value, parse_f64};
