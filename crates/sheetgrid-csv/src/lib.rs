//! # sheetgrid-csv
//!
//! Delimited text reader for sheetgrid: turns CSV (or any delimited text)
//! into rows of raw fields and loads them into a [`Grid`](sheetgrid_core::Grid).

mod error;
mod options;
mod reader;

pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
