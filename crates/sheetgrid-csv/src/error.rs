//! CSV error types

use sheetgrid_core::{MAX_COLS, MAX_ROWS};
use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors from reading delimited text into a grid
#[derive(Debug, Error)]
pub enum CsvError {
    /// The source file could not be opened or read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input, such as a ragged row when `flexible` is off
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The data was read but the grid rejected it: a row or column past the
    /// grid's edge, or empty input passed to `read_grid`
    #[error("Core error: {0}")]
    Core(#[from] sheetgrid_core::Error),

    /// The data extent has more rows or columns than any grid can hold
    #[error(
        "Data extent {rows}x{cols} does not fit a grid (at most {} rows and {} columns)",
        MAX_ROWS,
        MAX_COLS
    )]
    TooLarge {
        /// Number of rows read
        rows: usize,
        /// Width of the widest row
        cols: usize,
    },
}
