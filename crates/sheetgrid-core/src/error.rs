//! Error types for sheetgrid-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetgrid-core
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed cell reference (bad column letter or row number)
    #[error("Invalid cell reference: {0}")]
    InvalidReference(String),

    /// Malformed range expression
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// Grid dimensions outside the supported bounds
    #[error(
        "Invalid grid dimensions {rows}x{cols} (1 <= rows <= {max_rows}, 1 <= cols <= {max_cols})"
    )]
    InvalidDimensions {
        rows: u32,
        cols: u16,
        max_rows: u32,
        max_cols: u16,
    },

    /// Write to a reference outside the grid
    #[error("Cell {0} is not initialised in this grid")]
    CellNotInitialised(String),

    /// Divisor resolved to zero
    #[error("Division by zero: {dividend} / {divisor}")]
    DivisionByZero { dividend: String, divisor: String },

    /// Reducer called without any values to work on
    #[error("{0} requires at least one operand")]
    EmptyOperandSet(&'static str),

    /// Cell value cannot take part in arithmetic
    #[error("Invalid value type in {reference}: expected {expected}, got {actual}")]
    InvalidValueType {
        reference: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Error reported by a formula evaluator
    #[error("Formula error: {0}")]
    Formula(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
