//! Prelude module - common imports for sheetgrid users
//!
//! ```rust
//! use sheetgrid::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellAddress,
    CellRange,
    CellValue,

    // Error types
    Error,
    Result,

    // Formula extension point
    CellLookup,
    FormulaEvaluator,
    PassthroughEvaluator,

    // Main types
    Grid,
    Operand,
};

#[cfg(feature = "csv")]
pub use crate::{CsvReadOptions, CsvReader, GridExt};
