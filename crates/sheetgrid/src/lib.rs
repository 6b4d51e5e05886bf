//! # sheetgrid
//!
//! A small in-memory spreadsheet model.
//!
//! ## Features
//!
//! - Fixed-size grids addressed as "A1".."Z<n>"
//! - Range expressions ("A1:C3") expanded row by row
//! - Reducers: add, sum, subtract, divide, mul, average, count
//! - Bulk load from rows of fields, or from CSV files (`csv` feature)
//! - A pluggable evaluator for cells holding `=` formulas
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid::prelude::*;
//!
//! let mut grid = Grid::new(2, 3).unwrap();
//! grid.load_from_rows([["10", "2"]]).unwrap();
//!
//! grid.divide("C1", "A1", "B1").unwrap();
//! assert_eq!(grid.get("C1"), CellValue::Number(5.0));
//!
//! assert_eq!(grid.add(&["A1:C1"]).unwrap(), 17.0);
//! ```

pub mod prelude;

// Re-export core types
pub use sheetgrid_core::{
    // Cell types
    CellAddress,
    CellLookup,
    CellRange,
    CellValue,
    // Error types
    Error,
    // Formula extension point
    FormulaEvaluator,
    // Main types
    Grid,
    Operand,
    PassthroughEvaluator,
    Result,
    // Constants
    MAX_COLS,
    MAX_ROWS,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use sheetgrid_csv::{CsvError, CsvReadOptions, CsvReader};

#[cfg(feature = "csv")]
use std::path::Path;

#[cfg(feature = "csv")]
fn csv_to_core(err: CsvError) -> Error {
    match err {
        CsvError::Core(e) => e,
        other => Error::other(other.to_string()),
    }
}

/// Extension trait for Grid to add file loading
#[cfg(feature = "csv")]
pub trait GridExt: Sized {
    /// Load a comma-separated file into this grid starting at A1
    ///
    /// Returns the number of rows loaded.
    fn load_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize>;

    /// Open a comma-separated file as a grid sized to fit it
    fn open_csv<P: AsRef<Path>>(path: P) -> Result<Self>;
}

#[cfg(feature = "csv")]
impl GridExt for Grid {
    fn load_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        CsvReader::load_file(self, path, &CsvReadOptions::default()).map_err(csv_to_core)
    }

    fn open_csv<P: AsRef<Path>>(path: P) -> Result<Grid> {
        CsvReader::read_grid_file(path, &CsvReadOptions::default()).map_err(csv_to_core)
    }
}
