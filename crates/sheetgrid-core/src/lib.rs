//! # sheetgrid-core
//!
//! Core data structures for the sheetgrid spreadsheet library.
//!
//! This crate provides:
//! - [`CellValue`] - Represents cell values (empty, numbers, raw text)
//! - [`CellAddress`] and [`CellRange`] - Cell addressing and range expressions
//! - [`Grid`] - Fixed-size cell storage with range expansion and reducers
//! - [`FormulaEvaluator`] - Extension point for evaluating formula text
//!
//! ## Example
//!
//! ```rust
//! use sheetgrid_core::{CellValue, Grid};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//!
//! grid.set("A1", 5.0).unwrap();
//! grid.set("B1", 3.0).unwrap();
//!
//! assert_eq!(grid.add(&["A1", "B1"]).unwrap(), 8.0);
//! assert_eq!(grid.get("C3"), CellValue::Empty);
//! ```

pub mod cell;
pub mod error;
pub mod formula;
pub mod grid;
pub mod reduce;

// Re-exports for convenience
pub use cell::{CellAddress, CellRange, CellRangeIterator, CellValue};
pub use error::{Error, Result};
pub use formula::{CellLookup, FormulaEvaluator, PassthroughEvaluator};
pub use grid::Grid;
pub use reduce::Operand;

/// Maximum number of rows in a grid
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a grid (single-letter addressing, A-Z)
pub const MAX_COLS: u16 = 26;
