//! Grid type

use tracing::{debug, trace};

use crate::cell::{CellAddress, CellRange, CellValue};
use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};

/// A fixed-size grid of cells
///
/// Every cell in `1..=rows` x `1..=cols` exists from construction and starts
/// out [`CellValue::Empty`]. Reads never fail: anything unset, outside the
/// grid or malformed reads as the default. Writes outside the grid fail with
/// [`Error::CellNotInitialised`].
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of rows
    rows: u32,
    /// Number of columns (at most [`MAX_COLS`])
    cols: u16,
    /// Row-major cell storage, `rows * cols` long
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create a new grid with every cell unset
    ///
    /// Fails with [`Error::InvalidDimensions`] when either dimension is zero,
    /// exceeds [`MAX_ROWS`] / [`MAX_COLS`], or the storage cannot be
    /// allocated.
    pub fn new(rows: u32, cols: u16) -> Result<Self> {
        let invalid = || Error::InvalidDimensions {
            rows,
            cols,
            max_rows: MAX_ROWS,
            max_cols: MAX_COLS,
        };

        if !(1..=MAX_ROWS).contains(&rows) || !(1..=MAX_COLS).contains(&cols) {
            return Err(invalid());
        }

        let len = (rows as usize)
            .checked_mul(cols as usize)
            .ok_or_else(invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        cells.resize(len, CellValue::Empty);

        Ok(Self { rows, cols, cells })
    }

    /// Get the number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Get the number of columns
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Check whether 1-based coordinates fall inside the grid
    pub fn contains(&self, row: u32, col: u16) -> bool {
        (1..=self.rows).contains(&row) && (1..=self.cols).contains(&col)
    }

    fn index(&self, row: u32, col: u16) -> Option<usize> {
        if self.contains(row, col) {
            Some((row - 1) as usize * self.cols as usize + (col - 1) as usize)
        } else {
            None
        }
    }

    // === Cell Access ===

    /// Get cell value by address string (e.g., "A1")
    ///
    /// Unset, out-of-grid and malformed references all read as
    /// [`CellValue::Empty`].
    pub fn get(&self, address: &str) -> CellValue {
        CellAddress::parse(address)
            .map(|addr| self.get_at(addr.row, addr.col))
            .unwrap_or_default()
    }

    /// Get cell value by 1-based row and column
    pub fn get_at(&self, row: u32, col: u16) -> CellValue {
        self.cell_at(row, col).cloned().unwrap_or_default()
    }

    /// Borrow a stored cell by 1-based row and column
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellValue> {
        self.index(row, col).map(|idx| &self.cells[idx])
    }

    /// Numeric view of a cell, as used by the reducers
    ///
    /// Unset cells read as 0; text cannot take part in arithmetic.
    pub fn number(&self, address: &str) -> Result<f64> {
        let value = self.get(address);
        value.as_number().ok_or_else(|| Error::InvalidValueType {
            reference: address.to_string(),
            expected: "number",
            actual: value.type_name(),
        })
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (CellAddress, &CellValue)> + '_ {
        let cols = self.cols as usize;
        self.cells.iter().enumerate().map(move |(idx, value)| {
            let addr = CellAddress::new((idx / cols) as u32 + 1, (idx % cols) as u16 + 1);
            (addr, value)
        })
    }

    // === Cell Modification ===

    /// Set a cell value by address string
    pub fn set<V: Into<CellValue>>(&mut self, address: &str, value: V) -> Result<()> {
        let addr = CellAddress::parse(address)?;
        self.set_at(addr.row, addr.col, value)
    }

    /// Set a cell value by 1-based row and column
    pub fn set_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) -> Result<()> {
        let idx = self
            .index(row, col)
            .ok_or_else(|| Error::CellNotInitialised(CellAddress::new(row, col).to_string()))?;
        self.cells[idx] = value.into();
        Ok(())
    }

    /// Reset a cell to unset
    pub fn clear(&mut self, address: &str) -> Result<()> {
        self.set(address, CellValue::Empty)
    }

    // === Range Operations ===

    /// Expand a range expression ("START:END") into its cell values
    ///
    /// See [`CellRange`] for the walk order.
    pub fn expand_range(&self, expr: &str) -> Result<Vec<CellValue>> {
        let range = CellRange::parse(expr)?;
        Ok(self.expand(&range))
    }

    /// Expand a parsed range into its cell values
    pub fn expand(&self, range: &CellRange) -> Vec<CellValue> {
        trace!(range = %range, cells = range.cell_count(), "expanding range");
        range
            .cells()
            .map(|addr| self.get_at(addr.row, addr.col))
            .collect()
    }

    // === Bulk Load ===

    /// Load rows of raw fields, positionally from A1
    ///
    /// Row `r`, field `c` of the input lands in row `r`, column `c`. Fields
    /// are converted with [`CellValue::from_field`]. Input larger than the
    /// grid fails with [`Error::CellNotInitialised`] at the first cell that
    /// does not fit; cells written before that stay written.
    ///
    /// Returns the number of rows loaded.
    pub fn load_from_rows<I, R, S>(&mut self, rows: I) -> Result<usize>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loaded = 0usize;

        for (row_idx, fields) in rows.into_iter().enumerate() {
            let row = u32::try_from(row_idx + 1)
                .map_err(|_| Error::CellNotInitialised(format!("row {}", row_idx + 1)))?;

            for (col_idx, field) in fields.into_iter().enumerate() {
                let col = u16::try_from(col_idx + 1).map_err(|_| {
                    Error::CellNotInitialised(format!("row {} column {}", row, col_idx + 1))
                })?;
                self.set_at(row, col, CellValue::from_field(field.as_ref()))?;
            }

            loaded += 1;
        }

        debug!(rows = loaded, "loaded rows into grid");
        Ok(loaded)
    }
}
