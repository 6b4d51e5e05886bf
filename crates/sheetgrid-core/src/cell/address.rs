//! Cell address and range types

use crate::error::{Error, Result};
use crate::MAX_COLS;
use std::fmt;
use std::str::FromStr;

/// A cell address (e.g., "A1", "C12")
///
/// Addresses use a single column letter (A-Z) followed by a row number.
/// Both coordinates are 1-based: "A1" is row 1, column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellAddress {
    /// Row number (1-based)
    pub row: u32,
    /// Column number (1-based, A=1, B=2, ..., Z=26)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address from 1-based coordinates
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use sheetgrid_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("C12").unwrap();
    /// assert_eq!(addr.row, 12);
    /// assert_eq!(addr.col, 3);
    ///
    /// assert!(CellAddress::parse("c12").is_err());
    /// assert!(CellAddress::parse("C0").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| Error::InvalidReference("empty reference".into()))?;

        let col = Self::letter_to_column(letter).ok_or_else(|| {
            Error::InvalidReference(format!("invalid column letter '{}' in '{}'", letter, s))
        })?;

        let row_str = chars.as_str();
        if row_str.is_empty() {
            return Err(Error::InvalidReference(format!("no row number in '{}'", s)));
        }
        if !row_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidReference(format!(
                "invalid row number in '{}'",
                s
            )));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidReference(format!("row number too large in '{}'", s)))?;

        if row == 0 {
            return Err(Error::InvalidReference(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        Ok(Self::new(row, col))
    }

    /// Format 1-based coordinates as an A1-style reference
    ///
    /// Only defined for columns 1..=26 and rows >= 1.
    pub fn format(row: u32, col: u16) -> Result<String> {
        let letter = Self::column_to_letter(col).ok_or_else(|| {
            Error::InvalidReference(format!("column {} has no single-letter name", col))
        })?;
        if row == 0 {
            return Err(Error::InvalidReference("row number must be >= 1".into()));
        }
        Ok(format!("{}{}", letter, row))
    }

    /// Convert a column letter to its 1-based index (A = 1, Z = 26)
    pub fn letter_to_column(letter: char) -> Option<u16> {
        if letter.is_ascii_uppercase() {
            Some(letter as u16 - 'A' as u16 + 1)
        } else {
            None
        }
    }

    /// Convert a 1-based column index to its letter (1 = A, 26 = Z)
    pub fn column_to_letter(col: u16) -> Option<char> {
        if (1..=MAX_COLS).contains(&col) {
            Some((b'A' + (col - 1) as u8) as char)
        } else {
            None
        }
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> Result<String> {
        Self::format(self.row, self.col)
    }

    /// Create a range from this address to another
    pub fn to(&self, other: CellAddress) -> CellRange {
        CellRange::new(*self, other)
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match Self::column_to_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            // Coordinates built by hand can fall outside A-Z
            None => write!(f, "R{}C{}", self.row, self.col),
        }
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A range of cells (e.g., "A1:B10")
///
/// The endpoints are kept exactly as written. Expansion walks rows
/// `start.row..=end.row` and, within each row, columns `1..=end.col`:
/// the start column does not bound the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address as written
    pub start: CellAddress,
    /// End address as written
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self { start, end }
    }

    /// Parse a range from START:END notation
    pub fn parse(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidRange(format!("missing ':' in '{}'", s)))?;

        if end.contains(':') {
            return Err(Error::InvalidRange(format!("more than one ':' in '{}'", s)));
        }

        Ok(Self::new(CellAddress::parse(start)?, CellAddress::parse(end)?))
    }

    /// Check whether a string is a range expression rather than a single reference
    pub fn is_range_expr(s: &str) -> bool {
        s.contains(':')
    }

    /// Number of rows walked by the expansion
    ///
    /// Counted in `u64`: a hand-built range from row 0 to `u32::MAX` walks
    /// 2^32 rows.
    pub fn row_count(&self) -> u64 {
        if self.end.row < self.start.row {
            0
        } else {
            u64::from(self.end.row) - u64::from(self.start.row) + 1
        }
    }

    /// Total number of cells produced by the expansion
    pub fn cell_count(&self) -> u64 {
        self.row_count() * u64::from(self.end.col)
    }

    /// Iterate over all cell addresses in expansion order (row by row)
    pub fn cells(&self) -> CellRangeIterator {
        CellRangeIterator {
            end: self.end,
            current_row: self.start.row,
            current_col: 1,
            remaining: self.cell_count(),
        }
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

impl FromStr for CellRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over cells in a range
pub struct CellRangeIterator {
    end: CellAddress,
    current_row: u32,
    current_col: u16,
    remaining: u64,
}

impl Iterator for CellRangeIterator {
    type Item = CellAddress;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let addr = CellAddress::new(self.current_row, self.current_col);
        self.remaining -= 1;

        // Move to next cell; every row restarts at column 1
        if self.remaining > 0 {
            self.current_col += 1;
            if self.current_col > self.end.col {
                self.current_col = 1;
                self.current_row += 1;
            }
        }

        Some(addr)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CellRangeIterator {}
