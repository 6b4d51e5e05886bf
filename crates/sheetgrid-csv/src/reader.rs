//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::{CsvError, CsvResult};
use crate::options::CsvReadOptions;
use sheetgrid_core::{Grid, MAX_COLS, MAX_ROWS};

/// Delimited text reader
pub struct CsvReader;

impl CsvReader {
    fn builder(options: &CsvReadOptions) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(options.flexible)
            .trim(if options.trim {
                csv::Trim::All
            } else {
                csv::Trim::None
            });
        builder
    }

    /// Read delimited text into rows of raw fields
    ///
    /// Blank lines produce no row.
    pub fn read_rows<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Vec<Vec<String>>> {
        let mut csv_reader = Self::builder(options).from_reader(reader);
        let mut rows = Vec::new();

        for result in csv_reader.records() {
            let record = result?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(rows)
    }

    /// Read a delimited file into rows of raw fields
    pub fn read_rows_file<P: AsRef<Path>>(
        path: P,
        options: &CsvReadOptions,
    ) -> CsvResult<Vec<Vec<String>>> {
        let file = File::open(path)?;
        Self::read_rows(file, options)
    }

    /// Read delimited text and load it into `grid` starting at A1
    ///
    /// Returns the number of rows loaded. Input that does not fit the grid
    /// fails with [`sheetgrid_core::Error::CellNotInitialised`].
    pub fn load_into<R: Read>(
        grid: &mut Grid,
        reader: R,
        options: &CsvReadOptions,
    ) -> CsvResult<usize> {
        let rows = Self::read_rows(reader, options)?;
        Ok(grid.load_from_rows(&rows)?)
    }

    /// Load a delimited file into `grid` starting at A1
    pub fn load_file<P: AsRef<Path>>(
        grid: &mut Grid,
        path: P,
        options: &CsvReadOptions,
    ) -> CsvResult<usize> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading delimited file");
        let file = File::open(path)?;
        Self::load_into(grid, file, options)
    }

    /// Read delimited text into a new grid sized to fit it
    ///
    /// The grid has one row per input row and as many columns as the widest
    /// row. Empty input fails with [`sheetgrid_core::Error::InvalidDimensions`];
    /// data wider than [`MAX_COLS`] or longer than [`MAX_ROWS`] fails with
    /// [`CsvError::TooLarge`] carrying the actual extent.
    pub fn read_grid<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Grid> {
        let rows = Self::read_rows(reader, options)?;

        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let too_large = || CsvError::TooLarge {
            rows: height,
            cols: width,
        };

        let grid_rows = u32::try_from(height)
            .ok()
            .filter(|&r| r <= MAX_ROWS)
            .ok_or_else(too_large)?;
        let grid_cols = u16::try_from(width)
            .ok()
            .filter(|&c| c <= MAX_COLS)
            .ok_or_else(too_large)?;

        let mut grid = Grid::new(grid_rows, grid_cols)?;
        grid.load_from_rows(&rows)?;
        Ok(grid)
    }

    /// Read a delimited file into a new grid sized to fit it
    pub fn read_grid_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Grid> {
        let file = File::open(path)?;
        Self::read_grid(file, options)
    }
}
