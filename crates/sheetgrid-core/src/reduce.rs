//! Aggregate operations over cells and ranges
//!
//! Arguments containing `:` are range expressions and are expanded with
//! [`Grid::expand`]; anything else is read as a single cell. Single-cell
//! reads are total, so a malformed or out-of-grid argument reads as 0.
//!
//! The reducers do not all treat ranges the same way:
//! - [`Grid::add`], [`Grid::sum`], [`Grid::average`] and [`Grid::count`]
//!   expand ranges.
//! - [`Grid::mul`] expands a range and multiplies by its *sum*.
//! - [`Grid::subtract`] never expands; a range argument reads as 0.

use tracing::warn;

use crate::cell::{CellRange, CellValue};
use crate::error::{Error, Result};
use crate::grid::Grid;

/// An argument to [`Grid::sum`]: a cell, a range, or a literal number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    /// Cell reference or range expression
    Reference(&'a str),
    /// Literal number
    Literal(f64),
}

impl<'a> From<&'a str> for Operand<'a> {
    fn from(s: &'a str) -> Self {
        Operand::Reference(s)
    }
}

impl From<f64> for Operand<'_> {
    fn from(n: f64) -> Self {
        Operand::Literal(n)
    }
}

impl From<i32> for Operand<'_> {
    fn from(n: i32) -> Self {
        Operand::Literal(n as f64)
    }
}

impl Grid {
    /// Numeric values of an expanded range
    fn range_numbers(&self, expr: &str) -> Result<Vec<f64>> {
        let range = CellRange::parse(expr)?;
        range
            .cells()
            .map(|addr| {
                let value = self.get_at(addr.row, addr.col);
                value.as_number().ok_or_else(|| Error::InvalidValueType {
                    reference: addr.to_string(),
                    expected: "number",
                    actual: value.type_name(),
                })
            })
            .collect()
    }

    fn range_total(&self, expr: &str) -> Result<f64> {
        Ok(self.range_numbers(expr)?.iter().sum())
    }

    /// Add the values of cells and ranges
    pub fn add(&self, refs: &[&str]) -> Result<f64> {
        let mut total = 0.0;
        for reference in refs {
            if CellRange::is_range_expr(reference) {
                total += self.range_total(reference)?;
            } else {
                total += self.number(reference)?;
            }
        }
        Ok(total)
    }

    /// Add cells, ranges and literal numbers
    ///
    /// ```
    /// use sheetgrid_core::{Grid, Operand};
    ///
    /// let mut grid = Grid::new(2, 2).unwrap();
    /// grid.set("A1", 1.0).unwrap();
    /// grid.set("B2", 2.0).unwrap();
    ///
    /// let total = grid
    ///     .sum(&[Operand::from("A1:B2"), Operand::from(10.0)])
    ///     .unwrap();
    /// assert_eq!(total, 13.0);
    /// ```
    pub fn sum(&self, args: &[Operand<'_>]) -> Result<f64> {
        let mut total = 0.0;
        for arg in args {
            total += match *arg {
                Operand::Reference(r) if CellRange::is_range_expr(r) => self.range_total(r)?,
                Operand::Reference(r) => self.number(r)?,
                Operand::Literal(n) => n,
            };
        }
        Ok(total)
    }

    /// Subtract later cells from the first and store the result
    ///
    /// Arguments are read as single cells only.
    pub fn subtract(&mut self, result: &str, refs: &[&str]) -> Result<()> {
        let (first, rest) = refs
            .split_first()
            .ok_or(Error::EmptyOperandSet("subtract"))?;

        let mut total = self.number(first)?;
        for reference in rest {
            total -= self.number(reference)?;
        }

        self.set(result, total)
    }

    /// Divide one cell by another and store the quotient
    ///
    /// A zero divisor is logged and leaves `result` untouched; it is not
    /// returned as an error.
    pub fn divide(&mut self, result: &str, dividend: &str, divisor: &str) -> Result<()> {
        let numerator = self.number(dividend)?;
        let denominator = self.number(divisor)?;

        if denominator == 0.0 {
            let err = Error::DivisionByZero {
                dividend: dividend.to_string(),
                divisor: divisor.to_string(),
            };
            warn!(result, error = %err, "division not stored");
            return Ok(());
        }

        self.set(result, CellValue::Number(numerator / denominator))
    }

    /// Multiply the values of cells and range sums
    pub fn mul(&self, refs: &[&str]) -> Result<f64> {
        let mut product = 1.0;
        for reference in refs {
            if CellRange::is_range_expr(reference) {
                product *= self.range_total(reference)?;
            } else {
                product *= self.number(reference)?;
            }
        }
        Ok(product)
    }

    /// Arithmetic mean of every cell and expanded range cell
    pub fn average(&self, refs: &[&str]) -> Result<f64> {
        let mut values = Vec::new();
        for reference in refs {
            if CellRange::is_range_expr(reference) {
                values.extend(self.range_numbers(reference)?);
            } else {
                values.push(self.number(reference)?);
            }
        }

        if values.is_empty() {
            return Err(Error::EmptyOperandSet("average"));
        }

        Ok(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Number of values the arguments resolve to
    ///
    /// Each expanded range cell counts once, as does each single cell.
    pub fn count(&self, refs: &[&str]) -> Result<usize> {
        let mut count = 0usize;
        for reference in refs {
            if CellRange::is_range_expr(reference) {
                count += CellRange::parse(reference)?.cells().len();
            } else {
                count += 1;
            }
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid_3x3() -> Grid {
        // 1 2 3
        // 4 5 6
        // 7 8 9
        let mut grid = Grid::new(3, 3).unwrap();
        grid.load_from_rows(vec![
            vec!["1", "2", "3"],
            vec!["4", "5", "6"],
            vec!["7", "8", "9"],
        ])
        .unwrap();
        grid
    }

    #[test]
    fn test_add_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set("A1", 5.0).unwrap();
        grid.set("B1", 3.0).unwrap();
        assert_eq!(grid.add(&["A1", "B1"]).unwrap(), 8.0);
    }

    #[test]
    fn test_add_ranges_and_cells() {
        let grid = grid_3x3();
        // A2:B3 walks A2 B2 A3 B3 = 4 + 5 + 7 + 8
        assert_eq!(grid.add(&["A2:B3"]).unwrap(), 24.0);
        assert_eq!(grid.add(&["A2:B3", "C1"]).unwrap(), 27.0);
        assert_eq!(grid.add(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_add_range_uses_columns_from_a() {
        let grid = grid_3x3();
        // C1:C1 still walks A1 B1 C1
        assert_eq!(grid.add(&["C1:C1"]).unwrap(), 6.0);
    }

    #[test]
    fn test_add_missing_cells_read_zero() {
        let grid = grid_3x3();
        assert_eq!(grid.add(&["A1", "Z99", "oops"]).unwrap(), 1.0);
    }

    #[test]
    fn test_add_text_is_rejected() {
        let mut grid = grid_3x3();
        grid.set("B2", "five").unwrap();

        assert!(matches!(
            grid.add(&["B2"]),
            Err(Error::InvalidValueType { actual: "text", .. })
        ));
        assert_eq!(
            grid.add(&["A1:C3"]),
            Err(Error::InvalidValueType {
                reference: "B2".into(),
                expected: "number",
                actual: "text",
            })
        );
    }

    #[test]
    fn test_add_bad_range() {
        let grid = grid_3x3();
        assert!(matches!(
            grid.add(&["A1:"]),
            Err(Error::InvalidReference(_))
        ));
    }

    #[test]
    fn test_sum_with_literals() {
        let grid = grid_3x3();
        let total = grid
            .sum(&[
                Operand::from("A1"),
                Operand::from("A3:A3"),
                Operand::from(2.5),
                Operand::from(-1),
            ])
            .unwrap();
        // A3:A3 walks A3 only
        assert_eq!(total, 1.0 + 7.0 + 2.5 - 1.0);
    }

    #[test]
    fn test_subtract_stores_result() {
        let mut grid = grid_3x3();
        grid.subtract("C3", &["C2", "A1", "B1"]).unwrap();
        assert_eq!(grid.get("C3"), CellValue::Number(3.0));
    }

    #[test]
    fn test_subtract_does_not_expand_ranges() {
        let mut grid = grid_3x3();
        grid.subtract("A1", &["C3", "A1:C3"]).unwrap();
        assert_eq!(grid.get("A1"), CellValue::Number(9.0));
    }

    #[test]
    fn test_subtract_errors() {
        let mut grid = grid_3x3();
        assert_eq!(
            grid.subtract("A1", &[]),
            Err(Error::EmptyOperandSet("subtract"))
        );
        assert_eq!(
            grid.subtract("D1", &["A1", "B1"]),
            Err(Error::CellNotInitialised("D1".into()))
        );
    }

    #[test]
    fn test_divide_stores_quotient() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set("A1", 10.0).unwrap();
        grid.set("B1", 2.0).unwrap();

        grid.divide("C1", "A1", "B1").unwrap();
        assert_eq!(grid.get("C1"), CellValue::Number(5.0));
    }

    #[test]
    fn test_divide_result_out_of_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set("A1", 10.0).unwrap();
        grid.set("B1", 2.0).unwrap();
        grid.set("A2", 0.0).unwrap();

        assert_eq!(
            grid.divide("C1", "A1", "B1"),
            Err(Error::CellNotInitialised("C1".into()))
        );
    }

    #[test]
    fn test_divide_by_zero_is_swallowed() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set("A1", 10.0).unwrap();
        grid.set("A2", 0.0).unwrap();

        assert_eq!(grid.divide("B2", "A1", "A2"), Ok(()));
        assert_eq!(grid.get("B2"), CellValue::Empty);
        assert_eq!(grid.number("B2").unwrap(), 0.0);

        // Unset divisor reads as zero too
        grid.set("B2", 1.0).unwrap();
        assert_eq!(grid.divide("B2", "A1", "B1"), Ok(()));
        assert_eq!(grid.get("B2"), CellValue::Number(1.0));
    }

    #[test]
    fn test_mul_sums_ranges() {
        let grid = grid_3x3();
        assert_eq!(grid.mul(&["B1", "C1"]).unwrap(), 6.0);
        // (1 + 2 + 4 + 5) * 3
        assert_eq!(grid.mul(&["A1:B2", "C1"]).unwrap(), 36.0);
        assert_eq!(grid.mul(&[]).unwrap(), 1.0);
    }

    #[test]
    fn test_average() {
        let grid = grid_3x3();
        assert_eq!(grid.average(&["A1", "C1"]).unwrap(), 2.0);
        assert_eq!(grid.average(&["A1:C3"]).unwrap(), 5.0);
        // A1:A1 (1) plus B3 (8)
        assert_eq!(grid.average(&["A1:A1", "B3"]).unwrap(), 4.5);
    }

    #[test]
    fn test_average_counts_unset_cells() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set("A1", 4.0).unwrap();
        assert_eq!(grid.average(&["A1:B2"]).unwrap(), 1.0);
    }

    #[test]
    fn test_average_empty() {
        let grid = grid_3x3();
        assert_eq!(grid.average(&[]), Err(Error::EmptyOperandSet("average")));
        // A range that expands to nothing also leaves no values
        assert_eq!(
            grid.average(&["A3:A1"]),
            Err(Error::EmptyOperandSet("average"))
        );
    }

    #[test]
    fn test_count() {
        let mut grid = grid_3x3();
        grid.set("B2", "text").unwrap();

        assert_eq!(grid.count(&[]).unwrap(), 0);
        assert_eq!(grid.count(&["A1", "B2"]).unwrap(), 2);
        assert_eq!(grid.count(&["B1:B3"]).unwrap(), 6);
        assert_eq!(grid.count(&["A1:C3", "A1", "A3:A1"]).unwrap(), 10);
        assert!(grid.count(&["A1:1"]).is_err());
    }
}
