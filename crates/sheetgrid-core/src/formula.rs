//! Formula extension point
//!
//! Cells may hold text starting with `=`. The grid has no formula language
//! of its own; callers plug one in through [`FormulaEvaluator`], which gets
//! the text after the `=` and read access to the grid through [`CellLookup`].

use tracing::debug;

use crate::cell::CellValue;
use crate::error::Result;
use crate::grid::Grid;

/// Read access to cells for formula evaluators
pub trait CellLookup {
    /// Value of a cell; never fails, unknown references read as empty
    fn lookup(&self, reference: &str) -> CellValue;
}

impl CellLookup for Grid {
    fn lookup(&self, reference: &str) -> CellValue {
        self.get(reference)
    }
}

/// Turns formula text into a value
pub trait FormulaEvaluator {
    /// Evaluate `formula` (the cell text without its leading `=`)
    fn evaluate(&self, formula: &str, cells: &dyn CellLookup) -> Result<CellValue>;
}

/// Evaluator that leaves formulas as written
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughEvaluator;

impl FormulaEvaluator for PassthroughEvaluator {
    fn evaluate(&self, formula: &str, _cells: &dyn CellLookup) -> Result<CellValue> {
        Ok(CellValue::Text(format!("={}", formula)))
    }
}

impl Grid {
    /// Value of a cell, with formula text routed through `evaluator`
    pub fn evaluate<E>(&self, address: &str, evaluator: &E) -> Result<CellValue>
    where
        E: FormulaEvaluator + ?Sized,
    {
        let value = self.get(address);
        match value.formula_text() {
            Some(formula) => evaluator.evaluate(formula, self),
            None => Ok(value),
        }
    }

    /// Replace every formula cell with its evaluated value
    ///
    /// Cells are rewritten in place in row-major order, so a formula sees
    /// the already rewritten values of cells before it. On error, cells
    /// rewritten so far keep their new values.
    pub fn evaluate_all<E>(&mut self, evaluator: &E) -> Result<()>
    where
        E: FormulaEvaluator + ?Sized,
    {
        let mut rewritten = 0usize;

        for row in 1..=self.rows() {
            for col in 1..=self.cols() {
                let value = self.get_at(row, col);
                let Some(formula) = value.formula_text() else {
                    continue;
                };
                let evaluated = evaluator.evaluate(formula, &*self)?;
                self.set_at(row, col, evaluated)?;
                rewritten += 1;
            }
        }

        debug!(cells = rewritten, "evaluated formulas");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    /// Formulas of the form "=A1" copy another cell; anything else fails
    struct CopyCell;

    impl FormulaEvaluator for CopyCell {
        fn evaluate(&self, formula: &str, cells: &dyn CellLookup) -> Result<CellValue> {
            if crate::CellAddress::parse(formula).is_ok() {
                Ok(cells.lookup(formula))
            } else {
                Err(Error::Formula(format!("unsupported formula '{}'", formula)))
            }
        }
    }

    #[test]
    fn test_evaluate_plain_values() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set("A1", 3.0).unwrap();
        grid.set("B1", "text").unwrap();

        assert_eq!(grid.evaluate("A1", &CopyCell).unwrap(), CellValue::Number(3.0));
        assert_eq!(grid.evaluate("B1", &CopyCell).unwrap(), CellValue::text("text"));
        assert_eq!(grid.evaluate("B2", &CopyCell).unwrap(), CellValue::Empty);
    }

    #[test]
    fn test_evaluate_formula() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set("A1", 3.0).unwrap();
        grid.set("A2", "=A1").unwrap();
        grid.set("B2", "=1+1").unwrap();

        assert_eq!(grid.evaluate("A2", &CopyCell).unwrap(), CellValue::Number(3.0));
        assert!(matches!(
            grid.evaluate("B2", &CopyCell),
            Err(Error::Formula(_))
        ));
        // Evaluation does not write back
        assert_eq!(grid.get("A2"), CellValue::text("=A1"));
    }

    #[test]
    fn test_evaluate_all_rewrites_in_order() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set("A1", 4.0).unwrap();
        grid.set("B1", "=A1").unwrap();
        grid.set("A2", "=B1").unwrap();
        grid.set("B2", "=A2").unwrap();

        grid.evaluate_all(&CopyCell).unwrap();

        assert_eq!(grid.get("B1"), CellValue::Number(4.0));
        assert_eq!(grid.get("A2"), CellValue::Number(4.0));
        assert_eq!(grid.get("B2"), CellValue::Number(4.0));
    }

    #[test]
    fn test_evaluate_all_forward_reference_sees_formula_text() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.set("A1", "=B1").unwrap();
        grid.set("B1", "=Z1").unwrap();

        grid.evaluate_all(&CopyCell).unwrap();

        // A1 copied B1 before B1 was rewritten
        assert_eq!(grid.get("A1"), CellValue::text("=Z1"));
        assert_eq!(grid.get("B1"), CellValue::Empty);
    }

    #[test]
    fn test_evaluate_all_stops_on_error() {
        let mut grid = Grid::new(1, 3).unwrap();
        grid.set("A1", "=C1").unwrap();
        grid.set("B1", "=oops").unwrap();
        grid.set("C1", 1.0).unwrap();

        assert!(grid.evaluate_all(&CopyCell).is_err());
        assert_eq!(grid.get("A1"), CellValue::Number(1.0));
        assert_eq!(grid.get("B1"), CellValue::text("=oops"));
    }

    #[test]
    fn test_passthrough_keeps_formulas() {
        let mut grid = Grid::new(1, 2).unwrap();
        grid.set("A1", "=SUM(B1:B1)").unwrap();
        grid.set("B1", 2.0).unwrap();
        let before = grid.clone();

        assert_eq!(
            grid.evaluate("A1", &PassthroughEvaluator).unwrap(),
            CellValue::text("=SUM(B1:B1)")
        );
        grid.evaluate_all(&PassthroughEvaluator).unwrap();
        assert_eq!(grid, before);
    }
}
