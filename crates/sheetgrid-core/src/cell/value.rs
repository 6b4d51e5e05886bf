//! Cell value types

use std::fmt;

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// Unset cell; reads as the numeric default 0
    #[default]
    Empty,

    /// Numeric value
    Number(f64),

    /// Raw text, including unevaluated formulas ("=...")
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Convert a raw tabular field into a value
    ///
    /// Empty fields stay unset, fields that parse as a number become
    /// [`CellValue::Number`], everything else is kept as text.
    pub fn from_field(field: &str) -> Self {
        if field.is_empty() {
            return CellValue::Empty;
        }

        // "inf" and "NaN" parse as f64 but are words in a sheet
        match field.parse::<f64>() {
            Ok(n) if n.is_finite() => CellValue::Number(n),
            _ => CellValue::text(field),
        }
    }

    /// Check if the cell is unset
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Check if the cell holds formula text
    pub fn is_formula(&self) -> bool {
        self.formula_text().is_some()
    }

    /// Get the formula body (text after the leading '=') if this is a formula
    pub fn formula_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => s.strip_prefix('='),
            _ => None,
        }
    }

    /// Numeric view of the value; unset cells read as 0
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Empty => Some(0.0),
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, "0"),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}
