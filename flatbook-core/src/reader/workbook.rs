//! Workbook data structures

use std::collections::HashMap;
use std::path::PathBuf;

/// Represents a complete workbook
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get all sheet names in workbook order
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Represents a worksheet as a sparse grid of values.
///
/// Coordinates are absolute 0-based (row, column) positions in the source
/// sheet; cells outside the used range simply have no entry.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    cells: HashMap<(u32, u32), CellValue>,
    /// Number of rows in the used range (max used row + 1)
    pub rows: u32,
    /// Number of columns in the used range (max used column + 1)
    pub cols: u32,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Insert a value, growing the used range to cover it
    pub fn insert(&mut self, row: u32, col: u32, value: CellValue) {
        self.rows = self.rows.max(row + 1);
        self.cols = self.cols.max(col + 1);
        self.cells.insert((row, col), value);
    }

    /// Get the value at the given position, if any
    pub fn value(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// Get the text at the given position, if the cell holds text
    pub fn text(&self, row: u32, col: u32) -> Option<&str> {
        self.value(row, col).and_then(CellValue::as_text)
    }

    /// Get the number at the given position, if the cell holds a number
    pub fn number(&self, row: u32, col: u32) -> Option<f64> {
        self.value(row, col).and_then(CellValue::as_number)
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl CellValue {
    /// Get the text if this is a text cell
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the numeric value if this is a number cell.
    ///
    /// Booleans are deliberately not numbers here: a TRUE under a view
    /// column must not turn into a 1.0 metric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}
