//! Flat tabular result model

use crate::error::ConvertError;
use crate::headers::revenue_cashflow_range;
use crate::reader::CellValue;

/// A flat table: ordered column names and one row of optional values per
/// record. `None` renders as an empty CSV field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<CellValue>>>,
}

impl DataTable {
    /// Trim the table to the Revenue..Cash Flow window, keeping any
    /// identifier columns that precede Revenue and discarding everything
    /// after Cash Flow.
    ///
    /// `source_label` names where the table came from, for the diagnostic
    /// when the range is missing.
    pub fn slice_to_range(&self, source_label: &str) -> Result<DataTable, ConvertError> {
        let Some((_, end)) = revenue_cashflow_range(&self.columns) else {
            return Err(ConvertError::RangeNotFound {
                source_label: source_label.to_string(),
                columns: self.columns.clone(),
            });
        };

        // Columns before Revenue plus the inclusive window collapse to one
        // prefix ending at Cash Flow.
        Ok(DataTable {
            columns: self.columns[..=end].to_vec(),
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().take(end + 1).cloned().collect())
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<CellValue> {
        Some(CellValue::Text(s.to_string()))
    }

    fn num(n: f64) -> Option<CellValue> {
        Some(CellValue::Number(n))
    }

    #[test]
    fn test_slice_keeps_prefix_and_window() {
        let table = DataTable {
            columns: ["Company", "Revenue", "EBITDA", "Cash Flow", "Notes"]
                .map(String::from)
                .to_vec(),
            rows: vec![vec![text("Acme"), num(100.0), num(40.0), num(20.0), text("x")]],
        };

        let sliced = table.slice_to_range("Sheet1").unwrap();
        assert_eq!(sliced.columns, ["Company", "Revenue", "EBITDA", "Cash Flow"]);
        assert_eq!(
            sliced.rows,
            vec![vec![text("Acme"), num(100.0), num(40.0), num(20.0)]]
        );
    }

    #[test]
    fn test_slice_missing_range_reports_columns() {
        let table = DataTable {
            columns: vec!["A".to_string(), "B".to_string()],
            rows: vec![],
        };

        let err = table.slice_to_range("Sheet1").unwrap_err();
        match err {
            ConvertError::RangeNotFound {
                source_label,
                columns,
            } => {
                assert_eq!(source_label, "Sheet1");
                assert_eq!(columns, vec!["A".to_string(), "B".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_slice_short_rows_are_not_padded() {
        let table = DataTable {
            columns: ["Revenue", "Cash Flow"].map(String::from).to_vec(),
            rows: vec![vec![num(1.0)]],
        };

        let sliced = table.slice_to_range("x").unwrap();
        assert_eq!(sliced.rows, vec![vec![num(1.0)]]);
    }
}
