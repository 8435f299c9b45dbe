//! Excel/ODS file reader using calamine

use anyhow::{Context, Result};
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use std::path::Path;

pub mod workbook;

pub use workbook::{CellValue, Sheet, Workbook};

/// Read a workbook from a file path.
///
/// Every sheet is read fully into memory; formulas are not evaluated, only
/// the cached cell values are kept.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    let mut excel: Sheets<_> = open_workbook_auto(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_names = excel.sheet_names();
    let mut sheets = Vec::new();

    for sheet_name in &sheet_names {
        let range = excel.worksheet_range(sheet_name).ok();
        sheets.push(parse_sheet(sheet_name, range.as_ref()));
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

fn parse_sheet(name: &str, range: Option<&Range<Data>>) -> Sheet {
    let mut sheet = Sheet::new(name);

    let Some(range) = range else {
        return sheet;
    };
    let Some((start_row, start_col)) = range.start() else {
        return sheet;
    };

    // Range coordinates are relative to the used range's top-left corner;
    // shift them back to absolute sheet positions.
    let (n_rows, n_cols) = range.get_size();
    for rel_row in 0..n_rows {
        for rel_col in 0..n_cols {
            if let Some(data) = range.get((rel_row, rel_col)) {
                if let Some(value) = parse_cell_value(data) {
                    sheet.insert(
                        start_row + rel_row as u32,
                        start_col + rel_col as u32,
                        value,
                    );
                }
            }
        }
    }

    sheet
}

fn parse_cell_value(data: &Data) -> Option<CellValue> {
    match data {
        Data::Int(i) => Some(CellValue::Number(*i as f64)),
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::String(s) => Some(CellValue::Text(s.clone())),
        Data::Bool(b) => Some(CellValue::Boolean(*b)),
        Data::DateTime(dt) => Some(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) => Some(CellValue::Text(s.clone())),
        Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        // Error cells are tolerated as absent values
        Data::Error(_) => None,
        Data::Empty => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_value_mapping() {
        assert_eq!(
            parse_cell_value(&Data::Int(7)),
            Some(CellValue::Number(7.0))
        );
        assert_eq!(
            parse_cell_value(&Data::Float(1.5)),
            Some(CellValue::Number(1.5))
        );
        assert_eq!(
            parse_cell_value(&Data::String("Revenue".to_string())),
            Some(CellValue::Text("Revenue".to_string()))
        );
        assert_eq!(
            parse_cell_value(&Data::Bool(true)),
            Some(CellValue::Boolean(true))
        );
        assert_eq!(parse_cell_value(&Data::Empty), None);
        assert_eq!(
            parse_cell_value(&Data::Error(calamine::CellErrorType::Div0)),
            None
        );
    }
}
