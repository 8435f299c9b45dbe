//! Plain loader for already-flat sheets

use crate::error::ConvertError;
use crate::headers::revenue_cashflow_range;
use crate::reader::{Sheet, Workbook};
use crate::table::DataTable;

/// Try to find a sheet that already has flat headers covering the
/// Revenue..Cash Flow range.
///
/// With a hint, only that sheet is tested; naming a sheet that does not
/// exist is fatal, while a hinted sheet whose headers do not match is just
/// a negative result (`Ok(None)`) and the caller may fall back to the
/// pivot path. Without a hint, sheets are tried in workbook order and the
/// first match wins.
pub fn load_flat_sheet(
    workbook: &Workbook,
    hint: Option<&str>,
) -> Result<Option<(DataTable, String)>, ConvertError> {
    if let Some(name) = hint {
        let Some(sheet) = workbook.get_sheet(name) else {
            return Err(ConvertError::SheetNotFound {
                requested: name.to_string(),
                available: workbook
                    .sheet_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
            });
        };
        return Ok(flat_table(sheet));
    }

    for sheet in &workbook.sheets {
        if let Some(found) = flat_table(sheet) {
            return Ok(Some(found));
        }
    }

    Ok(None)
}

fn flat_table(sheet: &Sheet) -> Option<(DataTable, String)> {
    let table = sheet_to_table(sheet);
    revenue_cashflow_range(&table.columns)?;
    Some((table, sheet.name.clone()))
}

/// Read a sheet with its first used row as column headers. Header cells
/// are stringified; gaps in the header row become empty column names.
fn sheet_to_table(sheet: &Sheet) -> DataTable {
    let header_row = (0..sheet.rows)
        .find(|&row| (0..sheet.cols).any(|col| sheet.value(row, col).is_some()))
        .unwrap_or(0);

    let columns = (0..sheet.cols)
        .map(|col| {
            sheet
                .value(header_row, col)
                .map(|v| v.to_string())
                .unwrap_or_default()
        })
        .collect();

    let rows = (header_row + 1..sheet.rows)
        .map(|row| (0..sheet.cols).map(|col| sheet.value(row, col).cloned()).collect())
        .collect();

    DataTable { columns, rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::CellValue;

    fn flat_sheet(name: &str, headers: &[&str]) -> Sheet {
        let mut sheet = Sheet::new(name);
        for (col, header) in headers.iter().enumerate() {
            sheet.insert(0, col as u32, CellValue::Text(header.to_string()));
        }
        for col in 0..headers.len() {
            sheet.insert(1, col as u32, CellValue::Number(col as f64));
        }
        sheet
    }

    #[test]
    fn test_first_matching_sheet_wins() {
        let workbook = Workbook {
            sheets: vec![
                flat_sheet("Notes", &["A", "B"]),
                flat_sheet("Data", &["Company", "Revenue", "Cash Flow"]),
                flat_sheet("Data2", &["Revenue", "Cash Flow"]),
            ],
            ..Default::default()
        };

        let (table, name) = load_flat_sheet(&workbook, None).unwrap().unwrap();
        assert_eq!(name, "Data");
        assert_eq!(table.columns, ["Company", "Revenue", "Cash Flow"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_no_flat_sheet_is_negative_not_fatal() {
        let workbook = Workbook {
            sheets: vec![flat_sheet("Notes", &["A", "B"])],
            ..Default::default()
        };

        assert!(load_flat_sheet(&workbook, None).unwrap().is_none());
    }

    #[test]
    fn test_hint_restricts_search() {
        let workbook = Workbook {
            sheets: vec![
                flat_sheet("Data", &["Revenue", "Cash Flow"]),
                flat_sheet("Other", &["A", "B"]),
            ],
            ..Default::default()
        };

        // Hinted sheet without the range: negative result even though
        // another sheet would match.
        assert!(load_flat_sheet(&workbook, Some("Other")).unwrap().is_none());

        let (_, name) = load_flat_sheet(&workbook, Some("Data")).unwrap().unwrap();
        assert_eq!(name, "Data");
    }

    #[test]
    fn test_unknown_hint_is_fatal() {
        let workbook = Workbook {
            sheets: vec![flat_sheet("Data", &["Revenue", "Cash Flow"])],
            ..Default::default()
        };

        let err = load_flat_sheet(&workbook, Some("Missing")).unwrap_err();
        match err {
            ConvertError::SheetNotFound {
                requested,
                available,
            } => {
                assert_eq!(requested, "Missing");
                assert_eq!(available, vec!["Data".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_headers_below_blank_rows() {
        let mut sheet = Sheet::new("Data");
        // Title rows above the table are blank in the used range
        sheet.insert(2, 0, CellValue::Text("Revenue".to_string()));
        sheet.insert(2, 1, CellValue::Text("Cash Flow".to_string()));
        sheet.insert(3, 0, CellValue::Number(100.0));
        sheet.insert(3, 1, CellValue::Number(20.0));

        let table = sheet_to_table(&sheet);
        assert_eq!(table.columns, ["Revenue", "Cash Flow"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_header_gaps_become_empty_names() {
        let mut sheet = Sheet::new("Data");
        sheet.insert(0, 0, CellValue::Text("Revenue".to_string()));
        sheet.insert(0, 2, CellValue::Text("Cash Flow".to_string()));

        let table = sheet_to_table(&sheet);
        assert_eq!(table.columns, ["Revenue", "", "Cash Flow"]);
    }
}
