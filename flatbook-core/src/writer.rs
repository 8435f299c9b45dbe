//! CSV serialization of flat tables

use anyhow::{Context, Result};
use std::path::Path;

use crate::table::DataTable;

/// Write a table as UTF-8, comma-delimited CSV: one header line, one line
/// per record, missing values as empty fields, no index column.
pub fn write_csv(table: &DataTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

    writer.write_record(&table.columns)?;

    for row in &table.rows {
        let mut record: Vec<String> = row
            .iter()
            .map(|field| field.as_ref().map(|v| v.to_string()).unwrap_or_default())
            .collect();
        // Ragged source rows still produce full-width CSV lines
        record.resize(table.columns.len(), String::new());
        writer.write_record(&record)?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed writing CSV '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::CellValue;

    #[test]
    fn test_write_csv_renders_missing_as_empty() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out.csv");

        let table = DataTable {
            columns: ["Company", "Revenue", "Cash Flow"].map(String::from).to_vec(),
            rows: vec![
                vec![
                    Some(CellValue::Text("Acme".to_string())),
                    Some(CellValue::Number(100.0)),
                    None,
                ],
                vec![Some(CellValue::Text("Beta".to_string()))],
            ],
        };

        write_csv(&table, &path)?;

        let written = std::fs::read_to_string(&path)?;
        assert_eq!(written, "Company,Revenue,Cash Flow\nAcme,100,\nBeta,,\n");
        Ok(())
    }
}
