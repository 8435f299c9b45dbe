//! Pivot builder for company-per-sheet workbooks
//!
//! Each sheet is one company: a header row carries view codes ("2024B",
//! "2025F") and the rows beneath it carry metric labels with values under
//! the view columns. The builder turns that layout into one flat record
//! per (company, view).

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::error::ConvertError;
use crate::normalize::normalize;
use crate::reader::{CellValue, Sheet, Workbook};
use crate::table::DataTable;

/// Identifier columns, always first in the output, in this order
pub const ID_COLUMNS: [&str; 5] = ["Company Name", "Year", "Month", "Version", "View"];

/// Metric labels containing this normalized substring never reach the output
const EXCLUDED_LABEL: &str = "includes depreciation";

fn view_code_pattern() -> &'static Regex {
    static VIEW_CODE: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; the year is later parsed from the first 4 bytes
    VIEW_CODE.get_or_init(|| Regex::new(r"^[0-9]{4}[ABF]$").unwrap())
}

/// A forecast vintage token: 4-digit year plus an Actual/Budget/Forecast
/// letter
#[derive(Debug, Clone, PartialEq)]
pub struct ViewCode {
    pub token: String,
    pub year: i32,
    pub version: char,
}

impl ViewCode {
    /// Parse a token like "2024B" after trimming surrounding whitespace.
    /// Only full-cell matches count; "FY2024B Budget" is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim();
        if !view_code_pattern().is_match(token) {
            return None;
        }
        Some(Self {
            token: token.to_string(),
            year: token[..4].parse().ok()?,
            version: token.chars().last()?,
        })
    }
}

/// Locate the view header row: the first row, top to bottom, with at least
/// one full-cell view-code match. Returns the row index and the
/// column-to-code mapping, or `None` if the sheet has no such row.
pub fn detect_view_header(sheet: &Sheet) -> Option<(u32, BTreeMap<u32, ViewCode>)> {
    for row in 0..sheet.rows {
        let mut view_cols = BTreeMap::new();
        for col in 0..sheet.cols {
            if let Some(text) = sheet.text(row, col) {
                if let Some(code) = ViewCode::parse(text) {
                    view_cols.insert(col, code);
                }
            }
        }
        if !view_cols.is_empty() {
            return Some((row, view_cols));
        }
    }
    None
}

/// Collect (row index, label) pairs for metric rows strictly below the
/// header row, in row order.
///
/// The label comes from column 1 when it holds non-empty text, column 0
/// otherwise. Labeled rows qualify only when at least one cell under a
/// view-code column is numeric; section headers and spacer rows drop out
/// here.
pub fn collect_metric_rows(
    sheet: &Sheet,
    header_row: u32,
    view_cols: &BTreeMap<u32, ViewCode>,
) -> Vec<(u32, String)> {
    let mut metric_rows = Vec::new();

    for row in header_row + 1..sheet.rows {
        let Some(label) = row_label(sheet, row) else {
            continue;
        };
        let has_numeric = view_cols.keys().any(|&col| sheet.number(row, col).is_some());
        if has_numeric {
            metric_rows.push((row, label));
        }
    }

    metric_rows
}

fn row_label(sheet: &Sheet, row: u32) -> Option<String> {
    for col in [1, 0] {
        if let Some(text) = sheet.text(row, col) {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// One pivoted output record before column assembly
struct FlatRecord {
    company: String,
    year: i32,
    month: String,
    version: char,
    view: String,
    /// Metric label -> value, in row order
    metrics: Vec<(String, f64)>,
}

/// Pivot every company sheet of the workbook into a single flat table.
///
/// Sheets without a view header row are skipped; cover and notes sheets
/// are expected. Records whose candidate cells are all non-numeric are
/// discarded. Zero records across the whole workbook is a structural
/// failure.
pub fn build_table(workbook: &Workbook, month: &str) -> Result<DataTable, ConvertError> {
    let mut records = Vec::new();

    for sheet in &workbook.sheets {
        let Some((header_row, view_cols)) = detect_view_header(sheet) else {
            continue;
        };
        let metric_rows = collect_metric_rows(sheet, header_row, &view_cols);

        for (&col, code) in &view_cols {
            let mut metrics = Vec::new();
            for (row, label) in &metric_rows {
                if normalize(label).contains(EXCLUDED_LABEL) {
                    continue;
                }
                if let Some(value) = sheet.number(*row, col) {
                    metrics.push((label.clone(), value));
                }
            }
            // An all-blank record contributes nothing
            if metrics.is_empty() {
                continue;
            }
            records.push(FlatRecord {
                company: sheet.name.clone(),
                year: code.year,
                month: month.to_string(),
                version: code.version,
                view: code.token.clone(),
                metrics,
            });
        }
    }

    if records.is_empty() {
        return Err(ConvertError::NoViewHeaders {
            path: workbook.path.clone(),
        });
    }

    Ok(assemble(records))
}

/// Assemble the flat table: identifier columns fixed first, metric columns
/// in first-seen order across the full record set. Records without a value
/// for a metric column get a missing field, never a zero.
fn assemble(records: Vec<FlatRecord>) -> DataTable {
    let mut metric_columns: Vec<String> = Vec::new();
    for record in &records {
        for (label, _) in &record.metrics {
            if !metric_columns.iter().any(|c| c == label) {
                metric_columns.push(label.clone());
            }
        }
    }

    let mut columns: Vec<String> = ID_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.extend(metric_columns.iter().cloned());

    let rows = records
        .into_iter()
        .map(|record| {
            let mut row: Vec<Option<CellValue>> = vec![
                Some(CellValue::Text(record.company)),
                Some(CellValue::Number(record.year as f64)),
                Some(CellValue::Text(record.month)),
                Some(CellValue::Text(record.version.to_string())),
                Some(CellValue::Text(record.view)),
            ];
            for label in &metric_columns {
                // Last occurrence wins when a sheet repeats a label
                let value = record
                    .metrics
                    .iter()
                    .rev()
                    .find(|(l, _)| l == label)
                    .map(|(_, v)| CellValue::Number(*v));
                row.push(value);
            }
            row
        })
        .collect();

    DataTable { columns, rows }
}
