//! flatbook-core: flatten financial workbooks to Revenue..Cash Flow CSV
//!
//! Two workbook shapes are supported: a sheet that already has flat
//! headers covering the Revenue..Cash Flow range, and multi-sheet company
//! workbooks that need pivoting from metric rows and view-code columns
//! into one record per (company, view). Either way the resulting table is
//! trimmed to the Revenue..Cash Flow window and written as CSV.

pub mod config;
pub mod error;
pub mod flat;
pub mod headers;
pub mod normalize;
pub mod pivot;
pub mod reader;
pub mod table;
pub mod writer;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use config::{ConvertConfig, Strategy};
pub use error::ConvertError;
pub use reader::{CellValue, Sheet, Workbook};
pub use table::DataTable;

/// Where the converted table came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    /// An already-flat sheet, by name
    Sheet(String),
    /// Pivoted from the company sheets
    Pivot,
}

impl std::fmt::Display for TableSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableSource::Sheet(name) => write!(f, "{}", name),
            TableSource::Pivot => write!(f, "(combined from all company sheets)"),
        }
    }
}

/// Result of a completed conversion
#[derive(Debug)]
pub struct Conversion {
    pub csv_path: PathBuf,
    pub source: TableSource,
    pub records: usize,
}

/// Main conversion interface
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create a converter with default configuration
    pub fn new() -> Self {
        Self::with_config(ConvertConfig::default())
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: ConvertConfig) -> Self {
        Self { config }
    }

    /// Convert a workbook file and write the CSV next to it (or to
    /// `output` when given). `sheet_hint` forces the plain-loader stage to
    /// a specific sheet.
    pub fn convert_file(
        &self,
        path: &Path,
        sheet_hint: Option<&str>,
        output: Option<&Path>,
    ) -> Result<Conversion> {
        let workbook = reader::read_workbook(path)?;
        let (table, source) = self.build_table(&workbook, sheet_hint)?;
        let sliced = table.slice_to_range(&source.to_string())?;

        let csv_path = match output {
            Some(p) => p.to_path_buf(),
            None => path.with_extension("csv"),
        };
        writer::write_csv(&sliced, &csv_path)?;

        Ok(Conversion {
            csv_path,
            source,
            records: sliced.rows.len(),
        })
    }

    /// Build the flat table for a workbook without slicing or writing:
    /// plain loader first unless configured pivot-only, pivot builder as
    /// the fallback.
    pub fn build_table(
        &self,
        workbook: &Workbook,
        sheet_hint: Option<&str>,
    ) -> Result<(DataTable, TableSource)> {
        if self.config.strategy == Strategy::FlatFirst {
            if let Some((table, sheet_name)) = flat::load_flat_sheet(workbook, sheet_hint)? {
                return Ok((table, TableSource::Sheet(sheet_name)));
            }
        }

        let table = pivot::build_table(workbook, &self.config.month)?;
        Ok((table, TableSource::Pivot))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
