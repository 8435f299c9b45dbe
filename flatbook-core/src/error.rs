//! Domain errors for the conversion pipeline

use std::path::PathBuf;
use thiserror::Error;

use crate::normalize::normalize;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("sheet '{requested}' not found. Available: {}", .available.join(", "))]
    SheetNotFound {
        requested: String,
        available: Vec<String>,
    },

    #[error(
        "'Revenue' or 'Cash Flow' column not found after processing\nSource: {source_label}\nDetected columns:\n{}",
        render_columns(.columns)
    )]
    RangeNotFound {
        /// Sheet name or pivot description the table came from
        source_label: String,
        columns: Vec<String>,
    },

    #[error(
        "could not build a flat table from '{}': no view headers found (e.g. 2024B/2024F)",
        .path.display()
    )]
    NoViewHeaders { path: PathBuf },
}

fn render_columns(columns: &[String]) -> String {
    columns
        .iter()
        .map(|c| format!(" - '{}'  (normalized: '{}')", c, normalize(c)))
        .collect::<Vec<_>>()
        .join("\n")
}
