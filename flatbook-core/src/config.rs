//! Configuration for the conversion pipeline

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    /// Month written into every pivoted record. Company sheets carry no
    /// month column, so the reporting cadence is configured here.
    #[serde(default = "default_month")]
    pub month: String,
    /// Which pipeline stages run
    #[serde(default)]
    pub strategy: Strategy,
}

/// Table-building strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Try an already-flat sheet first, pivot company sheets on failure
    #[default]
    FlatFirst,
    /// Always pivot company sheets
    PivotOnly,
}

impl ConvertConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ConvertConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            month: default_month(),
            strategy: Strategy::default(),
        }
    }
}

fn default_month() -> String {
    "December".to_string()
}
