use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser};
use colored::*;
use flatbook_core::{ConvertConfig, Converter, Strategy, reader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flatbook")]
#[command(
    about = "Extract columns from 'Revenue' to 'Cash Flow' (inclusive). Handles both a flat sheet and multi-sheet company workbooks.",
    long_about = None
)]
#[command(version)]
struct Cli {
    /// Path to the workbook to process (e.g. data.xlsx)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Sheet name to read for an already-flat sheet
    #[arg(long, value_name = "SHEET")]
    sheet: Option<String>,

    /// List sheet names and exit
    #[arg(long)]
    list_sheets: bool,

    /// Skip the flat-sheet attempt and always pivot company sheets
    #[arg(long)]
    pivot_only: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output CSV path (defaults to the input path with a .csv extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Nothing to do at all: usage, exit 1
    if cli.input.is_none() && !cli.list_sheets {
        eprintln!("{}", Cli::command().render_help());
        std::process::exit(1);
    }

    if let Err(err) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list_sheets {
        let input = cli
            .input
            .context("--list-sheets requires -i/--input to be provided")?;
        let workbook = reader::read_workbook(&input)?;
        println!("Sheets:");
        for name in workbook.sheet_names() {
            println!(" - {}", name);
        }
        return Ok(());
    }

    let input = cli.input.expect("checked in main");
    if !input.exists() {
        bail!("File '{}' not found", input.display());
    }

    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        ConvertConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        // Try to load default config from current directory if it exists
        let default_config_path = PathBuf::from("flatbook.toml");
        if default_config_path.exists() {
            ConvertConfig::from_file(&default_config_path).with_context(|| {
                format!(
                    "Failed to load config from {}",
                    default_config_path.display()
                )
            })?
        } else {
            ConvertConfig::default()
        }
    };

    if cli.pivot_only {
        config.strategy = Strategy::PivotOnly;
    }

    let converter = Converter::with_config(config);
    let conversion = converter.convert_file(&input, cli.sheet.as_deref(), cli.output.as_deref())?;

    println!("Processed: {}", conversion.source);
    println!(
        "{} {} ({} records)",
        "✓ Wrote CSV:".green().bold(),
        conversion.csv_path.display(),
        conversion.records
    );

    Ok(())
}
