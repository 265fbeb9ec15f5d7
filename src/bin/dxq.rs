use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dx_tally::data::{classify, export, loader, matcher};
use dx_tally::error::AnalyzeError;
use dx_tally::render::{ResultsView, TextView};
use dx_tally::state::TOP_N;

/// Headless diagnosis code analyzer.
///
/// Reads the same files as the desktop shell and prints the same reports to
/// stdout.
#[derive(Parser)]
#[command(name = "dxq", version)]
struct Cli {
    /// Dataset file (.xlsx, .csv, or line-delimited text)
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Count records whose code starts with the given code
    Prefix {
        /// Diagnosis code or code prefix, e.g. 8A68.Z
        code: String,
    },
    /// Classify a code range and list the records inside it
    Range {
        /// Low bound, e.g. 1A00
        low: String,
        /// High bound, e.g. 1H0Z
        high: String,
        /// Write the matching rows to a CSV file
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = loader::load_file(&cli.file)?;
    let mut view = TextView::new(io::stdout().lock());

    match cli.command {
        Command::Prefix { code } => {
            let query = code.trim().to_uppercase();
            if query.is_empty() {
                return Err(AnalyzeError::EmptyInput("Please enter a diagnosis code").into());
            }
            let report = matcher::count_by_prefix(&dataset.records, &query);
            view.prefix_report(&dataset.file_name, &report)?;
            view.top_codes(&matcher::top_n(&dataset.records, TOP_N))?;
        }
        Command::Range { low, high, export: out } => {
            let low = low.trim().to_uppercase();
            let high = high.trim().to_uppercase();
            if low.is_empty() || high.is_empty() {
                return Err(AnalyzeError::EmptyInput(
                    "Please enter both range bounds (low and high code)",
                )
                .into());
            }
            let report = classify::analyze_range(&dataset.records, &low, &high);
            view.range_report(&dataset.file_name, &report)?;
            if let Some(path) = out {
                let file = std::fs::File::create(&path)?;
                export::write_csv(&report.matches, file)?;
                println!(
                    "\nWrote {} records to {}",
                    report.matches.len(),
                    path.display()
                );
            }
        }
    }
    Ok(())
}
