//! Veritime CLI
//!
//! Aggregates per-function validation timing measurements and emits a
//! summary report, a results table, and a histogram image.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use veritime::commands::{execute_report, validate_args, ReportArgs};
use veritime::output::TableStyle;
use veritime::parser::StatsMode;
use veritime::utils::config::DEFAULT_HISTOGRAM_PATH;

/// Veritime - validation timing statistics and reporting
#[derive(Parser, Debug)]
#[command(name = "veritime")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Input JSON timing files, one per module
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Measurement-row layout and statistics set
    #[arg(short, long, value_enum, default_value = "extended")]
    mode: StatsMode,

    /// Output path for the histogram SVG
    #[arg(long, default_value = DEFAULT_HISTOGRAM_PATH)]
    histogram: PathBuf,

    /// Row separator style for the results table
    #[arg(long, value_enum, default_value = "plain")]
    table_style: TableStyle,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ReportArgs {
        files: cli.files,
        mode: cli.mode,
        histogram_path: cli.histogram,
        table_style: cli.table_style,
    };

    // Validate args first
    validate_args(&args)?;

    // Execute report
    execute_report(args)?;

    Ok(())
}
