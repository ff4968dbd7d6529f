//! Report command implementation.
//!
//! The report command:
//! 1. Loads measurement files into a dataset
//! 2. Aggregates per-module statistics
//! 3. Prints the cross-module summary
//! 4. Renders and writes the histogram
//! 5. Prints the results table

use crate::aggregator::{aggregate_dataset, build_histogram, render_summary, round2, summarize};
use crate::output::{render_histogram, render_table, write_svg, HistogramConfig, TableStyle};
use crate::parser::{load_dataset, StatsMode};
use crate::utils::config::DEFAULT_HISTOGRAM_PATH;
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Input measurement files, one per module
    pub files: Vec<PathBuf>,

    /// Which row layout and statistics set to compute
    pub mode: StatsMode,

    /// Output path for the histogram SVG
    pub histogram_path: PathBuf,

    /// Row separator style for the results table
    pub table_style: TableStyle,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            mode: StatsMode::Extended,
            histogram_path: PathBuf::from(DEFAULT_HISTOGRAM_PATH),
            table_style: TableStyle::Plain,
        }
    }
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.files.is_empty() {
        anyhow::bail!("At least one input file is required");
    }

    if args.histogram_path.as_os_str().is_empty() {
        anyhow::bail!("Histogram output path cannot be empty");
    }

    Ok(())
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Measurement file read or parse errors
/// * Aggregation errors (empty module, empty dataset)
/// * Histogram file write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting report over {} input file(s)", args.files.len());

    // Step 1/5: Load measurement files
    info!("Step 1/5: Loading measurement files...");
    let dataset = load_dataset(&args.files, args.mode).context("Failed to load timing data")?;

    debug!(
        "Loaded {} modules, {} rows total",
        dataset.len(),
        dataset.iter().map(|m| m.records.len()).sum::<usize>()
    );

    // Step 2/5: Aggregate per-module statistics
    info!("Step 2/5: Aggregating per-module statistics...");
    let stats =
        aggregate_dataset(&dataset, args.mode).context("Failed to aggregate timing data")?;

    // Step 3/5: Cross-module summary
    info!("Step 3/5: Computing cross-module summary...");
    let summary = summarize(&stats).context("Failed to summarize modules")?;

    println!("{}", render_summary(&summary));

    // Step 4/5: Histogram
    info!("Step 4/5: Rendering histogram...");
    let totals: Vec<f64> = stats.iter().map(|s| round2(s.total)).collect();
    let histogram =
        build_histogram(&totals, args.mode).context("Failed to bin module totals")?;

    let config =
        HistogramConfig::new().with_minor_ticks(matches!(args.mode, StatsMode::Extended));
    let svg = render_histogram(&histogram, Some(&config));

    write_svg(&svg, &args.histogram_path).context("Failed to write histogram SVG")?;

    info!("✓ Histogram written to: {}", args.histogram_path.display());

    // Step 5/5: Results table
    info!("Step 5/5: Formatting results table...");
    println!("{}", render_table(&stats, args.table_style));

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}
