//! Cross-module summary statistics and histogram layout.
//!
//! Consumes the ordered collection of per-module aggregates and produces:
//! - [`SummaryStats`]: the figures printed in the text report
//! - [`Histogram`]: bin layout and counts for the rendered image
//!
//! Both are plain data so the reporter can be tested without touching the
//! filesystem; rendering and file writing live in the output module.

use super::metrics::{median, ModuleStats, TailStats};
use crate::parser::schema::StatsMode;
use crate::utils::config::{BASIC_BIN_COUNT, HISTOGRAM_BIN_WIDTH_SECS, TAIL_THRESHOLD_SECS};
use crate::utils::error::StatsError;
use log::debug;
use std::fmt::Write;

/// Cross-module figures for the text report
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Number of modules in the dataset
    pub module_count: usize,
    /// Median of the per-module median function times
    pub median_function_time: f64,
    /// Modules containing a function slower than the tail threshold
    pub modules_over_threshold: usize,
    /// Mean tail and phase shares, as percentages; extended mode only
    pub breakdown: Option<BreakdownStats>,
    /// Mean per-module summed validation time
    pub average_total: f64,
    /// Smallest per-module summed validation time
    pub min_total: f64,
    /// Largest per-module summed validation time
    pub max_total: f64,
    /// Median per-module summed validation time
    pub median_total: f64,
    /// Smallest per-module function count
    pub min_funcs: f64,
    /// Largest per-module function count
    pub max_funcs: f64,
    /// Median per-module function count
    pub median_funcs: f64,
}

/// Mean distributional shares across modules, expressed as percentages
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownStats {
    pub top_percent: f64,
    pub cfg_percent: f64,
    pub stack_percent: f64,
    pub heap_percent: f64,
    pub call_percent: f64,
}

/// Histogram of per-module summed validation times
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Smallest observed total; left edge of the first bin
    pub min: f64,
    /// Largest observed total
    pub max: f64,
    /// Width of each bin in seconds
    pub bin_width: f64,
    /// Number of modules falling into each bin
    pub counts: Vec<usize>,
}

/// Round to two decimal places
///
/// Per-module figures are rounded before cross-module reduction, matching
/// the precision the table reports at.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute cross-module summary figures
///
/// **Public** - main entry point for the summary reporter
///
/// # Errors
/// * `StatsError::NoModules` - the aggregate collection is empty
pub fn summarize(stats: &[ModuleStats]) -> Result<SummaryStats, StatsError> {
    let medians: Vec<f64> = stats.iter().map(|s| round2(s.median)).collect();
    let maxes: Vec<f64> = stats.iter().map(|s| round2(s.max)).collect();
    let num_funcs: Vec<f64> = stats.iter().map(|s| s.num_funcs as f64).collect();
    let totals: Vec<f64> = stats.iter().map(|s| round2(s.total)).collect();

    let Some(median_function_time) = median(&medians) else {
        return Err(StatsError::NoModules);
    };
    let Some(median_total) = median(&totals) else {
        return Err(StatsError::NoModules);
    };
    let Some(median_funcs) = median(&num_funcs) else {
        return Err(StatsError::NoModules);
    };

    let modules_over_threshold = maxes.iter().filter(|&&t| t > TAIL_THRESHOLD_SECS).count();

    Ok(SummaryStats {
        module_count: stats.len(),
        median_function_time,
        modules_over_threshold,
        breakdown: breakdown(stats),
        average_total: totals.iter().sum::<f64>() / totals.len() as f64,
        min_total: totals.iter().copied().fold(f64::INFINITY, f64::min),
        max_total: totals.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        median_total,
        min_funcs: num_funcs.iter().copied().fold(f64::INFINITY, f64::min),
        max_funcs: num_funcs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        median_funcs,
    })
}

/// Mean tail and phase shares, when every module carries them
fn breakdown(stats: &[ModuleStats]) -> Option<BreakdownStats> {
    let tails: Vec<&TailStats> = stats.iter().filter_map(|s| s.tail.as_ref()).collect();
    if tails.is_empty() || tails.len() != stats.len() {
        return None;
    }

    let count = tails.len() as f64;
    let mean_percent =
        |f: fn(&TailStats) -> f64| tails.iter().map(|t| f(t)).sum::<f64>() / count * 100.0;

    Some(BreakdownStats {
        top_percent: mean_percent(|t| t.top_share),
        cfg_percent: mean_percent(|t| t.cfg_share),
        stack_percent: mean_percent(|t| t.stack_share),
        heap_percent: mean_percent(|t| t.heap_share),
        call_percent: mean_percent(|t| t.call_share),
    })
}

/// Render the summary as one formatted line per figure
pub fn render_summary(summary: &SummaryStats) -> String {
    let mut out = String::new();

    // write! to a String cannot fail
    let _ = writeln!(out, "Number of modules = {}", summary.module_count);
    let _ = writeln!(
        out,
        "Median function validation time: {}",
        summary.median_function_time
    );
    let _ = writeln!(
        out,
        "Number of modules with a function that took > {}s to validate: {}",
        TAIL_THRESHOLD_SECS, summary.modules_over_threshold
    );

    if let Some(breakdown) = &summary.breakdown {
        let _ = writeln!(
            out,
            "Top 1% of functions account for (on average) {:.2}% of total validation time",
            breakdown.top_percent
        );
        let _ = writeln!(
            out,
            "{:.2}% of validation time spent constructing CFGs",
            breakdown.cfg_percent
        );
        let _ = writeln!(
            out,
            "{:.2}% of validation time spent checking stack safety",
            breakdown.stack_percent
        );
        let _ = writeln!(
            out,
            "{:.2}% of validation time spent checking heap bounds",
            breakdown.heap_percent
        );
        let _ = writeln!(
            out,
            "{:.2}% of validation time spent checking calls",
            breakdown.call_percent
        );
    }

    let _ = writeln!(out, "Average Time = {}", summary.average_total);
    let _ = writeln!(out, "Min Validation Time: {}", summary.min_total);
    let _ = writeln!(out, "Max Validation Time: {}", summary.max_total);
    let _ = writeln!(out, "Median Validation Time = {}", summary.median_total);
    let _ = writeln!(out, "Min Functions: {}", summary.min_funcs);
    let _ = writeln!(out, "Max Functions: {}", summary.max_funcs);
    let _ = write!(out, "Median Functions: {}", summary.median_funcs);

    out
}

/// Bin the per-module summed totals into a histogram
///
/// Extended mode uses a fixed bin width and derives the bin count from the
/// data range; basic mode uses a fixed bin count over the range. A
/// degenerate range still gets one bin.
///
/// # Errors
/// * `StatsError::NoModules` - no totals to bin
pub fn build_histogram(totals: &[f64], mode: StatsMode) -> Result<Histogram, StatsError> {
    if totals.is_empty() {
        return Err(StatsError::NoModules);
    }

    let min = totals.iter().copied().fold(f64::INFINITY, f64::min);
    let max = totals.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let (bin_count, bin_width) = match mode {
        StatsMode::Basic => (BASIC_BIN_COUNT, (max - min) / BASIC_BIN_COUNT as f64),
        StatsMode::Extended => {
            let count = ((max - min) / HISTOGRAM_BIN_WIDTH_SECS).ceil() as usize;
            (count.max(1), HISTOGRAM_BIN_WIDTH_SECS)
        }
    };

    debug!(
        "Histogram: {} bins of width {}s over [{}, {}]",
        bin_count, bin_width, min, max
    );

    let mut counts = vec![0usize; bin_count];
    for &total in totals {
        let index = if bin_width > 0.0 {
            ((total - min) / bin_width) as usize
        } else {
            0
        };
        counts[index.min(bin_count - 1)] += 1;
    }

    Ok(Histogram {
        min,
        max,
        bin_width,
        counts,
    })
}
