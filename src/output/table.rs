//! LaTeX-style results table formatter.
//!
//! Renders the per-module aggregates as one row per statistic and one
//! column per module, for direct inclusion in a tabular document. Purely
//! deterministic string assembly; no validation of the result.

use crate::aggregator::metrics::ModuleStats;
use clap::ValueEnum;

/// Row separator style for the rendered table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableStyle {
    /// Rows separated by bare newlines
    Plain,
    /// An `\hline` between every pair of consecutive rows
    Ruled,
}

/// Render the aggregate statistics as a LaTeX-style table
///
/// **Public** - main entry point for table output
///
/// Row order is fixed: names, average, median, max, min, function count,
/// total. Columns follow dataset order; numeric cells are formatted to two
/// decimal places; every row is terminated with `\\`.
pub fn render_table(stats: &[ModuleStats], style: TableStyle) -> String {
    let rows = [
        format_row("", stats.iter().map(|s| s.name.clone())),
        format_row(
            "Average Function Validation Time (s)",
            stats.iter().map(|s| format!("{:.2}", s.average)),
        ),
        format_row(
            "Median Function Validation Time (s)",
            stats.iter().map(|s| format!("{:.2}", s.median)),
        ),
        format_row(
            "Max Function Validation Time (s)",
            stats.iter().map(|s| format!("{:.2}", s.max)),
        ),
        format_row(
            "Min Function Validation Time (s)",
            stats.iter().map(|s| format!("{:.2}", s.min)),
        ),
        format_row(
            "\\# Functions in Module",
            stats.iter().map(|s| s.num_funcs.to_string()),
        ),
        format_row(
            "Total Validation Time (s)",
            stats.iter().map(|s| format!("{:.2}", s.total)),
        ),
    ];

    let separator = match style {
        TableStyle::Plain => "\n",
        TableStyle::Ruled => "\n\\hline\n",
    };

    rows.join(separator) + "\n"
}

/// Join a label cell and one value cell per module into a terminated row
fn format_row(label: &str, cells: impl Iterator<Item = String>) -> String {
    let mut columns = vec![label.to_string()];
    columns.extend(cells);
    format!("{}\\\\", columns.join(" & "))
}
