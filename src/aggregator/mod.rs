//! Aggregation of raw measurements into per-module and cross-module statistics.
//!
//! This module transforms loaded measurement rows into:
//! - Per-module aggregate records (average, median, tail shares, ...)
//! - Cross-module summary figures for the text report
//! - Histogram bins for the rendered image

pub mod metrics;
pub mod summary;

// Re-export main types and functions
pub use metrics::{aggregate_dataset, aggregate_module, median, ModuleStats, TailStats};
pub use summary::{
    build_histogram, render_summary, round2, summarize, BreakdownStats, Histogram, SummaryStats,
};
