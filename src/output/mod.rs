//! Output formatting and writers.
//!
//! This module handles presenting aggregated data:
//! - LaTeX-style results tables
//! - SVG histogram rendering
//! - SVG file writing

pub mod histogram;
pub mod svg;
pub mod table;

// Re-export main functions
pub use histogram::{render_histogram, HistogramConfig};
pub use svg::write_svg;
pub use table::{render_table, TableStyle};
