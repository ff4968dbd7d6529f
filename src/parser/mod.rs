//! Measurement parsing and schema definitions.
//!
//! This module handles:
//! - Row layouts for both measurement variants
//! - Loading JSON measurement files into an ordered dataset

pub mod records;
pub mod schema;

// Re-export main types
pub use records::load_dataset;
pub use schema::{Dataset, FunctionRecord, ModuleRecords, PhaseTimes, RowField, StatsMode};
