//! Measurement-row schema definitions.
//!
//! Input files are JSON arrays of arrays, one inner array per verified
//! function. Two row layouts exist, selected by [`StatsMode`]:
//! - basic:    `[id, time, blocks, ...]`
//! - extended: `[id, _, cfg, stack, heap, call, ...]`

use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;

use crate::utils::config::{BASIC_MIN_ARITY, EXTENDED_MIN_ARITY};

/// Selected measurement-row layout and statistics set
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsMode {
    /// Three-field rows; summary without tail or phase breakdown
    Basic,
    /// Six-field rows with per-phase durations; full breakdown
    Extended,
}

impl StatsMode {
    /// Minimum number of fields a row must carry in this mode
    pub fn min_arity(&self) -> usize {
        match self {
            StatsMode::Basic => BASIC_MIN_ARITY,
            StatsMode::Extended => EXTENDED_MIN_ARITY,
        }
    }
}

/// One field of a raw measurement row
///
/// The identifier field may be a string or a number depending on which
/// pipeline produced the file, so rows are deserialized loosely and the
/// numeric fields validated afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RowField {
    Number(f64),
    Text(String),
    Bool(bool),
    Null,
}

impl RowField {
    /// The field's numeric value, if it is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RowField::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Per-phase validation durations for one function, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTimes {
    /// Control-flow-graph construction
    pub cfg: f64,
    /// Stack safety check
    pub stack: f64,
    /// Heap bounds check
    pub heap: f64,
    /// Call target check
    pub call: f64,
}

impl PhaseTimes {
    /// Total validation time for the function
    pub fn total(&self) -> f64 {
        self.cfg + self.stack + self.heap + self.call
    }
}

/// Validated measurement for a single function
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionRecord {
    /// Basic-layout row: elapsed time plus a basic-block count
    ///
    /// The block count is carried through from the input but no active
    /// statistic reads it.
    Basic { time: f64, blocks: f64 },
    /// Extended-layout row: four phase durations
    Extended { phases: PhaseTimes },
}

impl FunctionRecord {
    /// The function's total validation time
    pub fn total_time(&self) -> f64 {
        match self {
            FunctionRecord::Basic { time, .. } => *time,
            FunctionRecord::Extended { phases } => phases.total(),
        }
    }

    /// Phase durations, when the row carries them
    pub fn phases(&self) -> Option<&PhaseTimes> {
        match self {
            FunctionRecord::Basic { .. } => None,
            FunctionRecord::Extended { phases } => Some(phases),
        }
    }
}

/// All measurements for one input file (one verified module)
#[derive(Debug, Clone)]
pub struct ModuleRecords {
    /// Path the measurements were loaded from
    pub path: PathBuf,
    /// Rows in file order
    pub records: Vec<FunctionRecord>,
}

/// Ordered collection of per-module measurements, in CLI argument order
pub type Dataset = Vec<ModuleRecords>;
