//! Per-module statistics over raw function measurements.
//!
//! Reduces each module's row sequence to a fixed set of scalar statistics:
//! average, median, max, min, count, summed total, and in extended mode the
//! top-1% time share and per-phase time shares.

use crate::parser::schema::{ModuleRecords, PhaseTimes, StatsMode};
use crate::utils::config::TOP_SHARE_DIVISOR;
use crate::utils::error::StatsError;
use log::debug;
use std::path::Path;

/// Aggregate statistics for one module
///
/// Write-once: computed from the raw rows and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleStats {
    /// Display name: file basename, truncated at the first `.`
    pub name: String,
    /// Mean per-function validation time
    pub average: f64,
    /// Median per-function validation time
    pub median: f64,
    /// Slowest function
    pub max: f64,
    /// Fastest function
    pub min: f64,
    /// Number of functions in the module
    pub num_funcs: usize,
    /// Summed validation time across all functions
    pub total: f64,
    /// Tail and phase breakdown; present in extended mode only
    pub tail: Option<TailStats>,
}

/// Distributional breakdown of a module's validation time
#[derive(Debug, Clone, PartialEq)]
pub struct TailStats {
    /// Fraction of total time spent in the slowest floor(count/100) functions
    pub top_share: f64,
    /// Fraction of total time spent constructing CFGs
    pub cfg_share: f64,
    /// Fraction of total time spent checking stack safety
    pub stack_share: f64,
    /// Fraction of total time spent checking heap bounds
    pub heap_share: f64,
    /// Fraction of total time spent checking calls
    pub call_share: f64,
}

/// Aggregate every module in the dataset, preserving input order
///
/// **Public** - main entry point for aggregation
///
/// # Errors
/// * `StatsError::EmptyModule` - a module file contained zero rows
pub fn aggregate_dataset(
    dataset: &[ModuleRecords],
    mode: StatsMode,
) -> Result<Vec<ModuleStats>, StatsError> {
    dataset
        .iter()
        .map(|module| aggregate_module(module, mode))
        .collect()
}

/// Reduce one module's rows to its aggregate statistics
pub fn aggregate_module(
    module: &ModuleRecords,
    mode: StatsMode,
) -> Result<ModuleStats, StatsError> {
    let name = module_name(&module.path);

    let times: Vec<f64> = module.records.iter().map(|r| r.total_time()).collect();

    let Some(median_t) = median(&times) else {
        return Err(StatsError::EmptyModule(module.path.display().to_string()));
    };

    let num_funcs = times.len();
    let total: f64 = times.iter().sum();
    let average = total / num_funcs as f64;
    let max = times.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = times.iter().copied().fold(f64::INFINITY, f64::min);

    let tail = match mode {
        StatsMode::Basic => None,
        StatsMode::Extended => Some(tail_stats(module, &times, total)),
    };

    Ok(ModuleStats {
        name,
        average,
        median: median_t,
        max,
        min,
        num_funcs,
        total,
        tail,
    })
}

/// Median by the standard middle-element rule
///
/// Even counts take the arithmetic mean of the two central sorted elements;
/// odd counts take the exact central element. An empty slice has no median.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Top-1% and per-phase time shares for an extended-mode module
fn tail_stats(module: &ModuleRecords, times: &[f64], total: f64) -> TailStats {
    let top_n = times.len() / TOP_SHARE_DIVISOR;

    debug!(
        "top 1% = {} functions out of {} in {}",
        top_n,
        times.len(),
        module.path.display()
    );

    let mut descending = times.to_vec();
    descending.sort_by(|a, b| b.total_cmp(a));
    let top_sum: f64 = descending.iter().take(top_n).sum();

    let phase_sum = module
        .records
        .iter()
        .filter_map(|r| r.phases())
        .fold(PhaseTimes { cfg: 0.0, stack: 0.0, heap: 0.0, call: 0.0 }, |acc, p| {
            PhaseTimes {
                cfg: acc.cfg + p.cfg,
                stack: acc.stack + p.stack,
                heap: acc.heap + p.heap,
                call: acc.call + p.call,
            }
        });

    TailStats {
        top_share: share(top_sum, total),
        cfg_share: share(phase_sum.cfg, total),
        stack_share: share(phase_sum.stack, total),
        heap_share: share(phase_sum.heap, total),
        call_share: share(phase_sum.call, total),
    }
}

/// Guarded ratio: zero when the denominator is zero
fn share(part: f64, total: f64) -> f64 {
    if total > 0.0 {
        part / total
    } else {
        0.0
    }
}

/// Derive a module's display name from its path
///
/// Strips directory components and everything after the first `.` in the
/// file name, so `wasm/spidermonkey.so.json` becomes `spidermonkey`.
fn module_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name
            .to_string_lossy()
            .split('.')
            .next()
            .unwrap_or("")
            .to_string(),
        None => String::new(),
    }
}
