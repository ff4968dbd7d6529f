//! Measurement file loading.
//!
//! Parses each input file as a JSON array of measurement rows and validates
//! the numeric fields for the selected row layout. Any unreadable or
//! malformed file aborts the whole run; there is no partial-dataset
//! recovery.

use super::schema::{Dataset, FunctionRecord, ModuleRecords, PhaseTimes, RowField, StatsMode};
use crate::utils::config::{
    BASIC_BLOCKS_INDEX, BASIC_TIME_INDEX, EXTENDED_FIRST_PHASE_INDEX,
};
use crate::utils::error::LoadError;
use log::debug;
use std::fs;
use std::path::Path;

/// Load a dataset from a list of input files
///
/// **Public** - main entry point for loading
///
/// # Arguments
/// * `paths` - Input file paths, one per module; output order follows this
/// * `mode` - Which row layout to validate against
///
/// # Errors
/// * `LoadError::ReadFailed` - a file is missing or unreadable
/// * `LoadError::InvalidJson` - a file is not a JSON array of arrays
/// * `LoadError::InvalidRow` - a row is too short or has a bad duration field
pub fn load_dataset(
    paths: &[impl AsRef<Path>],
    mode: StatsMode,
) -> Result<Dataset, LoadError> {
    let mut dataset = Dataset::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let records = load_module(path, mode)?;

        debug!("Loaded {} rows from {}", records.len(), path.display());

        dataset.push(ModuleRecords {
            path: path.to_path_buf(),
            records,
        });
    }

    Ok(dataset)
}

/// Load and validate one module's measurement file
fn load_module(path: &Path, mode: StatsMode) -> Result<Vec<FunctionRecord>, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let rows: Vec<Vec<RowField>> =
        serde_json::from_str(&raw).map_err(|source| LoadError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    rows.iter()
        .enumerate()
        .map(|(index, row)| record_from_row(row, mode, path, index))
        .collect()
}

/// Validate a raw row into a [`FunctionRecord`]
fn record_from_row(
    row: &[RowField],
    mode: StatsMode,
    path: &Path,
    index: usize,
) -> Result<FunctionRecord, LoadError> {
    if row.len() < mode.min_arity() {
        return Err(LoadError::InvalidRow(format!(
            "{} row {}: {} fields, expected at least {}",
            path.display(),
            index,
            row.len(),
            mode.min_arity()
        )));
    }

    match mode {
        StatsMode::Basic => Ok(FunctionRecord::Basic {
            time: duration_field(row, BASIC_TIME_INDEX, path, index)?,
            blocks: duration_field(row, BASIC_BLOCKS_INDEX, path, index)?,
        }),
        StatsMode::Extended => {
            let base = EXTENDED_FIRST_PHASE_INDEX;
            Ok(FunctionRecord::Extended {
                phases: PhaseTimes {
                    cfg: duration_field(row, base, path, index)?,
                    stack: duration_field(row, base + 1, path, index)?,
                    heap: duration_field(row, base + 2, path, index)?,
                    call: duration_field(row, base + 3, path, index)?,
                },
            })
        }
    }
}

/// Extract a duration field, requiring a non-negative finite number
fn duration_field(
    row: &[RowField],
    field: usize,
    path: &Path,
    index: usize,
) -> Result<f64, LoadError> {
    let value = row.get(field).and_then(RowField::as_number);

    match value {
        Some(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(LoadError::InvalidRow(format!(
            "{} row {} field {}: expected a non-negative finite number",
            path.display(),
            index,
            field
        ))),
    }
}
