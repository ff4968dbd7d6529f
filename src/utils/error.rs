//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.
//!
//! Every error here is fatal: the pipeline has no partial-success mode, so
//! the first failure aborts the run with a diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading measurement files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid measurement row: {0}")]
    InvalidRow(String),
}

/// Errors that can occur during aggregation and summarization
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Module {0} contains no function measurements")]
    EmptyModule(String),

    #[error("No modules to summarize")]
    NoModules,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
