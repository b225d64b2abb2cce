// File: crates/bench-chart/src/error.rs
// Summary: Error taxonomy for a single chart run (usage, data format, render).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::cli::USAGE;

/// Wrong number (or shape) of command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError;

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(USAGE)
    }
}

impl std::error::Error for UsageError {}

/// The input table could not be read or lacks what the chart needs.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("failed to read '{origin}'")]
    Read {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("'{origin}' has no '{column}' column")]
    MissingColumn { origin: String, column: &'static str },

    #[error("'{origin}' line {line}: malformed row")]
    Row {
        origin: String,
        line: u64,
        #[source]
        source: csv::Error,
    },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    DataFormat(#[from] DataFormatError),

    #[error("failed to render chart to '{}'", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: chart_core::ChartError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
