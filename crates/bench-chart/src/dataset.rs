// File: crates/bench-chart/src/dataset.rs
// Summary: Loads the benchmark CSV (Implementation, Pixels, Average, ...) into memory.
// Notes:
// - Columns are matched by header name; any other columns (the benchmark
//   writer also emits `Total`) are ignored.
// - Required columns are checked before any row is read so a wrong file
//   fails with the missing column name rather than a row error.
// - Headers and names are taken as written; ` Fast` and `Fast` are two
//   implementations. Numeric cells may carry surrounding spaces.
// - Blank or NA-style numeric cells load as NaN and leave a gap in the line.

use std::collections::HashSet;
use std::io;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::{debug, info, warn};

use crate::error::DataFormatError;

/// Header names the chart cannot do without.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Implementation", "Pixels", "Average"];

/// Cell texts read as a missing number (after trimming spaces).
pub const MISSING_TOKENS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One measurement: an implementation timed on an image of `pixels` pixels.
/// Missing numbers are NaN.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchRow {
    #[serde(rename = "Implementation")]
    pub implementation: String,
    #[serde(rename = "Pixels", deserialize_with = "number_or_missing")]
    pub pixels: f64,
    #[serde(rename = "Average", deserialize_with = "number_or_missing")]
    pub average: f64,
}

fn number_or_missing<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let raw = String::deserialize(deserializer)?;
    let cell = raw.trim();
    if MISSING_TOKENS.contains(&cell) {
        return Ok(f64::NAN);
    }
    cell.parse::<f64>()
        .map_err(|e| serde::de::Error::custom(format!("invalid number {raw:?}: {e}")))
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub rows: Vec<BenchRow>,
}

impl Dataset {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataFormatError> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let rdr = reader_builder()
            .from_path(path)
            .map_err(|source| DataFormatError::Read { origin: origin.clone(), source })?;
        Self::from_csv(rdr, origin)
    }

    /// Parse CSV text from any reader; `origin` names the source in errors.
    pub fn from_reader<R: io::Read>(reader: R, origin: impl Into<String>) -> Result<Self, DataFormatError> {
        Self::from_csv(reader_builder().from_reader(reader), origin.into())
    }

    fn from_csv<R: io::Read>(mut rdr: csv::Reader<R>, origin: String) -> Result<Self, DataFormatError> {
        let headers = rdr
            .headers()
            .map_err(|source| DataFormatError::Read { origin: origin.clone(), source })?
            .clone();
        debug!(origin = %origin, headers = ?headers.iter().collect::<Vec<_>>(), "dataset headers");

        if let Some(column) = REQUIRED_COLUMNS.into_iter().find(|c| !headers.iter().any(|h| h == *c)) {
            return Err(DataFormatError::MissingColumn { origin, column });
        }

        let mut rows = Vec::new();
        let mut missing = 0usize;
        for rec in rdr.deserialize::<BenchRow>() {
            let row = rec.map_err(|source| DataFormatError::Row {
                origin: origin.clone(),
                line: source.position().map(|p| p.line()).unwrap_or(0),
                source,
            })?;
            if row.pixels.is_nan() || row.average.is_nan() {
                missing += 1;
            }
            rows.push(row);
        }
        if missing > 0 {
            warn!(origin = %origin, rows = missing, "rows with missing Pixels/Average are left out of the lines");
        }
        info!(origin = %origin, rows = rows.len(), "loaded dataset");
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct implementation names in order of first appearance.
    pub fn implementations(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .map(|r| r.implementation.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true);
    builder
}
