use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

/// Header names of the columns the dashboard needs. Any further columns in
/// the file are ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

// ---------------------------------------------------------------------------
// LoadError – fatal startup failures
// ---------------------------------------------------------------------------

/// Failure to turn the input file into a usable dataset. Always fatal: the
/// UI must not come up without data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("data row {row}: {source}")]
    Malformed {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("data row {row}: outcome class must be 0 or 1, got {value}")]
    OutcomeClass { row: usize, value: i64 },

    #[error("dataset contains no launch records")]
    Empty,
}

// ---------------------------------------------------------------------------
// CSV loading
// ---------------------------------------------------------------------------

/// One raw CSV row, keyed by the original header names.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Launch Site")]
    site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass: f64,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
}

/// Load the launch records from a comma-delimited file with a header row.
///
/// Runs exactly once at startup; the returned dataset (records, distinct
/// sites/categories, payload bounds) is immutable for the process lifetime.
/// An empty file (header only) is rejected with [`LoadError::Empty`] rather
/// than defining the payload bounds as 0/0.
pub fn load_csv(path: &Path) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader.headers().map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = i + 1;
        let raw = result.map_err(|source| LoadError::Malformed { row, source })?;
        let outcome = Outcome::from_class(raw.class).ok_or(LoadError::OutcomeClass {
            row,
            value: raw.class,
        })?;
        records.push(LaunchRecord {
            site: raw.site,
            payload_mass: raw.payload_mass,
            outcome,
            booster_category: raw.booster_category,
        });
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(LaunchDataset::from_records(records))
}
