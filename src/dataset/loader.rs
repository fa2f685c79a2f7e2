//! Dataset loader
//!
//! Searches an ordered list of candidate paths and parses the first one that
//! exists. Missing dataset is FATAL; there is no fallback.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::observability::{log_event_with_fields, Event, ObservationScope};

use super::errors::{DatasetError, DatasetResult};
use super::table::Table;

/// Default file name of the processed dataset
pub const DATASET_FILE_NAME: &str = "hyperlocal_economy_processed.csv";

/// Default candidate locations, relative to the base directory
pub fn default_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(DATASET_FILE_NAME),
        Path::new("data").join(DATASET_FILE_NAME),
    ]
}

/// Loads the dataset from the first candidate that exists
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    base_dir: PathBuf,
    candidates: Vec<PathBuf>,
}

impl DatasetLoader {
    /// Loader over the default candidates under `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_candidates(base_dir, default_candidates())
    }

    /// Loader over explicit candidates. Relative candidates resolve against
    /// `base_dir`; absolute ones are used as-is.
    pub fn with_candidates(base_dir: impl Into<PathBuf>, candidates: Vec<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            candidates,
        }
    }

    /// Candidate paths in search order
    pub fn resolved_candidates(&self) -> Vec<PathBuf> {
        self.candidates
            .iter()
            .map(|c| self.base_dir.join(c))
            .collect()
    }

    /// Returns the first existing candidate, if any
    pub fn locate(&self) -> Option<PathBuf> {
        self.resolved_candidates().into_iter().find(|p| p.is_file())
    }

    /// Loads and validates the dataset
    pub fn load(&self) -> DatasetResult<Table> {
        let scope = ObservationScope::new("DATASET_LOAD");

        let path = match self.locate() {
            Some(p) => p,
            None => {
                let err = DatasetError::not_found(&self.resolved_candidates());
                log_event_with_fields(Event::DatasetNotFound, &[("reason", err.message())]);
                scope.fail_fatal(err.message());
                return Err(err);
            }
        };

        let path_str = path.display().to_string();
        let result = File::open(&path)
            .map_err(|e| {
                DatasetError::malformed(None, format!("Failed to open {}: {}", path_str, e))
            })
            .and_then(|file| Table::from_csv_reader(BufReader::new(file)));

        match result {
            Ok(table) => {
                let rows = table.len().to_string();
                scope.complete_with_fields(&[("path", path_str.as_str()), ("rows", rows.as_str())]);
                Ok(table)
            }
            Err(err) => {
                scope.fail_fatal(err.message());
                Err(err)
            }
        }
    }
}
