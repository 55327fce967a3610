use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{MapperError, Result};
use crate::models::{Area, Route, RouteRecord};

/// Default directory holding the per-state dataset files
pub const DEFAULT_DATA_DIR: &str = "all_routes";

/// Extension of the dataset files
const DATASET_EXTENSION: &str = "jsonlines";

/// Areas and flattened routes for one state.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub areas: Vec<Area>,
    pub routes: Vec<Route>,
}

pub struct DatasetLoader {
    data_dir: PathBuf,
}

impl DatasetLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `<data_dir>/<state>-<kind>.jsonlines`. The state code is not checked;
    /// an unknown code just names a file that doesn't exist.
    pub fn dataset_path(&self, state: &str, kind: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}-{}.{}", state, kind, DATASET_EXTENSION))
    }

    fn load<T: DeserializeOwned>(&self, state: &str, kind: &str) -> Result<Vec<T>> {
        let path = self.dataset_path(state, kind);
        let file = File::open(&path).map_err(|source| MapperError::DatasetRead {
            path: path.clone(),
            source,
        })?;

        let records = parse_jsonlines(BufReader::new(file), &path)?;
        debug!(path = %path.display(), count = records.len(), "Loaded dataset");
        Ok(records)
    }

    pub fn load_areas(&self, state: &str) -> Result<Vec<Area>> {
        self.load(state, "areas")
    }

    pub fn load_routes(&self, state: &str) -> Result<Vec<Route>> {
        let records: Vec<RouteRecord> = self.load(state, "routes")?;
        Ok(records.into_iter().map(Route::from).collect())
    }

    /// Load both files for a state. Either one missing fails the whole load.
    pub fn load_state(&self, state: &str) -> Result<Dataset> {
        Ok(Dataset {
            areas: self.load_areas(state)?,
            routes: self.load_routes(state)?,
        })
    }
}

/// Parse newline-delimited JSON, one record per line. Blank lines are skipped.
/// `path` is only used for error reporting.
pub fn parse_jsonlines<T: DeserializeOwned>(reader: impl BufRead, path: &Path) -> Result<Vec<T>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| MapperError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let record = serde_json::from_str(&line).map_err(|source| {
            debug!(
                path = %path.display(),
                line = index + 1,
                content = %MapperError::line_preview(&line),
                "Unparseable dataset line"
            );
            MapperError::DatasetParse {
                path: path.to_path_buf(),
                line: index + 1,
                source,
            }
        })?;
        records.push(record);
    }

    Ok(records)
}

// ============================================================================
// Tests
// ============================================================================
