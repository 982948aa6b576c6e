//! Store configuration: which backend holds the position record and where.
//!
//! Configuration is always passed in explicitly; there is no process-wide
//! connection string or implicit global state.

use crate::duckdb::DuckDbStore;
use crate::json::JsonFileStore;
use serde::{Deserialize, Serialize};
use sf_core::{PositionStore, StoreError, StoreResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Backend selector for the position store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// DuckDB database file.
    #[default]
    DuckDb,
    /// Plain JSON file with atomic writes.
    Json,
}

/// Position-store configuration, typically parsed from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Which backend to use.
    #[serde(default)]
    pub backend: StoreBackend,

    /// Backend file path.
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new(backend: StoreBackend, path: &Path) -> Self {
        Self {
            backend,
            path: path.to_path_buf(),
        }
    }

    /// Parse a YAML configuration file.
    pub fn from_file(path: &Path) -> StoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| StoreError::Config(format!("{}: {e}", path.display())))
    }

    /// Construct the configured backend.
    pub fn open(&self) -> Arc<dyn PositionStore> {
        match self.backend {
            StoreBackend::DuckDb => Arc::new(DuckDbStore::new(&self.path)),
            StoreBackend::Json => Arc::new(JsonFileStore::new(&self.path)),
        }
    }
}
