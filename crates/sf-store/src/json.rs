//! JSON-file position store with atomic writes.

use async_trait::async_trait;
use sf_core::{PositionRecord, PositionStore, StoreError, StoreResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Position store backed by a single pretty-printed JSON file.
///
/// Saves use the write-to-temp-then-rename pattern to prevent corruption.
/// The temp file includes the PID to avoid races from concurrent processes.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

#[async_trait]
impl PositionStore for JsonFileStore {
    async fn load(&self) -> StoreResult<Option<PositionRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let record = serde_json::from_str(&content)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))?;
        Ok(Some(record))
    }

    async fn save(&self, record: &PositionRecord) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self
            .path
            .with_extension(format!("json.{}.tmp", std::process::id()));
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&temp_path, &json)?;
        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Io(e)
        })?;
        Ok(())
    }
}
