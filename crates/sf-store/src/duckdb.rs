//! DuckDB-backed position store.
//!
//! Opens a fresh connection per `load`/`save` and drops it before returning,
//! so no connection is ever held open across engine calls.

use crate::ddl::ensure_schema;
use async_trait::async_trait;
use chrono::DateTime;
use duckdb::Connection;
use sf_core::{PositionRecord, PositionStore, StoreError, StoreResult};
use std::path::{Path, PathBuf};

/// Position store backed by a DuckDB database file.
///
/// The file (and the `sf_meta.position` table) is created lazily on first
/// use.
pub struct DuckDbStore {
    path: PathBuf,
}

impl DuckDbStore {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn open(&self) -> StoreResult<Connection> {
        let conn = Connection::open(&self.path)
            .map_err(|e| StoreError::Connection(format!("{e}: {}", self.path.display())))?;
        ensure_schema(&conn)?;
        log::debug!("opened position store at {}", self.path.display());
        Ok(conn)
    }

    fn load_sync(&self) -> StoreResult<Option<PositionRecord>> {
        let conn = self.open()?;
        let row = conn.query_row(
            "SELECT steps, pos, updated_at FROM sf_meta.position",
            [],
            |row| {
                let steps: String = row.get(0)?;
                let pos: i64 = row.get(1)?;
                let updated_at: String = row.get(2)?;
                Ok((steps, pos, updated_at))
            },
        );

        let (steps_json, pos, updated_at) = match row {
            Ok(values) => values,
            Err(duckdb::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Query(e.to_string())),
        };

        let steps: Vec<String> = serde_json::from_str(&steps_json)
            .map_err(|e| StoreError::Corrupt(format!("steps column: {e}")))?;
        let pos = usize::try_from(pos)
            .map_err(|_| StoreError::Corrupt(format!("negative pos: {pos}")))?;
        let updated_at = DateTime::parse_from_rfc3339(&updated_at)
            .map_err(|e| StoreError::Corrupt(format!("updated_at column: {e}")))?
            .to_utc();

        Ok(Some(PositionRecord {
            steps,
            pos,
            updated_at,
        }))
    }

    fn save_sync(&self, record: &PositionRecord) -> StoreResult<()> {
        let conn = self.open()?;
        let steps_json = serde_json::to_string(&record.steps)?;

        conn.execute_batch("BEGIN TRANSACTION")
            .map_err(|e| StoreError::Query(format!("BEGIN failed: {e}")))?;

        let result = conn
            .execute("DELETE FROM sf_meta.position", [])
            .and_then(|_| {
                conn.execute(
                    "INSERT INTO sf_meta.position (steps, pos, updated_at) VALUES (?, ?, ?)",
                    duckdb::params![
                        steps_json,
                        record.pos as i64,
                        record.updated_at.to_rfc3339()
                    ],
                )
            });

        match result {
            Ok(_) => conn.execute_batch("COMMIT").map_err(|e| {
                let _ = conn.execute_batch("ROLLBACK");
                StoreError::Query(format!("COMMIT failed: {e}"))
            }),
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK");
                Err(StoreError::Query(e.to_string()))
            }
        }
    }
}

#[async_trait]
impl PositionStore for DuckDbStore {
    async fn load(&self) -> StoreResult<Option<PositionRecord>> {
        self.load_sync()
    }

    async fn save(&self, record: &PositionRecord) -> StoreResult<()> {
        self.save_sync(record)
    }
}
