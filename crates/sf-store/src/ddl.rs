//! DDL for the position schema.

use duckdb::Connection;
use sf_core::{StoreError, StoreResult};

/// Single-row position table. `steps` holds the ordered titles as JSON and
/// `updated_at` an RFC 3339 timestamp.
const POSITION_DDL: &str = "CREATE SCHEMA IF NOT EXISTS sf_meta;
     CREATE TABLE IF NOT EXISTS sf_meta.position (
         steps      TEXT NOT NULL,
         pos        BIGINT NOT NULL,
         updated_at TEXT NOT NULL
     );";

/// Ensure the `sf_meta` schema and position table exist.
pub(crate) fn ensure_schema(conn: &Connection) -> StoreResult<()> {
    conn.execute_batch(POSITION_DDL)
        .map_err(|e| StoreError::Query(format!("failed to create position table: {e}")))
}
