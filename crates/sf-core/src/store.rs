//! Trait-based abstraction for position storage.
//!
//! This trait decouples the sequencing engine from the concrete store,
//! allowing different backends (database file, JSON file, in-memory) to hold
//! the persisted `{steps, pos}` record.

use crate::error::StoreResult;
use crate::record::PositionRecord;
use async_trait::async_trait;

/// Durable storage for a [`PositionRecord`].
///
/// Implementations own connection lifecycle entirely. The engine performs
/// exactly one `load` and at most one `save` per migrate call and never
/// holds a connection open across calls.
#[async_trait]
pub trait PositionStore: Send + Sync {
    /// Load the current record, or `Ok(None)` when nothing has been saved
    /// yet. "No record yet" is a distinguished outcome, not an error.
    async fn load(&self) -> StoreResult<Option<PositionRecord>>;

    /// Overwrite the record for this session (upsert semantics).
    ///
    /// Must accept a record describing zero applied steps.
    async fn save(&self, record: &PositionRecord) -> StoreResult<()>;
}
