//! Persisted migration position record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable snapshot of one migration session: the ordered step titles and
/// the count of steps considered applied.
///
/// Absence of a record is represented as `None` by the store contract and is
/// never an error; a fresh session behaves as `{steps: [], pos: 0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Ordered step titles, oldest first.
    pub steps: Vec<String>,

    /// Number of applied steps, counted from the start of `steps`.
    pub pos: usize,

    /// When this record was written.
    pub updated_at: DateTime<Utc>,
}

impl PositionRecord {
    /// Create a record stamped with the current time.
    pub fn new(steps: Vec<String>, pos: usize) -> Self {
        Self {
            steps,
            pos,
            updated_at: Utc::now(),
        }
    }
}
