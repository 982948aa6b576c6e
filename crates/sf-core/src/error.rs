//! Error types for sf-core

use crate::direction::Direction;
use crate::step::StepError;
use thiserror::Error;

/// Core error type for Stepflow
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Named target step does not exist in the set
    #[error("[E001] Unknown migration step: {name}")]
    UnknownStep { name: String },

    /// E002: Two steps share a title
    #[error("[E002] Duplicate migration step: {name}")]
    DuplicateStep { name: String },

    /// E003: Direction string was neither "up" nor "down"
    #[error("[E003] Invalid direction: {value}")]
    InvalidDirection { value: String },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors reported by position-store backends.
#[derive(Error, Debug)]
pub enum StoreError {
    /// S001: Could not open or reach the backing store
    #[error("[S001] Store connection failed: {0}")]
    Connection(String),

    /// S002: Statement or query against the store failed
    #[error("[S002] Store query failed: {0}")]
    Query(String),

    /// S003: A record exists but cannot be decoded
    #[error("[S003] Stored record is corrupt: {0}")]
    Corrupt(String),

    /// S004: Filesystem error
    #[error("[S004] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// S005: JSON serialization/deserialization error
    #[error("[S005] JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// S006: Store configuration could not be parsed
    #[error("[S006] Invalid store config: {0}")]
    Config(String),
}

/// Result type alias for [`StoreError`].
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures surfaced by a single migrate run.
///
/// Each variant keeps the originating cause; nothing is wrapped in a way
/// that loses it.
#[derive(Error, Debug)]
pub enum MigrateError {
    /// R001: Loading the persisted position failed (missing record is not
    /// an error and never produces this variant)
    #[error("[R001] Failed to load migration position: {0}")]
    Load(#[source] StoreError),

    /// R002: Persisting the new position after a successful run failed
    #[error("[R002] Failed to save migration position: {0}")]
    Save(#[source] StoreError),

    /// R003: A step reported failure; the run halted at this step
    #[error("[R003] Step '{title}' failed during {direction}: {source}")]
    Step {
        title: String,
        direction: Direction,
        #[source]
        source: StepError,
    },

    /// Precondition violation, reported before any step runs
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for [`MigrateError`].
pub type MigrateResult<T> = Result<T, MigrateError>;
