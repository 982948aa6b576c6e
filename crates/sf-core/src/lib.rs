//! sf-core - Migration sequencing engine for Stepflow
//!
//! This crate provides the ordered list of reversible migration steps, the
//! persisted position cursor, the run-range planner, and the state machine
//! that replays steps forward or backward to a requested target position.

pub mod direction;
pub mod error;
pub mod notify;
pub mod plan;
pub mod record;
pub mod set;
pub mod step;
pub mod store;
pub mod testing;

pub use direction::Direction;
pub use error::{CoreError, CoreResult, MigrateError, MigrateResult, StoreError, StoreResult};
pub use notify::{Hook, Notification};
pub use plan::{plan, RunRange};
pub use record::PositionRecord;
pub use set::{MigrateSummary, MigrationSet};
pub use step::{Step, StepError, StepResult};
pub use store::PositionStore;
