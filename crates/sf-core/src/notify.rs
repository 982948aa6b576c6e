//! Lifecycle notifications observable by embedders.
//!
//! Hooks are registered explicitly and invoked synchronously at fixed points
//! during a run. They exist for logging and UI; none affects control flow.

use crate::direction::Direction;

/// A lifecycle event emitted by [`crate::set::MigrationSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The persisted position is about to be loaded.
    Load,
    /// A step is about to run in the given direction.
    Migration { step: String, direction: Direction },
    /// Every step in the computed range completed.
    Complete,
    /// The new position was persisted.
    Save,
}

/// Observer callback registered via `MigrationSet::subscribe`.
pub type Hook = Box<dyn Fn(&Notification) + Send + Sync>;
