//! Step contract consumed by the sequencing engine.

use crate::direction::Direction;
use async_trait::async_trait;

/// Failure reason reported by a step operation.
///
/// Steps run arbitrary embedder code, so the error type is open; the engine
/// only threads it through to the caller.
pub type StepError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result of a single step operation.
pub type StepResult = Result<(), StepError>;

/// A single named, reversible unit of migration work.
///
/// Titles must be unique within a [`crate::set::MigrationSet`]; insertion
/// order defines the canonical sequence, oldest to newest. The engine treats
/// both directions identically and never inspects what an operation does,
/// only whether it succeeded.
#[async_trait]
pub trait Step: Send + Sync {
    /// Stable, unique identifier for this step.
    fn title(&self) -> &str;

    /// Perform the step's forward work.
    async fn up(&self) -> StepResult;

    /// Reverse the step's work.
    async fn down(&self) -> StepResult;

    /// Dispatch to `up` or `down` based on `direction`.
    async fn apply(&self, direction: Direction) -> StepResult {
        match direction {
            Direction::Up => self.up().await,
            Direction::Down => self.down().await,
        }
    }
}
