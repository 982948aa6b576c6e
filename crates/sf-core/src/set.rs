//! Migration set: the ordered step list, the position cursor, and the
//! sequential execution protocol.
//!
//! A set is constructed once per logical migration session, bound to one
//! store. `migrate` loads the persisted position, computes the run-range,
//! executes it strictly one step at a time, and persists the new position
//! only after the entire range succeeds.

use crate::direction::Direction;
use crate::error::{CoreError, CoreResult, MigrateError, MigrateResult};
use crate::notify::{Hook, Notification};
use crate::plan::plan;
use crate::record::PositionRecord;
use crate::step::Step;
use crate::store::PositionStore;
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of a migrate run that completed its full range.
#[derive(Debug, Clone)]
pub struct MigrateSummary {
    /// Short identifier tagging this run in log output.
    pub run_id: String,

    /// Direction the run moved in.
    pub direction: Direction,

    /// Titles of the steps that executed, in execution order.
    pub executed: Vec<String>,

    /// Cursor after the run.
    pub pos: usize,
}

/// An ordered list of reversible steps bound to one storage location.
///
/// A `migrate` call must run to completion before another is issued against
/// the same set; no internal mutual exclusion is provided, so the caller
/// serializes runs. No timeout is imposed on an in-flight step.
pub struct MigrationSet {
    steps: Vec<Box<dyn Step>>,
    pos: usize,
    store: Arc<dyn PositionStore>,
    hooks: Vec<Hook>,
}

impl MigrationSet {
    /// Create an empty set backed by `store`.
    pub fn new(store: Arc<dyn PositionStore>) -> Self {
        Self {
            steps: Vec::new(),
            pos: 0,
            store,
            hooks: Vec::new(),
        }
    }

    /// Append a step. Titles must be unique within the set.
    pub fn push(&mut self, step: Box<dyn Step>) -> CoreResult<()> {
        if self.steps.iter().any(|s| s.title() == step.title()) {
            return Err(CoreError::DuplicateStep {
                name: step.title().to_string(),
            });
        }
        self.steps.push(step);
        Ok(())
    }

    /// Register an observer for lifecycle notifications.
    pub fn subscribe<F>(&mut self, hook: F)
    where
        F: Fn(&Notification) + Send + Sync + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Current cursor: the count of steps considered applied.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Ordered step titles, oldest first.
    pub fn titles(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.title()).collect()
    }

    /// Run forward toward the end of the list, or through `target`
    /// inclusive when given.
    pub async fn up(&mut self, target: Option<&str>) -> MigrateResult<MigrateSummary> {
        self.migrate(Direction::Up, target).await
    }

    /// Run backward toward the start of the list, or back through `target`
    /// inclusive when given.
    pub async fn down(&mut self, target: Option<&str>) -> MigrateResult<MigrateSummary> {
        self.migrate(Direction::Down, target).await
    }

    /// Load the persisted position, compute the run-range for `direction`
    /// and `target`, execute it sequentially, and persist the new position.
    ///
    /// A step failure halts the run immediately and nothing is saved: the
    /// partial advance stays visible on [`MigrationSet::pos`] but becomes
    /// durable only once a later run completes in full, so a re-invoked run
    /// may re-attempt already-completed-but-unsaved steps. Step authors are
    /// expected to write idempotent operations.
    pub async fn migrate(
        &mut self,
        direction: Direction,
        target: Option<&str>,
    ) -> MigrateResult<MigrateSummary> {
        let run_id = Uuid::new_v4().to_string()[..8].to_string();

        self.emit(&Notification::Load);
        let loaded = self.store.load().await.map_err(MigrateError::Load)?;
        if let Some(record) = loaded {
            if !self.is_title_prefix(&record.steps) {
                log::warn!(
                    "[{run_id}] persisted step list does not match the current set; \
                     continuing from pos {}",
                    record.pos
                );
            }
            self.pos = record.pos.min(self.steps.len());
        }

        let titles: Vec<String> = self.steps.iter().map(|s| s.title().to_string()).collect();
        let title_refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        let range = plan(&title_refs, self.pos, direction, target)?;
        log::debug!(
            "[{run_id}] planned {} {direction} step(s) from pos {}",
            range.len(),
            self.pos
        );

        let mut executed = Vec::with_capacity(range.len());
        for &i in &range.indices {
            let title = self.steps[i].title().to_string();
            self.emit(&Notification::Migration {
                step: title.clone(),
                direction,
            });
            log::info!("[{run_id}] {direction} {title}");

            if let Err(source) = self.steps[i].apply(direction).await {
                log::warn!("[{run_id}] {direction} {title} failed: {source}");
                return Err(MigrateError::Step {
                    title,
                    direction,
                    source,
                });
            }

            // Each completed step advances the cursor one unit before the
            // next is attempted; the advance is durable only via the final
            // save.
            match direction {
                Direction::Up => self.pos += 1,
                Direction::Down => self.pos -= 1,
            }
            executed.push(title);
        }
        debug_assert_eq!(self.pos, range.new_pos);

        self.emit(&Notification::Complete);
        let record = PositionRecord::new(titles, self.pos);
        self.store.save(&record).await.map_err(MigrateError::Save)?;
        self.emit(&Notification::Save);
        log::debug!("[{run_id}] position saved at {}", self.pos);

        Ok(MigrateSummary {
            run_id,
            direction,
            executed,
            pos: self.pos,
        })
    }

    fn emit(&self, event: &Notification) {
        for hook in &self.hooks {
            hook(event);
        }
    }

    /// Whether the persisted title list is a prefix-consistent view of the
    /// current step list (new steps appended at the end are expected).
    fn is_title_prefix(&self, persisted: &[String]) -> bool {
        persisted.len() <= self.steps.len()
            && persisted
                .iter()
                .zip(self.steps.iter())
                .all(|(saved, step)| saved == step.title())
    }
}

impl std::fmt::Debug for MigrationSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MigrationSet")
            .field("steps", &self.titles())
            .field("pos", &self.pos)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "set_test.rs"]
mod tests;
