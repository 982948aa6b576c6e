//! Test support: a recording step and an in-memory position store.
//!
//! Used by sf-core unit tests and by store integration suites downstream.

use crate::direction::Direction;
use crate::error::{StoreError, StoreResult};
use crate::record::PositionRecord;
use crate::step::{Step, StepResult};
use crate::store::PositionStore;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Shared journal of step invocations, in execution order.
pub type Journal = Arc<Mutex<Vec<String>>>;

/// Create an empty journal.
pub fn journal() -> Journal {
    Arc::new(Mutex::new(Vec::new()))
}

/// Snapshot the journal contents.
pub fn journal_entries(journal: &Journal) -> Vec<String> {
    journal.lock().unwrap().clone()
}

/// A step that records every invocation as `"title:direction"` and can be
/// configured to fail in one direction.
pub struct RecordingStep {
    title: String,
    journal: Journal,
    fail_on: Option<Direction>,
}

impl RecordingStep {
    pub fn new(title: &str, journal: &Journal) -> Self {
        Self {
            title: title.to_string(),
            journal: Arc::clone(journal),
            fail_on: None,
        }
    }

    /// A step that fails whenever it runs in `direction`. The invocation is
    /// still journaled before the failure is reported.
    pub fn failing(title: &str, journal: &Journal, direction: Direction) -> Self {
        Self {
            fail_on: Some(direction),
            ..Self::new(title, journal)
        }
    }

    fn run(&self, direction: Direction) -> StepResult {
        self.journal
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.title, direction));
        if self.fail_on == Some(direction) {
            return Err(format!("step '{}' refused to run {}", self.title, direction).into());
        }
        Ok(())
    }
}

#[async_trait]
impl Step for RecordingStep {
    fn title(&self) -> &str {
        &self.title
    }

    async fn up(&self) -> StepResult {
        self.run(Direction::Up)
    }

    async fn down(&self) -> StepResult {
        self.run(Direction::Down)
    }
}

/// In-memory position store with injectable failures and a save counter.
#[derive(Default)]
pub struct MemoryStore {
    record: Mutex<Option<PositionRecord>>,
    fail_load: Mutex<bool>,
    fail_save: Mutex<bool>,
    saves: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `record`.
    pub fn with_record(record: PositionRecord) -> Self {
        let store = Self::default();
        *store.record.lock().unwrap() = Some(record);
        store
    }

    /// Make subsequent `load` calls fail with a connection error.
    pub fn set_fail_load(&self, fail: bool) {
        *self.fail_load.lock().unwrap() = fail;
    }

    /// Make subsequent `save` calls fail with a query error.
    pub fn set_fail_save(&self, fail: bool) {
        *self.fail_save.lock().unwrap() = fail;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    /// Snapshot of the stored record, if any.
    pub fn record(&self) -> Option<PositionRecord> {
        self.record.lock().unwrap().clone()
    }
}

#[async_trait]
impl PositionStore for MemoryStore {
    async fn load(&self) -> StoreResult<Option<PositionRecord>> {
        if *self.fail_load.lock().unwrap() {
            return Err(StoreError::Connection(
                "memory store: injected load failure".to_string(),
            ));
        }
        Ok(self.record.lock().unwrap().clone())
    }

    async fn save(&self, record: &PositionRecord) -> StoreResult<()> {
        if *self.fail_save.lock().unwrap() {
            return Err(StoreError::Query(
                "memory store: injected save failure".to_string(),
            ));
        }
        *self.record.lock().unwrap() = Some(record.clone());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
