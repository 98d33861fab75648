use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;

use super::journal::Journal;
use crate::domain::Snapshot;
use crate::error::{Error, Result};
use crate::port::SnapshotStore;

/// In-memory snapshot store.
#[derive(Default)]
pub struct MemoryStore {
    snapshot: Mutex<Snapshot>,
    journal: Option<Journal>,
    writes: AtomicUsize,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Reject every write.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn current(&self) -> Snapshot {
        self.snapshot.lock().clone()
    }

    fn write(&self, slot: &mut Snapshot, snapshot: Snapshot) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Store("scripted write failure".into()));
        }
        if let Some(journal) = &self.journal {
            journal.record(format!("save:{}", snapshot.last_total_count));
        }
        *slot = snapshot;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Snapshot {
        self.snapshot.lock().clone()
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let mut slot = self.snapshot.lock();
        self.write(&mut slot, snapshot.clone())
    }

    fn update(&self, apply: &mut dyn FnMut(&mut Snapshot)) -> Result<Snapshot> {
        let mut slot = self.snapshot.lock();
        let mut next = slot.clone();
        apply(&mut next);
        self.write(&mut slot, next.clone())?;
        Ok(next)
    }
}
