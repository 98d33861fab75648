//! Snapshot persistence port.

use crate::domain::Snapshot;
use crate::error::Result;

/// Durable storage for the detection snapshot.
///
/// Every operation runs under the store's own lock for its duration only.
/// Callers must not expect the lock to span network work.
pub trait SnapshotStore: Send + Sync {
    /// Read the current snapshot.
    ///
    /// Returns the zero snapshot when nothing was stored yet or the stored
    /// state is unreadable.
    fn load(&self) -> Snapshot;

    /// Replace the stored snapshot. Readers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot could not be written.
    fn save(&self, snapshot: &Snapshot) -> Result<()>;

    /// Atomically load, modify and save. Returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns an error if the modified snapshot could not be written.
    fn update(&self, apply: &mut dyn FnMut(&mut Snapshot)) -> Result<Snapshot>;
}
