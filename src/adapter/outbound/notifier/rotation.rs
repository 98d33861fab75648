//! Round-robin selection over a fixed set of credentials.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out entries in round-robin order.
///
/// The counter is owned by the rotation itself, so each notifier instance
/// rotates independently and can be tested in isolation.
#[derive(Debug)]
pub struct TokenRotation<T> {
    entries: Vec<T>,
    next: AtomicUsize,
}

impl<T> TokenRotation<T> {
    /// Create a rotation. Returns `None` when `entries` is empty.
    pub fn new(entries: Vec<T>) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self {
            entries,
            next: AtomicUsize::new(0),
        })
    }

    /// The next entry in turn.
    pub fn next(&self) -> &T {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.entries.len();
        &self.entries[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
