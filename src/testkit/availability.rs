use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{AvailabilityResult, Destination};
use crate::port::AvailabilityChecker;

/// Availability checker with scripted per-item results.
///
/// Unscripted items resolve unknown.
#[derive(Default)]
pub struct ScriptedChecker {
    results: HashMap<String, AvailabilityResult>,
    panics: HashSet<String>,
    calls: AtomicUsize,
}

impl ScriptedChecker {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, id: &str, result: AvailabilityResult) -> Self {
        self.results.insert(id.to_string(), result);
        self
    }

    #[must_use]
    pub fn available(self, id: &str) -> Self {
        self.with(id, AvailabilityResult::available(Some(true)))
    }

    #[must_use]
    pub fn unavailable(self, id: &str) -> Self {
        self.with(id, AvailabilityResult::unavailable())
    }

    /// Make the check for `id` panic.
    #[must_use]
    pub fn panicking(mut self, id: &str) -> Self {
        self.panics.insert(id.to_string());
        self
    }

    /// Number of checks performed so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AvailabilityChecker for ScriptedChecker {
    async fn check(&self, item_id: &str, _destination: &Destination) -> AvailabilityResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panics.contains(item_id) {
            panic!("scripted availability panic for {item_id}");
        }
        self.results.get(item_id).copied().unwrap_or_default()
    }
}
