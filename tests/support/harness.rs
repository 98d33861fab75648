//! Wave engine wiring over the testkit adapters.

use std::sync::Arc;

use stockwave::application::{CatalogFetcher, Dispatcher, PollLoop, WaveEngine};
use stockwave::domain::{CatalogItem, Destination, Snapshot};
use stockwave::testkit::availability::ScriptedChecker;
use stockwave::testkit::catalog::ScriptedCatalog;
use stockwave::testkit::journal::Journal;
use stockwave::testkit::notifier::RecordingNotifier;
use stockwave::testkit::store::MemoryStore;

pub const DESTINATION: &str = "813210";
pub const MASKED_DESTINATION: &str = "8****0";

pub struct Harness {
    pub engine: WaveEngine,
    pub store: Arc<MemoryStore>,
    pub catalog: Arc<ScriptedCatalog>,
    pub checker: Arc<ScriptedChecker>,
    pub notifier: RecordingNotifier,
    pub journal: Journal,
}

impl Harness {
    pub fn new(prior: Snapshot, catalog: ScriptedCatalog, checker: ScriptedChecker) -> Self {
        Self::with_notifier(prior, catalog, checker, RecordingNotifier::new())
    }

    pub fn with_notifier(
        prior: Snapshot,
        catalog: ScriptedCatalog,
        checker: ScriptedChecker,
        notifier: RecordingNotifier,
    ) -> Self {
        let journal = Journal::new();
        let store = Arc::new(MemoryStore::new(prior).with_journal(journal.clone()));
        let catalog = Arc::new(catalog);
        let checker = Arc::new(checker);
        let notifier = notifier.with_journal(journal.clone());

        let engine = WaveEngine::new(
            CatalogFetcher::new(catalog.clone(), 40, 4),
            checker.clone(),
            store.clone(),
            Dispatcher::new(Arc::new(notifier.clone()), MASKED_DESTINATION),
            Destination::new(DESTINATION),
            8,
        );

        Self {
            engine,
            store,
            catalog,
            checker,
            notifier,
            journal,
        }
    }

    /// Move the engine into a poll loop; the shared handles stay usable.
    pub fn into_poll_loop(self) -> (PollLoop, Arc<MemoryStore>, RecordingNotifier) {
        let poll = PollLoop::new(self.engine, std::time::Duration::from_millis(5));
        (poll, self.store, self.notifier)
    }
}

pub fn items(ids: &[&str]) -> Vec<CatalogItem> {
    ids.iter()
        .map(|id| CatalogItem::new(*id).with_name(format!("Item {id}")))
        .collect()
}

pub fn snapshot(total: u64, ids: &[&str]) -> Snapshot {
    Snapshot::new(total, ids.iter().copied())
}
