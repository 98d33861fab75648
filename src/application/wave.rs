//! Wave detection and snapshot diffing for one polling cycle.
//!
//! # Cycle
//!
//! ```text
//! fetch catalog ──► compare totals ──► equal? ──► idle (no checks, no writes)
//!                        │
//!                        ├─ increased: persist total, announce stock update
//!                        └─ decreased: continue quietly
//!                        ▼
//!               fan out availability checks
//!                        ▼
//!          diff Available ids against the prior set
//!                        ▼
//!         persist replacement snapshot, announce new items
//! ```
//!
//! The total is persisted before the stock update goes out, so a crash or a
//! repeated cycle never announces the same wave twice. The replacement
//! snapshot is persisted before item alerts go out for the same reason.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::catalog::CatalogFetcher;
use super::dispatch::Dispatcher;
use super::fanout::Fanout;
use crate::domain::{Availability, AvailabilityResult, Destination, Notification, Snapshot};
use crate::error::Result;
use crate::port::{AvailabilityChecker, SnapshotStore};

/// What a cycle decided about the catalog total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleKind {
    /// Total unchanged; nothing was checked or written.
    Idle { total: u64 },
    /// Total strictly increased.
    Wave { previous: u64, current: u64 },
    /// Total decreased; snapshot refreshed without an aggregate alert.
    Shrink { previous: u64, current: u64 },
}

impl CycleKind {
    #[must_use]
    pub fn is_wave(&self) -> bool {
        matches!(self, Self::Wave { .. })
    }
}

/// Per-cycle counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub fetched: usize,
    pub failed_pages: usize,
    pub checked: usize,
    pub available: usize,
    pub unavailable: usize,
    pub unknown: usize,
    pub announced: usize,
    pub delivery_failures: usize,
}

/// Result of one cycle.
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub kind: CycleKind,
    /// The snapshot the next cycle should start from.
    pub snapshot: Snapshot,
    /// Notifications produced, aggregate first, then items in resolution order.
    pub notifications: Vec<Notification>,
    pub stats: CycleStats,
}

/// Orchestrates one polling cycle.
pub struct WaveEngine {
    catalog: CatalogFetcher,
    checker: Arc<dyn AvailabilityChecker>,
    store: Arc<dyn SnapshotStore>,
    dispatcher: Dispatcher,
    destination: Destination,
    check_concurrency: usize,
}

impl WaveEngine {
    pub fn new(
        catalog: CatalogFetcher,
        checker: Arc<dyn AvailabilityChecker>,
        store: Arc<dyn SnapshotStore>,
        dispatcher: Dispatcher,
        destination: Destination,
        check_concurrency: usize,
    ) -> Self {
        Self {
            catalog,
            checker,
            store,
            dispatcher,
            destination,
            check_concurrency,
        }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn SnapshotStore> {
        &self.store
    }

    #[must_use]
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Run one cycle against `prior`.
    ///
    /// # Errors
    ///
    /// Fails without touching the store when the first catalog page cannot
    /// be fetched. Fails when a snapshot write fails; on a wave, a failed
    /// total write happens before any notification is sent.
    pub async fn run_cycle(&self, prior: &Snapshot) -> Result<CycleOutcome> {
        let started = Instant::now();
        let listing = self.catalog.fetch_all().await?;
        let total = listing.total_count;
        let previous = prior.last_total_count;

        info!(
            total,
            previous,
            fetched = listing.items.len(),
            failed_pages = listing.failed_pages,
            "Catalog polled"
        );

        let mut stats = CycleStats {
            fetched: listing.items.len(),
            failed_pages: listing.failed_pages,
            ..CycleStats::default()
        };
        let mut notifications = Vec::new();

        let kind = match total.cmp(&previous) {
            std::cmp::Ordering::Equal => {
                debug!(total, "Total unchanged, skipping checks");
                return Ok(CycleOutcome {
                    kind: CycleKind::Idle { total },
                    snapshot: prior.clone(),
                    notifications,
                    stats,
                });
            }
            std::cmp::Ordering::Greater => {
                self.store
                    .update(&mut |snapshot: &mut Snapshot| snapshot.last_total_count = total)?;
                info!(
                    previous,
                    current = total,
                    delta = total - previous,
                    "Stock wave detected, total persisted"
                );

                let aggregate = Notification::StockIncreased {
                    previous,
                    current: total,
                };
                if !self.dispatcher.deliver(&aggregate).await {
                    stats.delivery_failures += 1;
                }
                notifications.push(aggregate);
                CycleKind::Wave {
                    previous,
                    current: total,
                }
            }
            std::cmp::Ordering::Less => {
                info!(previous, current = total, "Total decreased, refreshing snapshot");
                CycleKind::Shrink {
                    previous,
                    current: total,
                }
            }
        };

        let items: Vec<_> = listing
            .items
            .into_iter()
            .filter(|item| item.is_checkable())
            .collect();

        let checker = &self.checker;
        let destination = &self.destination;
        let resolved = Fanout::new(self.check_concurrency)
            .run_all(&items, |item| checker.check(&item.id, destination))
            .await;
        stats.checked = resolved.len();

        let mut available = BTreeSet::new();
        let mut announced = HashSet::new();
        let mut alerts = Vec::new();

        for unit in resolved {
            let item = unit.item;
            let result = unit.outcome.unwrap_or_else(|| {
                warn!(item_id = %item.id, "Availability check panicked, treating as unknown");
                AvailabilityResult::unknown()
            });

            match result.availability {
                Availability::Available => {
                    stats.available += 1;
                    available.insert(item.id.clone());
                    if !prior.is_known_available(&item.id) && announced.insert(item.id.as_str()) {
                        alerts.push(Notification::ItemAvailable {
                            item: item.clone(),
                            cod_eligible: result.cod_eligible,
                        });
                    }
                }
                Availability::Unknown => {
                    stats.unknown += 1;
                    debug!(item_id = %item.id, "Availability unknown, not announcing");
                }
                Availability::Unavailable => {
                    stats.unavailable += 1;
                }
            }
        }

        let next = prior.succeeded_by(total, available);
        self.store.save(&next)?;
        info!(
            total,
            available = next.available_identifiers.len(),
            new = alerts.len(),
            unknown = stats.unknown,
            "Snapshot persisted"
        );

        for alert in &alerts {
            if !self.dispatcher.deliver(alert).await {
                stats.delivery_failures += 1;
            }
        }
        stats.announced = alerts.len();
        notifications.extend(alerts);

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            checked = stats.checked,
            announced = stats.announced,
            "Cycle complete"
        );

        Ok(CycleOutcome {
            kind,
            snapshot: next,
            notifications,
            stats,
        })
    }
}
