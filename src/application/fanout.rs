//! Bounded-concurrency fan-out with per-unit failure isolation.
//!
//! A [`Fanout`] runs one unit of async work per input with at most
//! `max_concurrency` units in flight, and returns once every unit has
//! finished. A unit that panics yields `None` for its input; its siblings
//! keep running. All units are driven inside the `run_all` call, so nothing
//! outlives a fan-out and nothing leaks from one cycle into the next.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::stream::{self, StreamExt};
use futures_util::FutureExt;
use tracing::warn;

/// One finished unit, paired with the input it was started for.
#[derive(Debug)]
pub struct Resolved<'a, T, R> {
    pub item: &'a T,
    /// `None` when the unit panicked.
    pub outcome: Option<R>,
}

/// Bounded worker pool, constructed fresh for each fan-out.
#[derive(Debug, Clone, Copy)]
pub struct Fanout {
    max_concurrency: usize,
}

impl Fanout {
    /// Create a fan-out with the given cap (clamped to at least 1).
    #[must_use]
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            max_concurrency: max_concurrency.max(1),
        }
    }

    #[must_use]
    pub fn max_concurrency(&self) -> usize {
        self.max_concurrency
    }

    /// Run `work` for every item and wait for all of them.
    ///
    /// Results come back in completion order, not input order.
    pub async fn run_all<'a, T, R, F, Fut>(&self, items: &'a [T], work: F) -> Vec<Resolved<'a, T, R>>
    where
        F: Fn(&'a T) -> Fut,
        Fut: Future<Output = R> + 'a,
    {
        let resolved: Vec<Resolved<'a, T, R>> = stream::iter(items)
            .map(|item| {
                let unit = AssertUnwindSafe(work(item)).catch_unwind();
                async move {
                    Resolved {
                        item,
                        outcome: unit.await.ok(),
                    }
                }
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        let panicked = resolved.iter().filter(|r| r.outcome.is_none()).count();
        if panicked > 0 {
            warn!(panicked, total = resolved.len(), "Fan-out units panicked");
        }

        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn never_exceeds_concurrency_cap() {
        let in_flight = AtomicUsize::new(0);
        let peak = AtomicUsize::new(0);
        let items: Vec<u32> = (0..25).collect();

        let results = Fanout::new(4)
            .run_all(&items, |n| {
                let in_flight = &in_flight;
                let peak = &peak;
                async move {
                    let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(2)).await;
                    in_flight.fetch_sub(1, Ordering::SeqCst);
                    *n * 2
                }
            })
            .await;

        assert_eq!(results.len(), 25);
        assert!(peak.load(Ordering::SeqCst) <= 4);
        assert!(results.iter().all(|r| r.outcome == Some(*r.item * 2)));
    }

    #[tokio::test]
    async fn panicking_unit_does_not_abort_siblings() {
        let items = vec!["ok-1", "boom", "ok-2"];

        let results = Fanout::new(2)
            .run_all(&items, |name| async move {
                if *name == "boom" {
                    panic!("unit failure");
                }
                name.len()
            })
            .await;

        assert_eq!(results.len(), 3);
        for resolved in &results {
            if *resolved.item == "boom" {
                assert!(resolved.outcome.is_none());
            } else {
                assert_eq!(resolved.outcome, Some(4));
            }
        }
    }

    #[tokio::test]
    async fn empty_input_completes_immediately() {
        let items: Vec<u8> = Vec::new();
        let results = Fanout::new(8).run_all(&items, |b| async move { *b }).await;
        assert!(results.is_empty());
    }

    #[test]
    fn zero_cap_is_clamped() {
        assert_eq!(Fanout::new(0).max_concurrency(), 1);
    }
}
