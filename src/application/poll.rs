//! The long-lived poll loop.

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::FutureExt;
use tracing::{error, info};

use super::wave::{CycleOutcome, WaveEngine};
use crate::domain::Notification;

/// Drives the wave engine on a fixed interval, one cycle at a time.
///
/// A failed or panicking cycle is logged and the loop moves on to the next
/// tick; the process is never brought down by a cycle.
pub struct PollLoop {
    engine: WaveEngine,
    interval: Duration,
    announce_startup: bool,
}

impl PollLoop {
    pub fn new(engine: WaveEngine, interval: Duration) -> Self {
        Self {
            engine,
            interval,
            announce_startup: true,
        }
    }

    /// Enable or disable the boot message.
    #[must_use]
    pub fn announce_startup(mut self, enabled: bool) -> Self {
        self.announce_startup = enabled;
        self
    }

    #[must_use]
    pub fn engine(&self) -> &WaveEngine {
        &self.engine
    }

    /// Run one isolated cycle starting from the stored snapshot.
    ///
    /// Returns `None` when the cycle failed or panicked.
    pub async fn tick(&self) -> Option<CycleOutcome> {
        let prior = self.engine.store().load();
        let cycle = AssertUnwindSafe(self.engine.run_cycle(&prior)).catch_unwind();

        match cycle.await {
            Ok(Ok(outcome)) => Some(outcome),
            Ok(Err(err)) => {
                error!(error = %err, "Poll cycle failed");
                None
            }
            Err(_) => {
                error!("Poll cycle panicked");
                None
            }
        }
    }

    /// Send the watcher-online message.
    pub async fn announce(&self) -> bool {
        let dispatcher = self.engine.dispatcher();
        let online = Notification::WatcherOnline {
            destination: dispatcher.destination().to_string(),
        };
        dispatcher.deliver(&online).await
    }

    /// Poll until `shutdown` resolves.
    ///
    /// The sleep between cycles starts after a cycle finishes, so cycles
    /// never overlap. Shutdown is observed between cycles and during the
    /// sleep; an in-progress cycle is allowed to finish.
    pub async fn run_until<S>(self, shutdown: S)
    where
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        if self.announce_startup {
            let sent = self.announce().await;
            info!(sent, "Startup message");
        }

        info!(interval_secs = self.interval.as_secs(), "Poll loop started");

        loop {
            self.tick().await;

            tokio::select! {
                () = &mut shutdown => {
                    info!("Poll loop shutting down");
                    break;
                }
                () = tokio::time::sleep(self.interval) => {}
            }
        }
    }
}
