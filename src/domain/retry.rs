//! Bounded retry with a fixed backoff.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tracing::warn;

/// Retry policy shared by outbound delivery call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Never below 1.
    pub max_attempts: u32,
    /// Sleep between a failed attempt and the next one.
    pub backoff: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// Single attempt, no sleep.
    #[must_use]
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Run `attempt` until it succeeds or attempts run out.
    ///
    /// Returns `false` after the last failure instead of an error so callers
    /// can keep processing.
    pub async fn run<F, Fut, E>(&self, operation: &str, mut attempt: F) -> bool
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<(), E>>,
        E: Display,
    {
        let max_attempts = self.max_attempts.max(1);
        for n in 1..=max_attempts {
            match attempt(n).await {
                Ok(()) => return true,
                Err(err) => {
                    warn!(
                        operation,
                        attempt = n,
                        max_attempts,
                        error = %err,
                        "Delivery attempt failed"
                    );
                }
            }
            if n < max_attempts && !self.backoff.is_zero() {
                tokio::time::sleep(self.backoff).await;
            }
        }
        warn!(operation, max_attempts, "Delivery failed after all retries");
        false
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(400))
    }
}
