//! Availability checker port.

use async_trait::async_trait;

use crate::domain::{AvailabilityResult, Destination};

/// Per-item deliverability lookup.
///
/// Implementations never fail: every network, access or parse problem is
/// reported as [`AvailabilityResult::unknown`].
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    async fn check(&self, item_id: &str, destination: &Destination) -> AvailabilityResult;
}
