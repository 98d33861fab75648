//! Outbound adapters (driven side).

pub mod notifier;
pub mod store;
pub mod storefront;
