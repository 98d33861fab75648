//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the remote catalog, the availability service,
//! the notification channel and snapshot storage.

pub mod availability;
pub mod catalog;
pub mod notifier;
pub mod store;
