//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`catalog`] - `ScriptedCatalog`, a page-by-page scripted catalog source.
//! - [`availability`] - `ScriptedChecker` with per-item results.
//! - [`notifier`] - `RecordingNotifier` capturing every delivery.
//! - [`store`] - `MemoryStore`, an in-memory snapshot store.
//! - [`journal`] - shared event log for asserting cross-component ordering.

pub mod availability;
pub mod catalog;
pub mod journal;
pub mod notifier;
pub mod store;
