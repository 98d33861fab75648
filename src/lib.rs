//! Stockwave - catalog stock-wave watcher.
//!
//! Polls a storefront catalog, detects stock waves (a strict increase in the
//! reported total), checks every listed item for availability at a single
//! destination, and announces each item that became available since the
//! previous cycle.
//!
//! # Modules
//!
//! - [`domain`] - Items, availability, snapshots, notifications
//! - [`port`] - Catalog, availability, notifier and store traits
//! - [`application`] - Wave engine, bounded fan-out, poll loop, rendering
//! - [`adapter`] - Storefront HTTP, Telegram, JSON file store, CLI
//! - [`infrastructure`] - Configuration and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram delivery via `teloxide`
//! - `testkit` - Scripted adapters for integration tests
//!
//! # Example
//!
//! ```no_run
//! use stockwave::infrastructure::bootstrap;
//! use stockwave::infrastructure::config::Config;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::load("config.toml")?;
//! let poll = bootstrap::build_poll_loop(&config, true);
//! let outcome = poll.tick().await;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
