//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!                    │  (wave engine, fanout)  │
//!     ┌──────────────┤                         ├──────────────┐
//!     │              └────────────┬────────────┘              │
//!     ▼                           ▼                           ▼
//! ┌──────────┐            ┌─────────────┐              ┌───────────┐
//! │ Catalog  │            │  Snapshot   │              │ Notifier  │
//! │ Adapter  │            │   Store     │              │  Adapter  │
//! └──────────┘            └─────────────┘              └───────────┘
//! ```

pub mod outbound;

pub use outbound::availability::AvailabilityChecker;
pub use outbound::catalog::CatalogSource;
pub use outbound::notifier::{LogNotifier, Notifier, NullNotifier};
pub use outbound::store::SnapshotStore;
