//! Transport-agnostic domain types.

mod availability;
mod catalog;
mod destination;
mod item;
mod notification;
mod retry;
mod snapshot;

pub use availability::{Availability, AvailabilityResult};
pub use catalog::{CatalogListing, CatalogPage};
pub use destination::{mask, Destination};
pub use item::CatalogItem;
pub use notification::Notification;
pub use retry::RetryPolicy;
pub use snapshot::Snapshot;
