//! Storefront HTTP adapters: paged catalog listing and per-item
//! serviceability checks.

pub mod availability;
pub mod catalog;
pub mod client;
pub mod dto;
pub mod parse;
pub mod settings;

pub use availability::StorefrontAvailability;
pub use catalog::StorefrontCatalog;
pub use client::build_http_client;
pub use settings::{AvailabilitySettings, CatalogSettings};
