//! Storefront catalog and availability configuration.

use serde::{Deserialize, Serialize};

/// Placeholder for the page index in [`CatalogSettings::listing_url`].
pub const PAGE_PLACEHOLDER: &str = "{page}";
/// Placeholder for the page size in [`CatalogSettings::listing_url`].
pub const PAGE_SIZE_PLACEHOLDER: &str = "{page_size}";
/// Placeholder for the item identifier in [`AvailabilitySettings::check_url`].
pub const ITEM_PLACEHOLDER: &str = "{item}";
/// Placeholder for the destination code in [`AvailabilitySettings::check_url`].
pub const DESTINATION_PLACEHOLDER: &str = "{destination}";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Linux; Android 10; K) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/141.0.0.0 Mobile Safari/537.36";

/// Catalog listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Storefront origin; relative item URLs are joined onto it.
    #[serde(default)]
    pub base_url: String,
    /// Listing endpoint template with `{page}` and `{page_size}`.
    #[serde(default)]
    pub listing_url: String,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Concurrent page fetches after the first page.
    #[serde(default = "default_page_concurrency")]
    pub page_concurrency: usize,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// User agent sent with every storefront request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

const fn default_page_size() -> u32 {
    40
}

const fn default_page_concurrency() -> usize {
    12
}

const fn default_request_timeout_secs() -> u64 {
    20
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            listing_url: String::new(),
            page_size: default_page_size(),
            page_concurrency: default_page_concurrency(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl CatalogSettings {
    /// Listing URL for one page.
    #[must_use]
    pub fn page_url(&self, page: u32, page_size: u32) -> String {
        self.listing_url
            .replace(PAGE_PLACEHOLDER, &page.to_string())
            .replace(PAGE_SIZE_PLACEHOLDER, &page_size.to_string())
    }
}

/// Availability (serviceability) check configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySettings {
    /// Check endpoint template with `{item}` and `{destination}`.
    #[serde(default)]
    pub check_url: String,
    /// Destination code; overridden by `STOCKWAVE_DESTINATION`.
    #[serde(default)]
    pub destination: String,
    /// Concurrent availability checks.
    #[serde(default = "default_check_concurrency")]
    pub concurrency: usize,
}

const fn default_check_concurrency() -> usize {
    20
}

impl Default for AvailabilitySettings {
    fn default() -> Self {
        Self {
            check_url: String::new(),
            destination: String::new(),
            concurrency: default_check_concurrency(),
        }
    }
}

impl AvailabilitySettings {
    /// Check URL for one item.
    #[must_use]
    pub fn item_url(&self, item_id: &str, destination: &str) -> String {
        self.check_url
            .replace(ITEM_PLACEHOLDER, &encode(item_id))
            .replace(DESTINATION_PLACEHOLDER, &encode(destination))
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
