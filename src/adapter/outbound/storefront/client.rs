//! Shared HTTP client for storefront requests.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client as HttpClient;
use tracing::warn;

use super::settings::CatalogSettings;

/// Build the client used by both the catalog and the availability adapter.
///
/// Every request carries the configured timeout; a timeout surfaces as an
/// ordinary request error.
#[must_use]
pub fn build_http_client(settings: &CatalogSettings) -> HttpClient {
    let mut headers = HeaderMap::new();
    if let Ok(agent) = HeaderValue::from_str(&settings.user_agent) {
        headers.insert(USER_AGENT, agent);
    }
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );

    HttpClient::builder()
        .timeout(Duration::from_secs(settings.request_timeout_secs))
        .default_headers(headers)
        .gzip(true)
        .brotli(true)
        .build()
        .unwrap_or_else(|err| {
            warn!(error = %err, "Failed to build HTTP client, using defaults");
            HttpClient::new()
        })
}
