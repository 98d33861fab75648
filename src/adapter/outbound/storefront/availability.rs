//! Storefront serviceability adapter.

use async_trait::async_trait;
use reqwest::header::{ORIGIN, REFERER};
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, warn};

use super::dto::ServiceabilityResponse;
use super::parse::parse_lenient;
use super::settings::AvailabilitySettings;
use crate::domain::{AvailabilityResult, Destination};
use crate::port::AvailabilityChecker;

/// [`AvailabilityChecker`] backed by the storefront's delivery-details
/// endpoint. Requests are sent without cookies, shaped like a browser XHR.
pub struct StorefrontAvailability {
    http: HttpClient,
    settings: AvailabilitySettings,
    base_url: String,
}

impl StorefrontAvailability {
    pub fn new(http: HttpClient, settings: AvailabilitySettings, base_url: impl Into<String>) -> Self {
        Self {
            http,
            settings,
            base_url: base_url.into(),
        }
    }

    /// Interpret a response body. Unparseable bodies are unknown.
    #[must_use]
    pub fn parse_result(item_id: &str, body: &str) -> AvailabilityResult {
        match parse_lenient::<ServiceabilityResponse>(body) {
            Ok(response) => response.into(),
            Err(reason) => {
                warn!(item_id, reason = %reason, "Serviceability response unparseable");
                AvailabilityResult::unknown()
            }
        }
    }
}

#[async_trait]
impl AvailabilityChecker for StorefrontAvailability {
    async fn check(&self, item_id: &str, destination: &Destination) -> AvailabilityResult {
        if item_id.is_empty() {
            return AvailabilityResult::unknown();
        }

        let url = self.settings.item_url(item_id, destination.expose());
        let mut request = self
            .http
            .get(&url)
            .header("x-requested-with", "XMLHttpRequest")
            .header("sec-fetch-site", "same-origin")
            .header("sec-fetch-mode", "cors")
            .header("sec-fetch-dest", "empty");
        if !self.base_url.is_empty() {
            request = request
                .header(REFERER, format!("{}/", self.base_url.trim_end_matches('/')))
                .header(ORIGIN, self.base_url.trim_end_matches('/'));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                warn!(item_id, error = %err, "Serviceability request failed");
                return AvailabilityResult::unknown();
            }
        };

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            debug!(item_id, "Serviceability access denied");
            return AvailabilityResult::unknown();
        }
        if !status.is_success() {
            warn!(item_id, status = status.as_u16(), "Serviceability non-success status");
            return AvailabilityResult::unknown();
        }

        match response.text().await {
            Ok(body) => Self::parse_result(item_id, &body),
            Err(err) => {
                warn!(item_id, error = %err, "Serviceability body unreadable");
                AvailabilityResult::unknown()
            }
        }
    }
}
