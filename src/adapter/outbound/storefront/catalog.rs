//! Storefront listing adapter.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use tracing::debug;

use super::dto::ListingResponse;
use super::parse::parse_lenient;
use super::settings::CatalogSettings;
use crate::domain::CatalogPage;
use crate::error::CatalogError;
use crate::port::CatalogSource;

/// [`CatalogSource`] backed by the storefront's paged listing endpoint.
pub struct StorefrontCatalog {
    http: HttpClient,
    settings: CatalogSettings,
}

impl StorefrontCatalog {
    pub fn new(http: HttpClient, settings: CatalogSettings) -> Self {
        Self { http, settings }
    }

    /// Turn a raw response body into a page.
    ///
    /// A missing total falls back to the number of items on the page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] when the body is not JSON.
    pub fn parse_page(&self, page: u32, body: &str) -> Result<CatalogPage, CatalogError> {
        let response: ListingResponse =
            parse_lenient(body).map_err(|reason| CatalogError::Malformed { page, reason })?;

        let pagination = response.pagination.unwrap_or_default();
        let items: Vec<_> = response
            .products
            .into_iter()
            .map(|product| product.into_item(&self.settings.base_url))
            .collect();
        let total_count = pagination.total_results.unwrap_or(items.len() as u64);
        let total_pages = pagination
            .total_pages
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(0);

        Ok(CatalogPage {
            items,
            total_count,
            total_pages,
        })
    }
}

#[async_trait]
impl CatalogSource for StorefrontCatalog {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<CatalogPage, CatalogError> {
        let url = self.settings.page_url(page, page_size);
        debug!(page, url = %url, "Fetching catalog page");

        let transient = |reason: String| CatalogError::Transient { page, reason };

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/html,application/json;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|err| transient(err.to_string()))?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(CatalogError::AccessDenied { page });
        }
        if !status.is_success() {
            return Err(transient(format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|err| transient(err.to_string()))?;
        self.parse_page(page, &body)
    }

    fn source_name(&self) -> &'static str {
        "storefront"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> StorefrontCatalog {
        StorefrontCatalog::new(
            HttpClient::new(),
            CatalogSettings {
                base_url: "https://shop.example".into(),
                ..CatalogSettings::default()
            },
        )
    }

    #[test]
    fn parses_pagination_and_products() {
        let page = catalog()
            .parse_page(
                0,
                r#"{"products": [{"code": "A"}, {"code": "B"}],
                    "pagination": {"totalResults": 105, "totalPages": 3}}"#,
            )
            .unwrap();

        assert_eq!(page.total_count, 105);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn missing_total_falls_back_to_item_count() {
        let page = catalog()
            .parse_page(0, r#"{"products": [{"code": "A"}]}"#)
            .unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn unparseable_body_is_malformed() {
        let err = catalog().parse_page(2, "<html>captcha</html>").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { page: 2, .. }));
    }
}
