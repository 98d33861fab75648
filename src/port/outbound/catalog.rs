//! Catalog source port.

use async_trait::async_trait;

use crate::domain::CatalogPage;
use crate::error::CatalogError;

/// Paged access to the remote catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one zero-indexed page.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::AccessDenied`] when the catalog answers HTTP 403
    /// - [`CatalogError::Malformed`] when the body cannot be parsed
    /// - [`CatalogError::Transient`] for any other failure, timeouts included
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<CatalogPage, CatalogError>;

    /// Name used in logs.
    fn source_name(&self) -> &'static str;
}
