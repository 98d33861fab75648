//! Full-catalog retrieval: first page, then the rest in parallel.

use std::sync::Arc;

use tracing::{debug, warn};

use super::fanout::Fanout;
use crate::domain::CatalogListing;
use crate::error::Result;
use crate::port::CatalogSource;

/// Fetches every page of the catalog for one cycle.
pub struct CatalogFetcher {
    source: Arc<dyn CatalogSource>,
    page_size: u32,
    page_concurrency: usize,
}

impl CatalogFetcher {
    pub fn new(source: Arc<dyn CatalogSource>, page_size: u32, page_concurrency: usize) -> Self {
        Self {
            source,
            page_size: page_size.max(1),
            page_concurrency,
        }
    }

    /// Fetch the whole catalog.
    ///
    /// Items come back first page first, remaining pages in page order.
    ///
    /// # Errors
    ///
    /// Fails only when the first page cannot be fetched; that page carries
    /// the total the cycle depends on. Later page failures are logged and
    /// counted in [`CatalogListing::failed_pages`].
    pub async fn fetch_all(&self) -> Result<CatalogListing> {
        let first = self.source.fetch_page(0, self.page_size).await?;
        let total_count = first.total_count;
        let remaining: Vec<u32> = first.remaining_pages(self.page_size).collect();

        debug!(
            source = self.source.source_name(),
            total = total_count,
            pages = remaining.len() + 1,
            "Fetched first catalog page"
        );

        let mut items = first.items;
        let mut failed_pages = 0;

        if !remaining.is_empty() {
            let source = &self.source;
            let page_size = self.page_size;
            let mut resolved = Fanout::new(self.page_concurrency)
                .run_all(&remaining, |page| source.fetch_page(*page, page_size))
                .await;
            resolved.sort_by_key(|r| *r.item);

            for page in resolved {
                match page.outcome {
                    Some(Ok(fetched)) => items.extend(fetched.items),
                    Some(Err(err)) => {
                        failed_pages += 1;
                        warn!(page = *page.item, error = %err, "Catalog page fetch failed");
                    }
                    None => {
                        failed_pages += 1;
                        warn!(page = *page.item, "Catalog page fetch panicked");
                    }
                }
            }
        }

        Ok(CatalogListing {
            total_count,
            items,
            failed_pages,
        })
    }
}
