use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{CatalogItem, CatalogPage};
use crate::error::CatalogError;
use crate::port::CatalogSource;

/// Catalog source that serves pre-scripted pages.
///
/// Pages that were not scripted come back empty.
pub struct ScriptedCatalog {
    total_count: u64,
    total_pages: u32,
    pages: HashMap<u32, Result<Vec<CatalogItem>, CatalogError>>,
    calls: AtomicUsize,
}

impl ScriptedCatalog {
    pub fn new(total_count: u64) -> Self {
        Self {
            total_count,
            total_pages: 0,
            pages: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Single-page catalog holding `items`.
    pub fn single_page(total_count: u64, items: Vec<CatalogItem>) -> Self {
        Self::new(total_count).with_total_pages(1).with_page(0, items)
    }

    #[must_use]
    pub fn with_total_pages(mut self, total_pages: u32) -> Self {
        self.total_pages = total_pages;
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32, items: Vec<CatalogItem>) -> Self {
        self.pages.insert(page, Ok(items));
        self
    }

    #[must_use]
    pub fn with_failure(mut self, page: u32, error: CatalogError) -> Self {
        self.pages.insert(page, Err(error));
        self
    }

    /// Number of page requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CatalogSource for ScriptedCatalog {
    async fn fetch_page(&self, page: u32, _page_size: u32) -> Result<CatalogPage, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let items = match self.pages.get(&page) {
            Some(Ok(items)) => items.clone(),
            Some(Err(err)) => return Err(err.clone()),
            None => Vec::new(),
        };
        Ok(CatalogPage {
            items,
            total_count: self.total_count,
            total_pages: self.total_pages,
        })
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}
