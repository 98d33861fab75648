//! Catalog pages and the per-cycle listing.

use std::ops::RangeInclusive;

use super::item::CatalogItem;

/// One page as returned by a catalog source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    /// Total item count reported alongside this page.
    pub total_count: u64,
    /// Page count reported alongside this page; zero when absent.
    pub total_pages: u32,
}

impl CatalogPage {
    /// Pages still to fetch after page 0.
    ///
    /// With a reported page count the range runs to `total_pages` inclusive,
    /// one past the last zero-indexed page, so a total that grew between
    /// requests is still covered. Without one the range is derived from the
    /// total and the page size.
    #[must_use]
    pub fn remaining_pages(&self, page_size: u32) -> RangeInclusive<u32> {
        let last = if self.total_pages > 0 {
            self.total_pages
        } else {
            let size = u64::from(page_size.max(1));
            let last = self.total_count.saturating_sub(1) / size;
            u32::try_from(last).unwrap_or(u32::MAX)
        };
        1..=last
    }
}

/// Everything fetched from the catalog in one cycle.
///
/// `items` may be a partial view when some pages failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogListing {
    pub total_count: u64,
    pub items: Vec<CatalogItem>,
    /// Pages (other than the first) that could not be fetched.
    pub failed_pages: usize,
}
