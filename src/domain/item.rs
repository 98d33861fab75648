//! Catalog item records.

use serde::{Deserialize, Serialize};

/// One product record from the catalog.
///
/// Only `id` takes part in detection. Everything else is carried through
/// for rendering notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog-wide identifier, unique within a cycle.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Pre-formatted price string as reported by the catalog.
    pub price: Option<String>,
    /// Category label.
    pub category: Option<String>,
    /// Primary image URL, if the record carries one.
    pub image_url: Option<String>,
    /// Canonical product URL (absolute).
    pub url: Option<String>,
}

impl CatalogItem {
    /// Create an item with only an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// True when the record has an identifier that can be checked.
    #[must_use]
    pub fn is_checkable(&self) -> bool {
        !self.id.trim().is_empty()
    }
}
