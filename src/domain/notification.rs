//! Notifications produced by the watcher.

use super::item::CatalogItem;

/// A message destined for the notification channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Sent once when the poll loop starts.
    WatcherOnline {
        /// Masked destination code.
        destination: String,
    },
    /// The catalog total strictly increased.
    StockIncreased { previous: u64, current: u64 },
    /// An item resolved available that was not available last cycle.
    ItemAvailable {
        item: CatalogItem,
        cod_eligible: Option<bool>,
    },
}

impl Notification {
    /// Short label used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::WatcherOnline { .. } => "watcher_online",
            Self::StockIncreased { .. } => "stock_increased",
            Self::ItemAvailable { .. } => "item_available",
        }
    }

    /// Identifier of the announced item, if this is an item alert.
    #[must_use]
    pub fn item_id(&self) -> Option<&str> {
        match self {
            Self::ItemAvailable { item, .. } => Some(item.id.as_str()),
            _ => None,
        }
    }
}
