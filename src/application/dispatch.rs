//! Delivery of notifications through a [`Notifier`].

use std::sync::Arc;

use tracing::{info, warn};

use super::render::{render, Rendered};
use crate::domain::Notification;
use crate::port::Notifier;

/// Renders notifications and hands them to the transport.
#[derive(Clone)]
pub struct Dispatcher {
    notifier: Arc<dyn Notifier>,
    /// Masked destination code shown in item alerts.
    destination: String,
}

impl Dispatcher {
    pub fn new(notifier: Arc<dyn Notifier>, masked_destination: impl Into<String>) -> Self {
        Self {
            notifier,
            destination: masked_destination.into(),
        }
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Deliver one notification. Returns whether the transport accepted it.
    ///
    /// Item alerts with an image go out as a photo with caption; everything
    /// else goes out as text.
    pub async fn deliver(&self, notification: &Notification) -> bool {
        let Rendered { text, image_url } = render(notification, &self.destination);

        let sent = match image_url {
            Some(url) => self.notifier.send_image(&url, &text).await,
            None => self.notifier.send_text(&text).await,
        };

        if sent {
            info!(
                kind = notification.kind(),
                item_id = notification.item_id().unwrap_or("-"),
                "Notification delivered"
            );
        } else {
            warn!(
                kind = notification.kind(),
                item_id = notification.item_id().unwrap_or("-"),
                "Notification delivery failed"
            );
        }
        sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CatalogItem;
    use crate::testkit::notifier::{Delivery, RecordingNotifier};

    #[tokio::test]
    async fn image_alerts_use_send_image() {
        let notifier = RecordingNotifier::new();
        let dispatcher = Dispatcher::new(Arc::new(notifier.clone()), "8****0");

        let sent = dispatcher
            .deliver(&Notification::ItemAvailable {
                item: CatalogItem::new("X").with_image("https://img.example/x.jpg"),
                cod_eligible: None,
            })
            .await;

        assert!(sent);
        assert!(matches!(
            notifier.deliveries().as_slice(),
            [Delivery::Image { url, .. }] if url == "https://img.example/x.jpg"
        ));
    }

    #[tokio::test]
    async fn failed_delivery_is_reported_not_raised() {
        let notifier = RecordingNotifier::new().failing();
        let dispatcher = Dispatcher::new(Arc::new(notifier.clone()), "8****0");

        let sent = dispatcher
            .deliver(&Notification::StockIncreased {
                previous: 1,
                current: 2,
            })
            .await;

        assert!(!sent);
        assert_eq!(notifier.len(), 1);
    }
}
