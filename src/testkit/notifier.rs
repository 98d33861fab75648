use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::journal::Journal;
use crate::port::Notifier;

/// One captured delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Text(String),
    Image { url: String, caption: String },
}

impl Delivery {
    /// The message body regardless of delivery kind.
    pub fn body(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Image { caption, .. } => caption,
        }
    }
}

/// Thread-safe delivery collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    journal: Option<Journal>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record into a shared journal as well.
    #[must_use]
    pub fn with_journal(mut self, journal: Journal) -> Self {
        self.journal = Some(journal);
        self
    }

    /// Record deliveries but report every one of them as failed.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.deliveries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.lock().is_empty()
    }

    fn push(&self, delivery: Delivery) -> bool {
        if let Some(journal) = &self.journal {
            let tag = match &delivery {
                Delivery::Text(_) => "notify:text",
                Delivery::Image { .. } => "notify:image",
            };
            journal.record(tag);
        }
        self.deliveries.lock().push(delivery);
        !self.failing
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send_text(&self, text: &str) -> bool {
        self.push(Delivery::Text(text.to_string()))
    }

    async fn send_image(&self, image_url: &str, caption: &str) -> bool {
        self.push(Delivery::Image {
            url: image_url.to_string(),
            caption: caption.to_string(),
        })
    }
}
