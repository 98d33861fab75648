//! Notifier port for outbound messages.
//!
//! Delivery is best effort: implementations retry a bounded number of times
//! and report failure as `false`, never as an error.

use async_trait::async_trait;
use tracing::info;

/// Transport for rendered messages.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - A `false` return means "delivery failed, continue processing"
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a plain (HTML-formatted) text message.
    async fn send_text(&self, text: &str) -> bool;

    /// Send an image by URL with a caption.
    async fn send_image(&self, image_url: &str, caption: &str) -> bool;
}

/// A logging notifier that writes messages via tracing.
///
/// Used for dry runs and when no transport is configured.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_text(&self, text: &str) -> bool {
        info!(text = %text, "Notification");
        true
    }

    async fn send_image(&self, image_url: &str, caption: &str) -> bool {
        info!(image = %image_url, caption = %caption, "Notification with image");
        true
    }
}

/// A no-op notifier that drops every message.
pub struct NullNotifier;

#[async_trait]
impl Notifier for NullNotifier {
    async fn send_text(&self, _text: &str) -> bool {
        true
    }

    async fn send_image(&self, _image_url: &str, _caption: &str) -> bool {
        true
    }
}
