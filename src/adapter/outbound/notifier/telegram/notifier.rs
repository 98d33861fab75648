//! Telegram notifier.
//!
//! Requires the `telegram` feature to be enabled.

use std::time::Duration;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InputFile, LinkPreviewOptions, ParseMode};
use tracing::{info, warn};

use crate::adapter::outbound::notifier::rotation::TokenRotation;
use crate::domain::RetryPolicy;
use crate::port::Notifier;

/// Configuration for the Telegram notifier.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API tokens; one is picked per message.
    pub bot_tokens: Vec<String>,
    /// Target chat or channel ID.
    pub chat_id: i64,
    /// Retry policy applied to each message.
    pub retry: RetryPolicy,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_tokens", &format_args!("[{} redacted]", self.bot_tokens.len()))
            .field("chat_id", &self.chat_id)
            .field("retry", &self.retry)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Telegram notifier that sends messages to a chat.
pub struct TelegramNotifier {
    bots: TokenRotation<Bot>,
    chat_id: ChatId,
    retry: RetryPolicy,
}

impl TelegramNotifier {
    /// Create a notifier. Returns `None` when no bot token is configured.
    #[must_use]
    pub fn new(config: TelegramConfig) -> Option<Self> {
        let bots: Vec<Bot> = config
            .bot_tokens
            .iter()
            .map(|token| build_bot(token, config.request_timeout))
            .collect();
        let bots = TokenRotation::new(bots)?;

        info!(
            chat_id = config.chat_id,
            bots = bots.len(),
            "Telegram notifier ready"
        );

        Some(Self {
            bots,
            chat_id: ChatId(config.chat_id),
            retry: config.retry,
        })
    }
}

fn build_bot(token: &str, timeout: Duration) -> Bot {
    match teloxide::net::default_reqwest_settings()
        .timeout(timeout)
        .build()
    {
        Ok(client) => Bot::with_client(token, client),
        Err(err) => {
            warn!(error = %err, "Failed to build Telegram HTTP client, using defaults");
            Bot::new(token)
        }
    }
}

/// Text alerts carry their own product link; Telegram must not expand it.
fn no_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_text(&self, text: &str) -> bool {
        let bot = self.bots.next();
        let chat_id = self.chat_id;

        self.retry
            .run("sendMessage", move |_| async move {
                bot.send_message(chat_id, text)
                    .parse_mode(ParseMode::Html)
                    .link_preview_options(no_link_preview())
                    .await
                    .map(|_| ())
            })
            .await
    }

    async fn send_image(&self, image_url: &str, caption: &str) -> bool {
        let url = match url::Url::parse(image_url) {
            Ok(url) => url,
            Err(err) => {
                warn!(image = %image_url, error = %err, "Invalid image URL, sending as text");
                return self.send_text(caption).await;
            }
        };
        let bot = self.bots.next();
        let chat_id = self.chat_id;
        let url = &url;

        self.retry
            .run("sendPhoto", move |_| async move {
                bot.send_photo(chat_id, InputFile::url(url.clone()))
                    .caption(caption)
                    .parse_mode(ParseMode::Html)
                    .await
                    .map(|_| ())
            })
            .await
    }
}
