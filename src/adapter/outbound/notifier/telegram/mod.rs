//! Telegram notification delivery.
//!
//! Sends rendered HTML messages and photos to a single chat, rotating across
//! the configured bot tokens per message.

pub mod notifier;

pub use notifier::{TelegramConfig, TelegramNotifier};
