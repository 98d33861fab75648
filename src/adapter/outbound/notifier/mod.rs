//! Notification adapters.
//!
//! Implements the `port::Notifier` trait for the Telegram backend.

pub mod rotation;

#[cfg(feature = "telegram")]
pub mod telegram;

#[cfg(test)]
mod tests;
