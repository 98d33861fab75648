//! Telegram notification configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::RetryPolicy;

/// Environment variable holding comma-separated bot tokens.
pub const BOT_TOKENS_ENV: &str = "TELEGRAM_BOT_TOKENS";
/// Environment variable holding a single bot token.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";
/// Environment variable overriding `telegram.chat_id`.
pub const CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

const fn default_retry_limit() -> u32 {
    3
}

const fn default_retry_backoff_ms() -> u64 {
    400
}

const fn default_request_timeout_secs() -> u64 {
    20
}

/// Telegram notification configuration.
///
/// Bot tokens are never read from the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default)]
    pub enabled: bool,
    /// Target chat ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<i64>,
    /// Attempts per message, including the first.
    #[serde(default = "default_retry_limit")]
    pub retry_limit: u32,
    /// Sleep between attempts in milliseconds.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    /// Per-request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl TelegramAppConfig {
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_limit, Duration::from_millis(self.retry_backoff_ms))
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            chat_id: None,
            retry_limit: default_retry_limit(),
            retry_backoff_ms: default_retry_backoff_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Read bot tokens from the environment.
///
/// `TELEGRAM_BOT_TOKENS` wins over `TELEGRAM_BOT_TOKEN`.
#[must_use]
pub fn bot_tokens_from_env() -> Vec<String> {
    let raw = std::env::var(BOT_TOKENS_ENV)
        .or_else(|_| std::env::var(BOT_TOKEN_ENV))
        .unwrap_or_default();
    parse_tokens(&raw)
}

/// Split a comma-separated token list, dropping blanks.
#[must_use]
pub fn parse_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        std::env::remove_var(BOT_TOKENS_ENV);
        std::env::remove_var(BOT_TOKEN_ENV);
    }

    #[test]
    fn tokens_are_split_and_trimmed() {
        assert_eq!(parse_tokens(" a:1, ,b:2 ,"), vec!["a:1", "b:2"]);
        assert!(parse_tokens("").is_empty());
    }

    #[test]
    fn token_list_wins_over_single_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var(BOT_TOKENS_ENV, "one,two");
        std::env::set_var(BOT_TOKEN_ENV, "single");

        assert_eq!(bot_tokens_from_env(), vec!["one", "two"]);
        clear_env();
    }

    #[test]
    fn single_token_is_used_when_list_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var(BOT_TOKEN_ENV, "single");

        assert_eq!(bot_tokens_from_env(), vec!["single"]);
        clear_env();
    }

    #[test]
    fn no_tokens_in_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env();
        assert!(bot_tokens_from_env().is_empty());
    }

    #[test]
    fn retry_policy_follows_config() {
        let config = TelegramAppConfig {
            retry_limit: 5,
            retry_backoff_ms: 10,
            ..TelegramAppConfig::default()
        };
        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 5);
        assert_eq!(policy.backoff, Duration::from_millis(10));
    }
}
