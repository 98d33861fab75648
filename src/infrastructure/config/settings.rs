//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for deployment-specific values like `STOCKWAVE_DESTINATION`.
//!
//! # Example
//!
//! ```no_run
//! use stockwave::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::poll::PollConfig;
use super::telegram::{TelegramAppConfig, CHAT_ID_ENV};
use crate::adapter::outbound::storefront::settings::{
    DESTINATION_PLACEHOLDER, ITEM_PLACEHOLDER, PAGE_PLACEHOLDER, PAGE_SIZE_PLACEHOLDER,
};
use crate::adapter::outbound::storefront::{AvailabilitySettings, CatalogSettings};
use crate::domain::{mask, Destination};
use crate::error::{ConfigError, Result};

/// Environment variable overriding `availability.destination`.
pub const DESTINATION_ENV: &str = "STOCKWAVE_DESTINATION";

/// Snapshot persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the JSON snapshot file.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("stockwave.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Poll loop timing.
    #[serde(default)]
    pub poll: PollConfig,

    /// Catalog listing endpoint and paging.
    #[serde(default)]
    pub catalog: CatalogSettings,

    /// Availability endpoint, destination and check concurrency.
    #[serde(default)]
    pub availability: AvailabilitySettings,

    /// Telegram notification configuration.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// Snapshot file location.
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Applies `STOCKWAVE_DESTINATION` and `TELEGRAM_CHAT_ID` from the
    /// environment before validating.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed, an environment
    /// override is malformed, or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_overrides(
            std::env::var(DESTINATION_ENV).ok(),
            std::env::var(CHAT_ID_ENV).ok(),
        )?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    fn apply_overrides(&mut self, destination: Option<String>, chat_id: Option<String>) -> Result<()> {
        if let Some(destination) = destination.filter(|d| !d.trim().is_empty()) {
            self.availability.destination = destination.trim().to_string();
        }
        if let Some(raw) = chat_id.filter(|c| !c.trim().is_empty()) {
            let chat_id = raw.trim().parse::<i64>().map_err(|e| ConfigError::InvalidValue {
                field: "TELEGRAM_CHAT_ID",
                reason: e.to_string(),
            })?;
            self.telegram.chat_id = Some(chat_id);
        }
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are present and values are within
    /// acceptable ranges.
    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        require_template(
            "catalog.listing_url",
            &self.catalog.listing_url,
            &[PAGE_PLACEHOLDER, PAGE_SIZE_PLACEHOLDER],
        )?;
        require_template(
            "availability.check_url",
            &self.availability.check_url,
            &[ITEM_PLACEHOLDER, DESTINATION_PLACEHOLDER],
        )?;
        if self.catalog.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "catalog.base_url",
            }
            .into());
        }
        if url::Url::parse(&self.catalog.base_url).is_err() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.base_url",
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }
        if self.availability.destination.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "availability.destination",
            }
            .into());
        }

        require_positive("poll.interval_secs", self.poll.interval_secs)?;
        require_positive("catalog.page_size", u64::from(self.catalog.page_size))?;
        require_positive("catalog.page_concurrency", self.catalog.page_concurrency as u64)?;
        require_positive("catalog.request_timeout_secs", self.catalog.request_timeout_secs)?;
        require_positive("availability.concurrency", self.availability.concurrency as u64)?;
        require_positive("telegram.retry_limit", u64::from(self.telegram.retry_limit))?;
        require_positive(
            "telegram.request_timeout_secs",
            self.telegram.request_timeout_secs,
        )?;

        if !self.logging.has_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be \"pretty\" or \"json\"".to_string(),
            }
            .into());
        }
        if self.telegram.enabled && self.telegram.chat_id.is_none() {
            return Err(ConfigError::MissingField {
                field: "telegram.chat_id",
            }
            .into());
        }
        if self.store.path.as_os_str().is_empty() {
            return Err(ConfigError::MissingField { field: "store.path" }.into());
        }
        Ok(())
    }

    /// The configured destination.
    #[must_use]
    pub fn destination(&self) -> Destination {
        Destination::new(self.availability.destination.clone())
    }

    /// A copy safe to print: the destination and chat ID are masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.availability.destination = mask(&config.availability.destination);
        config.telegram.chat_id = None;
        config
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[allow(clippy::result_large_err)]
fn require_template(field: &'static str, value: &str, placeholders: &[&str]) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }
    if let Some(missing) = placeholders.iter().find(|p| !value.contains(**p)) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("must contain {missing}"),
        }
        .into());
    }
    Ok(())
}

#[allow(clippy::result_large_err)]
fn require_positive(field: &'static str, value: u64) -> Result<()> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than 0".to_string(),
        }
        .into());
    }
    Ok(())
}
