//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::{info, warn};

#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::{TelegramConfig, TelegramNotifier};
use crate::adapter::outbound::store::JsonFileStore;
use crate::adapter::outbound::storefront::{
    build_http_client, StorefrontAvailability, StorefrontCatalog,
};
use crate::application::{CatalogFetcher, Dispatcher, PollLoop, WaveEngine};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::telegram::bot_tokens_from_env;
use crate::port::{LogNotifier, Notifier, SnapshotStore};

/// Build the notifier from configuration.
///
/// Falls back to [`LogNotifier`] on dry runs, when Telegram is disabled, or
/// when no bot token is available.
pub fn build_notifier(config: &Config, dry_run: bool) -> Arc<dyn Notifier> {
    if dry_run {
        info!("Dry run: notifications are logged, not sent");
        return Arc::new(LogNotifier);
    }
    if !config.telegram.enabled {
        info!("Telegram disabled, logging notifications");
        return Arc::new(LogNotifier);
    }
    build_telegram_notifier(config, bot_tokens_from_env())
}

#[cfg(feature = "telegram")]
fn build_telegram_notifier(config: &Config, bot_tokens: Vec<String>) -> Arc<dyn Notifier> {
    let Some(chat_id) = config.telegram.chat_id else {
        warn!("Telegram enabled but no chat ID, logging notifications");
        return Arc::new(LogNotifier);
    };
    let telegram = TelegramConfig {
        bot_tokens,
        chat_id,
        retry: config.telegram.retry_policy(),
        request_timeout: config.telegram.request_timeout(),
    };
    match TelegramNotifier::new(telegram) {
        Some(notifier) => Arc::new(notifier),
        None => {
            warn!("Telegram enabled but TELEGRAM_BOT_TOKENS is not set, logging notifications");
            Arc::new(LogNotifier)
        }
    }
}

#[cfg(not(feature = "telegram"))]
fn build_telegram_notifier(_config: &Config, _bot_tokens: Vec<String>) -> Arc<dyn Notifier> {
    warn!("Telegram enabled but built without the telegram feature, logging notifications");
    Arc::new(LogNotifier)
}

/// Build the snapshot store from configuration.
pub fn build_store(config: &Config) -> Arc<dyn SnapshotStore> {
    Arc::new(JsonFileStore::new(config.store.path.clone()))
}

/// Wire the wave engine against the storefront adapters.
pub fn build_engine(
    config: &Config,
    store: Arc<dyn SnapshotStore>,
    notifier: Arc<dyn Notifier>,
) -> WaveEngine {
    let http = build_http_client(&config.catalog);
    let destination = config.destination();

    let source = Arc::new(StorefrontCatalog::new(http.clone(), config.catalog.clone()));
    let catalog = CatalogFetcher::new(
        source,
        config.catalog.page_size,
        config.catalog.page_concurrency,
    );
    let checker = Arc::new(StorefrontAvailability::new(
        http,
        config.availability.clone(),
        config.catalog.base_url.clone(),
    ));
    let dispatcher = Dispatcher::new(notifier, destination.masked());

    WaveEngine::new(
        catalog,
        checker,
        store,
        dispatcher,
        destination,
        config.availability.concurrency,
    )
}

/// Wire the full poll loop.
pub fn build_poll_loop(config: &Config, dry_run: bool) -> PollLoop {
    let notifier = build_notifier(config, dry_run);
    let store = build_store(config);
    let engine = build_engine(config, store, notifier);

    info!(
        destination = %config.destination(),
        store = %config.store.path.display(),
        interval_secs = config.poll.interval_secs,
        dry_run,
        "Watcher configured"
    );

    PollLoop::new(engine, config.poll.interval()).announce_startup(config.poll.announce_startup)
}

#[cfg(all(test, feature = "telegram"))]
mod tests {
    use super::*;

    fn enabled_config(chat_id: Option<i64>) -> Config {
        let mut config = Config::default();
        config.telegram.enabled = true;
        config.telegram.chat_id = chat_id;
        config
    }

    #[tokio::test]
    async fn missing_tokens_fall_back_to_logging() {
        let notifier = build_telegram_notifier(&enabled_config(Some(-100)), Vec::new());
        assert!(notifier.send_text("hello").await);
    }

    #[tokio::test]
    async fn missing_chat_id_falls_back_to_logging() {
        let notifier = build_telegram_notifier(&enabled_config(None), vec!["1:abc".into()]);
        assert!(notifier.send_text("hello").await);
    }

    #[tokio::test]
    async fn dry_run_never_builds_telegram() {
        let notifier = build_notifier(&enabled_config(Some(-100)), true);
        assert!(notifier.send_image("https://img.example/a.jpg", "caption").await);
    }
}
