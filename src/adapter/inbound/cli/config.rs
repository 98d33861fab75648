//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::telegram::bot_tokens_from_env;
use crate::infrastructure::config::Config;

/// Execute `config show`.
///
/// The destination is masked; bot tokens are only counted.
pub fn execute_show(path: &Path) -> Result<()> {
    let config = Config::load(path)?;
    let rendered = toml::to_string_pretty(&config.redacted()).map_err(|e| {
        ConfigError::InvalidValue {
            field: "config",
            reason: e.to_string(),
        }
    })?;

    output::section("Effective Configuration");
    output::block("config", &rendered);

    output::section("Notifications");
    output::field(
        "Telegram",
        if config.telegram.enabled {
            "enabled"
        } else {
            "disabled"
        },
    );
    let tokens = bot_tokens_from_env().len();
    if tokens > 0 {
        output::success(&format!("{tokens} bot token(s) loaded from environment"));
    } else if config.telegram.enabled {
        output::warning("TELEGRAM_BOT_TOKENS is not set");
    }
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    Config::load(path)?;
    output::success("Configuration valid");
    output::field("Path", path.display());
    Ok(())
}
