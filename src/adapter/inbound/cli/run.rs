//! Handler for the `run` command.

use std::path::Path;

use tracing::info;

use crate::adapter::inbound::cli::command::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Execute the run command. Returns after Ctrl-C.
pub async fn execute(config_path: &Path, args: &RunArgs) -> Result<()> {
    let mut config = Config::load(config_path)?;
    config
        .logging
        .override_with(args.log_level.as_deref(), args.json_logs);
    config.init_logging();

    info!(version = env!("CARGO_PKG_VERSION"), "stockwave starting");

    let poll = bootstrap::build_poll_loop(&config, args.dry_run);
    poll.run_until(shutdown_signal()).await;

    info!("stockwave stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
