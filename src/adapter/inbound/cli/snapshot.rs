//! Handler for the `snapshot` command group.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::domain::Snapshot;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Execute `snapshot show`.
pub fn execute_show(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let snapshot = bootstrap::build_store(&config).load();

    output::section("Snapshot");
    output::field("Path", config.store.path.display());
    output::field("Total", snapshot.last_total_count);
    output::field(
        "Updated",
        snapshot
            .updated_at
            .map_or_else(|| "never".to_string(), |at| at.to_rfc3339()),
    );
    output::field("Available", snapshot.available_identifiers.len());
    for id in &snapshot.available_identifiers {
        output::field("-", id);
    }
    Ok(())
}

/// Execute `snapshot reset`.
pub fn execute_reset(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    bootstrap::build_store(&config).save(&Snapshot::default())?;

    output::success("Snapshot reset");
    output::field("Path", config.store.path.display());
    Ok(())
}
