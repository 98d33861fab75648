//! Handler for the `once` command.

use std::path::Path;

use crate::adapter::inbound::cli::command::OnceArgs;
use crate::adapter::inbound::cli::output;
use crate::application::{CycleKind, CycleOutcome};
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::Config;

/// Execute exactly one cycle against the stored snapshot.
///
/// Unlike the poll loop, a failed cycle is returned as an error.
pub async fn execute(config_path: &Path, args: &OnceArgs) -> Result<()> {
    let mut config = Config::load(config_path)?;
    config.logging.override_with(args.log_level.as_deref(), false);
    config.init_logging();

    let notifier = bootstrap::build_notifier(&config, args.dry_run);
    let store = bootstrap::build_store(&config);
    let engine = bootstrap::build_engine(&config, store.clone(), notifier);

    let prior = store.load();
    let outcome = engine.run_cycle(&prior).await?;
    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &CycleOutcome) {
    let stats = &outcome.stats;

    output::section("Cycle");
    match outcome.kind {
        CycleKind::Idle { total } => {
            output::field("Result", "idle");
            output::field("Total", total);
            return;
        }
        CycleKind::Wave { previous, current } => {
            output::field("Result", "wave");
            output::field("Total", format!("{previous} -> {current}"));
        }
        CycleKind::Shrink { previous, current } => {
            output::field("Result", "shrink");
            output::field("Total", format!("{previous} -> {current}"));
        }
    }
    output::field("Fetched", stats.fetched);
    output::field("Failed pages", stats.failed_pages);

    output::section("Availability");
    output::field("Checked", stats.checked);
    output::field("Available", stats.available);
    output::field("Unavailable", stats.unavailable);
    output::field("Unknown", stats.unknown);

    output::section("Notifications");
    output::field("Announced", stats.announced);
    if stats.delivery_failures > 0 {
        output::warning(&format!("{} deliveries failed", stats.delivery_failures));
    }
}
