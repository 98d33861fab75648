//! Command-line interface definitions.
//!
//! Defines the CLI structure for the stockwave watcher using `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catalog stock-wave watcher
#[derive(Parser, Debug)]
#[command(name = "stockwave")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the stockwave CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the catalog until interrupted
    Run(RunArgs),

    /// Run a single cycle and print its summary
    Once(OnceArgs),

    /// Inspect or clear the persisted snapshot
    #[command(subcommand)]
    Snapshot(SnapshotCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Arguments for `stockwave run`.
#[derive(clap::Args, Debug, Default)]
pub struct RunArgs {
    /// Log notifications instead of sending them.
    #[arg(long)]
    pub dry_run: bool,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

/// Arguments for `stockwave once`.
#[derive(clap::Args, Debug, Default)]
pub struct OnceArgs {
    /// Log notifications instead of sending them.
    #[arg(long)]
    pub dry_run: bool,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Subcommands for `stockwave snapshot`.
#[derive(Subcommand, Debug)]
pub enum SnapshotCommand {
    /// Print the persisted snapshot.
    Show,
    /// Replace the persisted snapshot with an empty one.
    Reset,
}

/// Subcommands for `stockwave config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show,
    /// Validate a configuration file for correctness.
    Validate,
}
