use clap::Parser;

use stockwave::adapter::inbound::cli::command::{
    Cli, Commands, ConfigCommand, SnapshotCommand,
};
use stockwave::adapter::inbound::cli::output::{self, OutputConfig};
use stockwave::adapter::inbound::cli::{config, once, run, snapshot};
use stockwave::error::Result;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = dispatch(&cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => run::execute(&cli.config, args).await,
        Commands::Once(args) => once::execute(&cli.config, args).await,
        Commands::Snapshot(SnapshotCommand::Show) => snapshot::execute_show(&cli.config),
        Commands::Snapshot(SnapshotCommand::Reset) => snapshot::execute_reset(&cli.config),
        Commands::Config(ConfigCommand::Show) => config::execute_show(&cli.config),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(&cli.config),
    }
}
