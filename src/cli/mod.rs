//! missionloc CLI - command-line interface for the mission localization tools

pub mod commands;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "missionloc")]
#[command(about = "StringId and localization tools for mission XML files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the missionloc CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
