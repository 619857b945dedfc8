//! Bouquet CLI - Command-line interface
//!
//! Serves the photo album and inspects listings from the command line.

mod commands;

use std::path::PathBuf;

use bouquet_core::tracing_setup::{CliLogLevel, init_tracing};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bouquet")]
#[command(about = "A paginated photo album server")]
struct Cli {
    /// Console log level for Bouquet and request logs
    #[arg(long, value_enum, default_value_t = CliLogLevel::Info, global = true)]
    log_level: CliLogLevel,
    /// Write a full debug log of this run into this directory
    #[arg(long, global = true)]
    logs_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), cli.logs_dir.as_deref())?;

    commands::handle_command(cli.command).await
}
