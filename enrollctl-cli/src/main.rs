//! enrollctl CLI - student enrolment intake service
//!
//! Entry point for the enrollctl command-line tool:
//! - HTTP intake server (`serve` subcommand)

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(name = "enrollctl", version, about = "Student enrolment intake service")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP intake server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init_tracing(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
    }
}
