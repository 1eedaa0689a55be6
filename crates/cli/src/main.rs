//! `warsim`: resolve battle scenarios and estimate attack odds.
//!
//! Run with: `warsim resolve data/scenarios/border_skirmish.ron`

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Odds, Resolve};
use config::WarsimConfig;

/// Battle resolution tools
#[derive(Parser)]
#[command(name = "warsim")]
#[command(about = "Resolve battles and estimate victory odds", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run every order in a scenario file and print the outcome
    Resolve(Resolve),

    /// Show the victory distribution for two army strengths
    Odds(Odds),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for WARSIM_TABLES and WARSIM_SEED)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = WarsimConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve(cmd) => cmd.execute(&config),
        Command::Odds(cmd) => cmd.execute(&config),
    }
}
