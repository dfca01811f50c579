//! Development tasks for the maze agent
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Graph, Paths, Play};

/// Development tasks for the maze agent
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the maze agent", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print the node graph of a level
    Graph(Graph),

    /// Enumerate paths between two tiles
    Paths(Paths),

    /// Run the agent against a level with static adversaries
    Play(Play),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for MAZE_AGENT_SEED and RUST_LOG)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Graph(cmd) => cmd.execute(),
        Command::Paths(cmd) => cmd.execute(),
        Command::Play(cmd) => cmd.execute(),
    }
}
