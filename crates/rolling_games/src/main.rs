//! Rolling Games - Unified CLI
//!
//! Play rolling tic-tac-toe in the terminal or replay a move list.

#![warn(missing_docs)]

mod cli;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rolling_games::GameConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play => {
            init_file_tracing(&config)?;
            tui::run_tui(&config)
        }
        Command::Replay { cells, json } => {
            init_stderr_tracing(&config);
            info!(count = cells.len(), "Replaying moves");
            replay::run_replay(&cells, json, &mut std::io::stdout().lock())
        }
    }
}

fn env_filter(config: &GameConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs go to a file so they don't corrupt the terminal UI.
fn init_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing(config: &GameConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .try_init();
}
