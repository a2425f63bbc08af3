//! Command-line interface for rolling_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rolling Games - tic-tac-toe where the oldest piece rolls off
#[derive(Parser, Debug)]
#[command(name = "rolling_games")]
#[command(about = "Rolling tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to rolling_games.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game in the terminal
    Play,

    /// Replay a list of cells and print the result
    Replay {
        /// Cells in play order: "02", "0,2" or "top-right"
        #[arg(required = true)]
        cells: Vec<String>,

        /// Print the final game as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
