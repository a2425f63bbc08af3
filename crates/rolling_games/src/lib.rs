//! Rolling Games - terminal front-end for rolling tic-tac-toe
//!
//! The engine lives in `rolling_tictactoe`; this crate provides what sits
//! around it: configuration, move notation for replays, and the
//! application binary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod notation;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Move notation
pub use notation::{NotationError, parse_cell, parse_cells};
