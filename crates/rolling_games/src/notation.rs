//! Move notation for replays.
//!
//! A cell is written as a two-digit coordinate pair (`"02"` is row 0,
//! column 2), a comma-separated pair (`"0,2"`), or a cell label
//! (`"top-right"`).

use derive_more::{Display, Error};
use rolling_tictactoe::Position;
use tracing::instrument;

/// Parses one cell token.
#[instrument]
pub fn parse_cell(token: &str) -> Result<Position, NotationError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(NotationError::new("Empty cell token".to_string()));
    }

    let coords: Option<(usize, usize)> = match token.split_once(',') {
        Some((x, y)) => x.trim().parse().ok().zip(y.trim().parse().ok()),
        None => {
            let digits: Vec<usize> = token
                .chars()
                .map(|c| c.to_digit(10).map(|d| d as usize))
                .collect::<Option<_>>()
                .unwrap_or_default();
            match digits.as_slice() {
                [x, y] => Some((*x, *y)),
                _ => None,
            }
        }
    };

    match coords {
        Some((x, y)) => Position::from_coords(x, y)
            .ok_or_else(|| NotationError::new(format!("Cell ({},{}) is off the board", x, y))),
        None => Position::from_label_or_number(token)
            .filter(|_| token.parse::<usize>().is_err())
            .ok_or_else(|| NotationError::new(format!("Unrecognised cell '{}'", token))),
    }
}

/// Parses a sequence of cell tokens, stopping at the first bad one.
#[instrument(skip(tokens))]
pub fn parse_cells<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Position>, NotationError> {
    tokens.iter().map(|t| parse_cell(t.as_ref())).collect()
}

/// Move notation error.
#[derive(Debug, Clone, Display, Error)]
#[display("Notation error: {} at {}:{}", message, file, line)]
pub struct NotationError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NotationError {
    /// Creates a new notation error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
