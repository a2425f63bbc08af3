//! Win detection over the live move log.
//!
//! Winning lines come from five coordinate patterns. Each pattern is read
//! in two orientations: row-major takes the pattern's values as rows and
//! their indices as columns, column-major the other way round. Evicted
//! pieces are gone from the log and never count towards a line.

use super::super::{MoveLog, Player, Position};
use tracing::instrument;

/// The five winning patterns, each checked in both [`Orientation`]s.
pub const WIN_PATTERNS: [[usize; 3]; 5] = [
    [0, 1, 2],
    [0, 0, 0],
    [1, 1, 1],
    [2, 2, 2],
    [2, 1, 0],
];

/// How a pattern maps onto board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Cell `k` is `(x = pattern[k], y = k)`.
    RowMajor,
    /// Cell `k` is `(x = k, y = pattern[k])`.
    ColumnMajor,
}

impl Orientation {
    /// Both orientations, in checking order.
    pub const BOTH: [Orientation; 2] = [Orientation::RowMajor, Orientation::ColumnMajor];

    /// The three cells `pattern` covers in this orientation.
    ///
    /// `None` if any pattern value is off the board.
    pub fn cells(self, pattern: &[usize; 3]) -> Option<[Position; 3]> {
        let cell = |k: usize| match self {
            Orientation::RowMajor => Position::from_coords(pattern[k], k),
            Orientation::ColumnMajor => Position::from_coords(k, pattern[k]),
        };
        Some([cell(0)?, cell(1)?, cell(2)?])
    }
}

/// Every distinct line the pattern table produces, in checking order.
pub fn winning_lines() -> Vec<[Position; 3]> {
    let mut lines: Vec<[Position; 3]> = Vec::with_capacity(WIN_PATTERNS.len() * 2);
    for pattern in &WIN_PATTERNS {
        for line in Orientation::BOTH.into_iter().filter_map(|o| o.cells(pattern)) {
            let mut key = line;
            key.sort_by_key(|p| p.to_index());
            let seen = lines.iter().any(|l| {
                let mut k = *l;
                k.sort_by_key(|p| p.to_index());
                k == key
            });
            if !seen {
                lines.push(line);
            }
        }
    }
    lines
}

/// Returns the first completed line for `player`, if any.
#[instrument(skip(log), fields(live = log.len()))]
pub fn winning_line(log: &MoveLog, player: Player) -> Option<[Position; 3]> {
    WIN_PATTERNS.iter().find_map(|pattern| {
        Orientation::BOTH
            .into_iter()
            .filter_map(|orientation| orientation.cells(pattern))
            .find(|line| line.iter().all(|&pos| log.holds(player, pos)))
    })
}

/// Checks whether `player` has completed any line.
pub fn has_won(log: &MoveLog, player: Player) -> bool {
    winning_line(log, player).is_some()
}

/// Determines the winner of the live position.
///
/// X is checked first, so X is reported if both players hold a line.
#[instrument(skip(log), fields(live = log.len()))]
pub fn check_winner(log: &MoveLog) -> Option<Player> {
    [Player::X, Player::O].into_iter().find(|&player| has_won(log, player))
}
