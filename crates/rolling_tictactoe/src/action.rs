//! First-class action types for rolling tic-tac-toe.
//!
//! A [`Move`] is a placement that made it into the log. A [`MoveOutcome`]
//! reports what a placement attempt did to the game.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A live piece: a player's mark at a position.
///
/// Moves are immutable once logged and leave the board only through
/// rolling eviction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who placed the piece.
    pub player: Player,
    /// Where the piece sits.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Row of the piece.
    pub fn x(&self) -> usize {
        self.position.x()
    }

    /// Column of the piece.
    pub fn y(&self) -> usize {
        self.position.y()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:({},{})", self.player, self.x(), self.y())
    }
}

/// What happened when a placement was attempted.
///
/// Rejections are not errors: the engine ignores the attempt and leaves
/// its state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The piece was placed; `evicted` is the oldest piece if it rolled off.
    #[display("placed {placed}{}", evicted.map(|m| format!(", evicted {m}")).unwrap_or_default())]
    Placed {
        /// The move that was appended.
        placed: Move,
        /// The move removed to make room, if the log was full.
        evicted: Option<Move>,
    },
    /// The cell already holds a live piece.
    #[display("{_0} is occupied")]
    Occupied(Position),
    /// A winner exists; no further moves are accepted.
    #[display("game is over")]
    GameOver,
    /// The coordinates are not on the board.
    #[display("({x},{y}) is off the board")]
    OutOfBounds {
        /// Requested row.
        x: usize,
        /// Requested column.
        y: usize,
    },
}

impl MoveOutcome {
    /// Returns true if the attempt changed the game.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed { .. })
    }

    /// Returns the evicted move, if any.
    pub fn evicted(&self) -> Option<Move> {
        match self {
            MoveOutcome::Placed { evicted, .. } => *evicted,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display_uses_coordinates() {
        let mov = Move::new(Player::O, Position::MiddleRight);
        assert_eq!(mov.to_string(), "O:(1,2)");
    }

    #[test]
    fn test_outcome_display() {
        let placed = Move::new(Player::X, Position::Center);
        let evicted = Move::new(Player::X, Position::TopLeft);

        let outcome = MoveOutcome::Placed { placed, evicted: Some(evicted) };
        assert_eq!(outcome.to_string(), "placed X:(1,1), evicted X:(0,0)");

        let outcome = MoveOutcome::Placed { placed, evicted: None };
        assert_eq!(outcome.to_string(), "placed X:(1,1)");

        assert_eq!(MoveOutcome::GameOver.to_string(), "game is over");
        assert_eq!(MoveOutcome::OutOfBounds { x: 3, y: 1 }.to_string(), "(3,1) is off the board");
    }

    #[test]
    fn test_rejections_are_not_placed() {
        assert!(!MoveOutcome::GameOver.is_placed());
        assert!(!MoveOutcome::Occupied(Position::Center).is_placed());
        assert_eq!(MoveOutcome::GameOver.evicted(), None);
    }
}
