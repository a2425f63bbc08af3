//! Rolling tic-tac-toe game logic.
//!
//! A tic-tac-toe variant where each player keeps at most three pieces on
//! the board. Once six pieces are live, placing another one first removes
//! the oldest piece on the board, whoever owns it.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the move log and the turn pointer
//! - **Rules**: pure win detection over the live move log
//! - **Invariants**: first-class properties checked after every placement
//! - **Board**: read-only snapshot for front-ends to render
//!
//! # Example
//!
//! ```
//! use rolling_tictactoe::{GameEngine, Player};
//!
//! let mut game = GameEngine::new();
//! game.apply_move(0, 0); // X
//! game.apply_move(1, 0); // O
//! game.apply_move(0, 1); // X
//! game.apply_move(1, 1); // O
//! game.apply_move(0, 2); // X completes the top row
//!
//! assert_eq!(game.winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod engine;
mod invariants;
mod move_log;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveOutcome};
pub use board::{Board, Cell};
pub use contracts::{Contract, LegalPlacement, PlacementContract, Rejection};
pub use engine::{GameEngine, GameSnapshot};
pub use invariants::{
    AlternatingTurnInvariant, BoundedLogInvariant, Invariant, InvariantSet, InvariantViolation,
    RollingInvariants, UniqueCellsInvariant, WinnerConsistentInvariant,
};
pub use move_log::{LIVE_CAPACITY, MoveLog};
pub use position::Position;
pub use rules::{Orientation, WIN_PATTERNS, check_winner, has_won, winning_line, winning_lines};
pub use types::Player;
