//! Contract-based validation for placements.
//!
//! A contract pairs a precondition on the state before an action with a
//! postcondition relating the states before and after it.

use super::invariants::{InvariantSet, InvariantViolation, RollingInvariants};
use super::{GameEngine, LIVE_CAPACITY, MoveOutcome, Position};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Why a placement was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// A winner exists.
    #[display("game is over")]
    GameOver,
    /// The cell holds a live piece.
    #[display("{_0} is occupied")]
    Occupied(Position),
}

impl From<Rejection> for MoveOutcome {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::GameOver => MoveOutcome::GameOver,
            Rejection::Occupied(pos) => MoveOutcome::Occupied(pos),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Preconditions
// ─────────────────────────────────────────────────────────────

/// Composite precondition: the game is still open and the cell is free.
pub struct LegalPlacement;

impl LegalPlacement {
    /// Validates all preconditions for a placement.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameEngine) -> Result<(), Rejection> {
        if game.winner().is_some() {
            return Err(Rejection::GameOver);
        }
        if game.moves().is_occupied(pos) {
            return Err(Rejection::Occupied(pos));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Placement Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placements.
///
/// Preconditions:
/// - No winner yet
/// - Cell is free
///
/// Postconditions:
/// - Log grew by one, or stayed at capacity after evicting its head
/// - Turn flipped
/// - All [`RollingInvariants`] hold
pub struct PlacementContract;

impl Contract<GameEngine, Position> for PlacementContract {
    fn pre(game: &GameEngine, pos: &Position) -> Result<(), Rejection> {
        LegalPlacement::check(*pos, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match RollingInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        let expected_len = (before.moves().len() + 1).min(LIVE_CAPACITY);
        if after.moves().len() != expected_len {
            violations.push(InvariantViolation::new(format!(
                "Log length {} after placement, expected {}",
                after.moves().len(),
                expected_len
            )));
        }
        if after.current_turn() != before.current_turn().opponent() {
            violations.push(InvariantViolation::new("Turn did not flip after placement"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                warn!(%violation, "Placement postcondition failed");
            }
            Err(violations)
        }
    }
}
