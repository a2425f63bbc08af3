//! Winner consistency invariant: the cached winner matches the live log.

use super::super::{GameEngine, rules};
use super::Invariant;

/// Invariant: the reported winner is exactly what win detection computes
/// from the live pieces.
pub struct WinnerConsistentInvariant;

impl Invariant<GameEngine> for WinnerConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        game.winner() == rules::check_winner(game.moves())
    }

    fn description() -> &'static str {
        "Winner matches the live pieces"
    }
}
