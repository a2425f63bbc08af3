//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: players alternate turns.
///
/// Consecutive live moves belong to different players and the player to
/// move is the opponent of the latest mover. Eviction only removes the
/// head, so alternation survives it. An empty log means X is to move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let moves = game.moves().to_vec();

        let alternates = moves.windows(2).all(|w| w[0].player != w[1].player);
        let expected_next = moves
            .last()
            .map(|m| m.player.opponent())
            .unwrap_or(Player::X);

        alternates && game.current_turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
