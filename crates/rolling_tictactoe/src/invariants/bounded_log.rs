//! Bounded log invariant: at most three pieces per player are live.

use super::super::{GameEngine, LIVE_CAPACITY, Player};
use super::Invariant;

/// Invariant: the log never exceeds [`LIVE_CAPACITY`] entries and neither
/// player has more than half of them.
pub struct BoundedLogInvariant;

impl Invariant<GameEngine> for BoundedLogInvariant {
    fn holds(game: &GameEngine) -> bool {
        let per_player = |player: Player| game.moves().iter().filter(|m| m.player == player).count();
        game.moves().len() <= LIVE_CAPACITY
            && per_player(Player::X) <= LIVE_CAPACITY / 2
            && per_player(Player::O) <= LIVE_CAPACITY / 2
    }

    fn description() -> &'static str {
        "At most six live pieces, three per player"
    }
}
