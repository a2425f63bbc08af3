//! Unique cells invariant: a cell holds at most one live piece.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: no two live moves share a position.
pub struct UniqueCellsInvariant;

impl Invariant<GameEngine> for UniqueCellsInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut seen = [false; 9];
        game.moves().iter().all(|m| {
            let idx = m.position.to_index();
            !std::mem::replace(&mut seen[idx], true)
        })
    }

    fn description() -> &'static str {
        "Each cell holds at most one live piece"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(UniqueCellsInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_occupied_attempt_keeps_cells_unique() {
        let mut game = GameEngine::new();
        game.apply_move(1, 1);
        game.apply_move(1, 1);
        assert!(UniqueCellsInvariant::holds(&game));
        assert_eq!(game.moves().len(), 1);
    }

    #[test]
    fn test_duplicate_cell_violates() {
        let mut game = GameEngine::new();
        game.apply_move(0, 0);
        game.log.push(Move::new(Player::O, Position::TopLeft));
        assert!(!UniqueCellsInvariant::holds(&game));
    }
}
