//! The rolling tic-tac-toe engine.
//!
//! [`GameEngine`] is the only owner of the move log and the turn pointer.
//! Front-ends forward cell selections through [`GameEngine::apply_move`]
//! and re-render from the read accessors afterwards. Illegal attempts are
//! ignored rather than reported as errors.

use super::contracts::{Contract, PlacementContract};
use super::{Board, Move, MoveLog, MoveOutcome, Player, Position, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Game state for one rolling tic-tac-toe match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) log: MoveLog,
    pub(crate) current_turn: Player,
    pub(crate) winner: Option<Player>,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            log: MoveLog::new(),
            current_turn: Player::X,
            winner: None,
        }
    }

    /// Places the current player's piece at row `x`, column `y`.
    ///
    /// The attempt is ignored, leaving the game untouched, when a winner
    /// exists, when the cell is occupied, or when the coordinates are off
    /// the board. Otherwise the oldest piece rolls off if six are live, the
    /// new piece is appended and the turn passes. The winner is recomputed
    /// from the live pieces on every call.
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn apply_move(&mut self, x: usize, y: usize) -> MoveOutcome {
        match Position::from_coords(x, y) {
            Some(pos) => self.place(pos),
            None => {
                warn!(x, y, "Coordinates off the board, ignoring");
                self.refresh_winner();
                MoveOutcome::OutOfBounds { x, y }
            }
        }
    }

    /// Places the current player's piece at `pos`.
    ///
    /// Same rules as [`GameEngine::apply_move`].
    #[instrument(skip(self), fields(player = %self.current_turn))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        let outcome = match PlacementContract::pre(self, &pos) {
            Ok(()) => self.commit(pos),
            Err(rejection) => {
                debug!(%rejection, "Placement ignored");
                rejection.into()
            }
        };
        self.refresh_winner();

        if let (MoveOutcome::Placed { placed, .. }, Some(winner)) = (outcome, self.winner) {
            info!(%winner, last = %placed, "Game won");
        }
        outcome
    }

    fn commit(&mut self, pos: Position) -> MoveOutcome {
        #[cfg(debug_assertions)]
        let before = self.clone();

        let placed = Move::new(self.current_turn, pos);
        let evicted = self.log.push(placed);
        self.current_turn = self.current_turn.opponent();
        debug!(%placed, evicted = ?evicted, "Piece placed");

        #[cfg(debug_assertions)]
        {
            self.refresh_winner();
            let checked = PlacementContract::post(&before, self);
            debug_assert!(checked.is_ok(), "placement broke invariants: {checked:?}");
        }

        MoveOutcome::Placed { placed, evicted }
    }

    fn refresh_winner(&mut self) {
        self.winner = rules::check_winner(&self.log);
    }

    /// Player to move next.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// The winner, if any player holds a complete line.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns true once a winner exists.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// The live pieces, oldest first.
    pub fn moves(&self) -> &MoveLog {
        &self.log
    }

    /// The live piece at row `x`, column `y`.
    pub fn piece_at(&self, x: usize, y: usize) -> Option<Move> {
        Position::from_coords(x, y).and_then(|pos| self.piece_at_position(pos))
    }

    /// The live piece at `pos`.
    pub fn piece_at_position(&self, pos: Position) -> Option<Move> {
        self.log.find(pos).copied()
    }

    /// Age tier of the piece at row `x`, column `y`.
    ///
    /// The two most recent pieces are stage 1, the two before them stage 2
    /// and the oldest two stage 3. `None` for an empty cell.
    pub fn stage_at(&self, x: usize, y: usize) -> Option<usize> {
        Position::from_coords(x, y).and_then(|pos| self.log.stage_of(pos))
    }

    /// The completed line of the winner, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winner
            .and_then(|winner| rules::winning_line(&self.log, winner))
    }

    /// Snapshot of every cell for rendering.
    pub fn board(&self) -> Board {
        Board::from_log(&self.log)
    }

    /// Serializable summary of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            moves: self.log.to_vec(),
            current_turn: self.current_turn,
            winner: self.winner,
        }
    }

    /// Starts over with an empty board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Plays `positions` in order from a new game.
    ///
    /// Returns the resulting game and the outcome of each attempt.
    #[instrument(skip(positions), fields(count = positions.len()))]
    pub fn replay(positions: &[Position]) -> (Self, Vec<MoveOutcome>) {
        let mut game = Self::new();
        let outcomes = positions.iter().map(|&pos| game.place(pos)).collect();
        (game, outcomes)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain-data view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Live pieces, oldest first.
    pub moves: Vec<Move>,
    /// Player to move next.
    pub current_turn: Player,
    /// The winner, if any.
    pub winner: Option<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize)]) -> GameEngine {
        let mut game = GameEngine::new();
        for &(x, y) in moves {
            game.apply_move(x, y);
        }
        game
    }

    #[test]
    fn test_new_game() {
        let game = GameEngine::new();
        assert_eq!(game.current_turn(), Player::X);
        assert_eq!(game.winner(), None);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn test_placement_flips_turn() {
        let mut game = GameEngine::new();
        let outcome = game.apply_move(1, 1);

        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                placed: Move::new(Player::X, Position::Center),
                evicted: None
            }
        );
        assert_eq!(game.current_turn(), Player::O);
        assert_eq!(game.piece_at(1, 1), Some(Move::new(Player::X, Position::Center)));
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut game = play(&[(1, 1)]);
        let before = game.clone();

        assert_eq!(game.apply_move(1, 1), MoveOutcome::Occupied(Position::Center));
        assert_eq!(game, before);
    }

    #[test]
    fn test_off_board_is_ignored() {
        let mut game = play(&[(1, 1)]);
        let before = game.clone();

        assert_eq!(game.apply_move(3, 0), MoveOutcome::OutOfBounds { x: 3, y: 0 });
        assert_eq!(game, before);
        assert_eq!(game.piece_at(0, 5), None);
        assert_eq!(game.stage_at(5, 0), None);
    }

    #[test]
    fn test_seventh_move_evicts_oldest() {
        let mut game = play(&[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0), (1, 0)]);
        let outcome = game.apply_move(1, 2);

        assert_eq!(outcome.evicted(), Some(Move::new(Player::X, Position::TopLeft)));
        assert_eq!(game.piece_at(0, 0), None);
        assert_eq!(game.moves().len(), 6);
    }

    #[test]
    fn test_stages_pair_up_by_recency() {
        let game = play(&[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0), (1, 0)]);

        assert_eq!(game.stage_at(1, 0), Some(1));
        assert_eq!(game.stage_at(2, 0), Some(1));
        assert_eq!(game.stage_at(0, 2), Some(2));
        assert_eq!(game.stage_at(2, 2), Some(2));
        assert_eq!(game.stage_at(1, 1), Some(3));
        assert_eq!(game.stage_at(0, 0), Some(3));
        assert_eq!(game.stage_at(2, 1), None);
    }

    #[test]
    fn test_stage_with_odd_count() {
        let game = play(&[(0, 0), (1, 1), (2, 2)]);

        assert_eq!(game.stage_at(2, 2), Some(1));
        assert_eq!(game.stage_at(1, 1), Some(1));
        assert_eq!(game.stage_at(0, 0), Some(2));
    }

    #[test]
    fn test_winning_line_reported() {
        let game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(game.winner(), Some(Player::X));
        assert!(game.is_over());
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        game.reset();
        assert_eq!(game, GameEngine::new());
    }

    #[test]
    fn test_replay_collects_outcomes() {
        let (game, outcomes) =
            GameEngine::replay(&[Position::Center, Position::Center, Position::TopLeft]);

        assert!(outcomes[0].is_placed());
        assert_eq!(outcomes[1], MoveOutcome::Occupied(Position::Center));
        assert!(outcomes[2].is_placed());
        assert_eq!(game.piece_at(0, 0).map(|m| m.player), Some(Player::O));
    }

    #[test]
    fn test_snapshot_serializes() {
        let game = play(&[(1, 1), (0, 0)]);
        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(json["current_turn"], "X");
        assert_eq!(json["winner"], serde_json::Value::Null);
        assert_eq!(json["moves"][0]["player"], "X");
        assert_eq!(json["moves"][0]["position"], "Center");
    }
}
