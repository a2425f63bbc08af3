//! Ordered log of live pieces, oldest first.

use super::{Move, Player, Position};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Maximum number of live pieces on the board (three per player).
pub const LIVE_CAPACITY: usize = 6;

/// Insertion-ordered log of the pieces currently on the board.
///
/// The head is the oldest live piece. Pushing onto a full log evicts the
/// head first, so the log never holds more than [`LIVE_CAPACITY`] entries.
/// The log does not check for occupied cells; that is a precondition of
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: VecDeque<Move>,
}

impl MoveLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self {
            moves: VecDeque::with_capacity(LIVE_CAPACITY),
        }
    }

    /// Appends a move, evicting the oldest one if the log is full.
    ///
    /// Returns the evicted move.
    #[instrument(skip(self), fields(len = self.moves.len()))]
    pub fn push(&mut self, mov: Move) -> Option<Move> {
        let evicted = if self.moves.len() >= LIVE_CAPACITY {
            self.moves.pop_front()
        } else {
            None
        };
        if let Some(old) = evicted {
            debug!(evicted = %old, "Oldest piece rolled off");
        }
        self.moves.push_back(mov);
        evicted
    }

    /// Returns the live move at `pos`, if any.
    pub fn find(&self, pos: Position) -> Option<&Move> {
        self.moves.iter().find(|m| m.position == pos)
    }

    /// Returns the log index of the move at `pos` (oldest is 0).
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        self.moves.iter().position(|m| m.position == pos)
    }

    /// Recency tier of the piece at `pos`: 1 for the newest two pieces,
    /// 2 for the two before them, 3 for the oldest two.
    pub fn stage_of(&self, pos: Position) -> Option<usize> {
        let index = self.index_of(pos)?;
        let from_newest = self.moves.len() - 1 - index;
        Some(from_newest / 2 + 1)
    }

    /// Checks whether `pos` holds a live piece.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.find(pos).is_some()
    }

    /// Checks whether `player` has a live piece at `pos`.
    pub fn holds(&self, player: Player, pos: Position) -> bool {
        self.find(pos).is_some_and(|m| m.player == player)
    }

    /// Number of live pieces.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns true if no pieces are live.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The oldest live move.
    pub fn oldest(&self) -> Option<&Move> {
        self.moves.front()
    }

    /// The most recent move.
    pub fn latest(&self) -> Option<&Move> {
        self.moves.back()
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + ExactSizeIterator {
        self.moves.iter()
    }

    /// Copies the log into a vector, oldest first.
    pub fn to_vec(&self) -> Vec<Move> {
        self.moves.iter().copied().collect()
    }
}

impl<'a> IntoIterator for &'a MoveLog {
    type Item = &'a Move;
    type IntoIter = std::collections::vec_deque::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}
