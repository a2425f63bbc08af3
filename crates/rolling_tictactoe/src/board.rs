//! Read-only board snapshot for front-ends.

use super::{MoveLog, Player, Position};

/// A live piece as the board shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Owner of the piece.
    pub player: Player,
    /// Recency tier, 1 (newest) to 3 (oldest).
    pub stage: usize,
}

/// 3x3 board built from the live move log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Option<Cell>; 9],
}

impl Board {
    /// Lays the live pieces of `log` onto a board.
    pub fn from_log(log: &MoveLog) -> Self {
        let mut cells = [None; 9];
        for mov in log {
            cells[mov.position.to_index()] = log.stage_of(mov.position).map(|stage| Cell {
                player: mov.player,
                stage,
            });
        }
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Option<Cell>; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    None => (pos + 1).to_string(),
                    Some(cell) => cell.player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
