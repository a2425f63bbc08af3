//! Cells of the 3x3 board.
//!
//! Coordinates follow the board's `(x, y)` convention: `x` selects the row
//! and `y` the column, both in `0..3`.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left, `(0, 0)`
    TopLeft,
    /// Top-center, `(0, 1)`
    TopCenter,
    /// Top-right, `(0, 2)`
    TopRight,
    /// Middle-left, `(1, 0)`
    MiddleLeft,
    /// Center, `(1, 1)`
    Center,
    /// Middle-right, `(1, 2)`
    MiddleRight,
    /// Bottom-left, `(2, 0)`
    BottomLeft,
    /// Bottom-center, `(2, 1)`
    BottomCenter,
    /// Bottom-right, `(2, 2)`
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from row `x` and column `y`.
    ///
    /// Returns `None` when either coordinate is outside `0..3`.
    pub fn from_coords(x: usize, y: usize) -> Option<Self> {
        if x >= 3 || y >= 3 {
            return None;
        }
        Self::from_index(x * 3 + y)
    }

    /// Row of this position.
    pub fn x(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position.
    pub fn y(self) -> usize {
        self.to_index() % 3
    }

    /// Converts position to board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Parses a 1-based cell number (as shown on the text board) or a label.
    ///
    /// Labels are matched case-insensitively; spaces and underscores are
    /// accepted in place of the hyphen.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let wanted = s.to_lowercase().replace([' ', '_'], "-");
        <Position as strum::IntoEnumIterator>::iter().find(|pos| pos.label().to_lowercase() == wanted)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.x(), self.y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for pos in Position::ALL {
            assert_eq!(Position::from_coords(pos.x(), pos.y()), Some(pos));
        }
    }

    #[test]
    fn test_x_is_row_y_is_column() {
        assert_eq!(Position::from_coords(0, 2), Some(Position::TopRight));
        assert_eq!(Position::from_coords(2, 0), Some(Position::BottomLeft));
    }

    #[test]
    fn test_out_of_range_coords() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
    }

    #[test]
    fn test_from_number_is_one_based() {
        assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
        assert_eq!(Position::from_label_or_number("9"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(Position::from_label_or_number("10"), None);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Position::from_label_or_number("center"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("Top Center"), Some(Position::TopCenter));
        assert_eq!(Position::from_label_or_number("bottom_right"), Some(Position::BottomRight));
        assert_eq!(Position::from_label_or_number("middle"), None);
    }
}
