//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rolling_tictactoe::Position;

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (x, y) = (cursor.x(), cursor.y());
    let (x, y) = match key {
        KeyCode::Up => (x.saturating_sub(1), y),
        KeyCode::Down => ((x + 1).min(2), y),
        KeyCode::Left => (x, y.saturating_sub(1)),
        KeyCode::Right => (x, (y + 1).min(2)),
        _ => (x, y),
    };
    Position::from_coords(x, y).unwrap_or(cursor)
}

/// Maps digit keys 1-9 to cells in row-major order.
pub fn digit_cell(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| Position::from_label_or_number(&d.to_string())),
        _ => None,
    }
}
