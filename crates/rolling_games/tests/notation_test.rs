//! Tests for replay move notation.

use rolling_games::{parse_cell, parse_cells};
use rolling_tictactoe::{GameEngine, Player, Position};

#[test]
fn test_mixed_notation_sequence() {
    let cells = parse_cells(&["00", "1,0", "top-center", "11", "0, 2"]).unwrap();
    assert_eq!(
        cells,
        vec![
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ]
    );

    let (game, _) = GameEngine::replay(&cells);
    assert_eq!(game.winner(), Some(Player::X));
}

#[test]
fn test_first_bad_token_fails_the_list() {
    let err = parse_cells(&["00", "nowhere", "11"]).unwrap_err();
    assert!(err.message.contains("nowhere"));
}

#[test]
fn test_error_display_carries_location() {
    let err = parse_cell("33").unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("Notation error: Cell (3,3) is off the board at "));
    assert!(text.contains("notation.rs"));
}
