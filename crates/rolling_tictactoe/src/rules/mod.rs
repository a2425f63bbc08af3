//! Game rules for rolling tic-tac-toe.
//!
//! Pure functions over the live move log. Rules are separated from the
//! engine so contracts and invariants can reuse them.

pub mod win;

pub use win::{Orientation, WIN_PATTERNS, check_winner, has_won, winning_line, winning_lines};
