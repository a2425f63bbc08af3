//! Application state and logic.

use super::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use rolling_tictactoe::{GameEngine, MoveOutcome, Position};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    game: GameEngine,
    cursor: Position,
    show_stages: bool,
    last_event: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_stages: bool) -> Self {
        Self {
            game: GameEngine::new(),
            cursor: Position::Center,
            show_stages,
            last_event: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether pieces are styled by age.
    pub fn show_stages(&self) -> bool {
        self.show_stages
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Turn or result banner.
    pub fn status_message(&self) -> String {
        match self.game.winner() {
            Some(winner) => format!("{} wins! Press 'r' to restart or 'q' to quit.", winner),
            None => format!("{}'s turn", self.game.current_turn()),
        }
    }

    /// What the last placement did, if worth mentioning.
    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            other => {
                if let Some(pos) = digit_cell(other) {
                    self.cursor = pos;
                    self.select(pos);
                }
            }
        }
    }

    /// Forwards a cell selection to the engine.
    pub fn select(&mut self, pos: Position) {
        let outcome = self.game.apply_move(pos.x(), pos.y());
        debug!(%outcome, "Selection handled");
        self.last_event = match outcome {
            MoveOutcome::Placed { evicted: Some(evicted), .. } => {
                Some(format!("{}'s piece at {} rolled off", evicted.player, evicted.position.label()))
            }
            MoveOutcome::Placed { evicted: None, .. } | MoveOutcome::GameOver => None,
            MoveOutcome::Occupied(pos) => Some(format!("{} is taken", pos.label())),
            MoveOutcome::OutOfBounds { .. } => None,
        };
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
        self.last_event = None;
    }
}
