//! Stateless UI rendering for rolling tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rolling_tictactoe::{Board, Cell, Player, Position};

/// Renders the board, status banner and key hints.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status
            Constraint::Length(1), // Keys
        ])
        .split(frame.area());

    let title = Paragraph::new("Rolling Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);

    let mut status = vec![Line::from(app.status_message())];
    if let Some(event) = app.last_event() {
        status.push(Line::from(Span::styled(event, Style::default().fg(Color::DarkGray))));
    }
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let keys = Paragraph::new("arrows move · enter/space place · 1-9 place · r restart · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let board = app.game().board();
    let winning = app.game().winning_line();
    let view = BoardView {
        board: &board,
        winning: winning.as_ref(),
        cursor: app.cursor(),
        show_stages: app.show_stages(),
    };

    for (x, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, row_area, &view, x);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, view: &BoardView<'_>, x: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (y, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_coords(x, y) {
            draw_cell(frame, cell_area, view, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

/// Per-frame board state shared by every cell.
struct BoardView<'a> {
    board: &'a Board,
    winning: Option<&'a [Position; 3]>,
    cursor: Position,
    show_stages: bool,
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &BoardView<'_>, pos: Position) {
    let winning = view.winning.is_some_and(|line| line.contains(&pos));

    let (symbol, base_style) = match view.board.get(pos) {
        None => ("   ", Style::default().fg(Color::DarkGray)),
        Some(cell) => (piece_symbol(cell.player), piece_style(cell, view.show_stages)),
    };

    let style = if pos == view.cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    // Vertically center the symbol in the 3-line cell.
    let lines = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn piece_symbol(player: Player) -> &'static str {
    match player {
        Player::X => " X ",
        Player::O => " O ",
    }
}

/// Newest pieces are bold, the oldest pair is dimmed.
fn piece_style(cell: Cell, show_stages: bool) -> Style {
    let color = match cell.player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    let style = Style::default().fg(color);
    if !show_stages {
        return style.add_modifier(Modifier::BOLD);
    }
    match cell.stage {
        1 => style.add_modifier(Modifier::BOLD),
        2 => style,
        _ => style.add_modifier(Modifier::DIM),
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_turn_banner() {
        let app = App::new(true);
        let screen = render(&app);
        assert!(screen.contains("Rolling Tic Tac Toe"));
        assert!(screen.contains("X's turn"));
    }

    #[test]
    fn test_renders_pieces() {
        let mut app = App::new(true);
        app.select(Position::TopLeft);
        app.select(Position::BottomRight);
        let screen = render(&app);
        assert!(screen.contains(" X "));
        assert!(screen.contains(" O "));
    }

    #[test]
    fn test_winning_line_highlighted() {
        let mut app = App::new(true);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ] {
            app.select(pos);
        }
        assert!(app.game().is_over());

        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        let highlighted = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|c| c.bg == Color::Green && c.symbol() == "X")
            .count();
        assert_eq!(highlighted, 3);
    }

    #[test]
    fn test_stage_styles() {
        let newest = Cell { player: Player::X, stage: 1 };
        let oldest = Cell { player: Player::O, stage: 3 };

        assert!(piece_style(newest, true).add_modifier.contains(Modifier::BOLD));
        assert!(piece_style(oldest, true).add_modifier.contains(Modifier::DIM));
        assert!(!piece_style(oldest, false).add_modifier.contains(Modifier::DIM));
    }
}
