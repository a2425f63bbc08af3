//! The `replay` command: apply a move list and report the result.

use anyhow::{Context, Result};
use rolling_games::parse_cells;
use rolling_tictactoe::{GameEngine, MoveOutcome};
use std::io::Write;
use tracing::{info, instrument};

/// Replays `cells` from a new game and writes the report to `out`.
#[instrument(skip(out, cells), fields(count = cells.len()))]
pub fn run_replay(cells: &[String], json: bool, out: &mut impl Write) -> Result<()> {
    let positions = parse_cells(cells).context("Invalid move list")?;
    let (game, outcomes) = GameEngine::replay(&positions);
    info!(
        placed = outcomes.iter().filter(|o| o.is_placed()).count(),
        winner = ?game.winner(),
        "Replay finished"
    );

    if json {
        serde_json::to_writer_pretty(&mut *out, &game.snapshot())
            .context("Failed to serialize game")?;
        writeln!(out)?;
        return Ok(());
    }

    for (turn, outcome) in outcomes.iter().enumerate() {
        let note = match outcome {
            MoveOutcome::Placed { .. } => String::new(),
            _ => " (ignored)".to_string(),
        };
        writeln!(out, "{:>2}. {}{}", turn + 1, outcome, note)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", game.board())?;
    writeln!(out)?;
    match game.winner() {
        Some(winner) => writeln!(out, "{} wins", winner)?,
        None => writeln!(out, "{}'s turn", game.current_turn())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(cells: &[&str], json: bool) -> Result<String> {
        let cells: Vec<String> = cells.iter().map(|c| c.to_string()).collect();
        let mut out = Vec::new();
        run_replay(&cells, json, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_report_lists_outcomes_and_winner() {
        let report = replay(&["00", "10", "01", "11", "02", "12"], false).unwrap();

        assert!(report.contains(" 1. placed X:(0,0)"));
        assert!(report.contains(" 6. game is over (ignored)"));
        assert!(report.contains("X|X|X"));
        assert!(report.trim_end().ends_with("X wins"));
    }

    #[test]
    fn test_report_shows_turn_when_open() {
        let report = replay(&["11", "11"], false).unwrap();

        assert!(report.contains("is occupied (ignored)"));
        assert!(report.trim_end().ends_with("O's turn"));
    }

    #[test]
    fn test_json_snapshot() {
        let report = replay(&["center", "0,0"], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["current_turn"], "X");
        assert_eq!(value["moves"].as_array().map(|m| m.len()), Some(2));
    }

    #[test]
    fn test_bad_cell_is_an_error() {
        assert!(replay(&["00", "99"], false).is_err());
    }
}
