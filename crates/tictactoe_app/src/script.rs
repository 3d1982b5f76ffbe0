//! Headless runner playing a fixed list of moves.

use crate::announce;
use derive_getters::Getters;
use serde::Serialize;
use std::fmt::Write as _;
use tictactoe_core::{Board, GameController, Player, Position, RoundOutcome, RoundStatus};
use tracing::{info, instrument, warn};

/// One scripted move and what the controller made of it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MoveRecord {
    /// Move as typed.
    input: String,
    /// Parsed coordinates, if the input made sense.
    position: Option<Position>,
    /// Name of the player the move was played for.
    player: String,
    /// Controller outcome.
    outcome: RoundOutcome,
    /// Why the move was rejected.
    error: Option<String>,
}

/// Summary of a scripted round.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct ScriptReport {
    /// Every move that was attempted.
    moves: Vec<MoveRecord>,
    /// Moves never attempted because the round ended first.
    skipped: Vec<String>,
    /// Status once the script stopped.
    status: RoundStatus,
    /// Winner's name, if any.
    winner: Option<String>,
    /// Player to move next while the round is open.
    next: Option<String>,
    /// Final board.
    board: Board,
    /// Players with their scores.
    players: [Player; 2],
}

/// Plays `moves` in order for alternating players.
///
/// Unparseable or rejected moves are recorded and skipped without losing the
/// turn. Playing stops at the first win or draw.
#[instrument(skip(game, moves), fields(count = moves.len()))]
pub fn run_script<S: AsRef<str>>(game: &mut GameController, moves: &[S]) -> ScriptReport {
    let mut records = Vec::with_capacity(moves.len());
    let size = game.board().size();
    let mut remaining = moves.iter();

    for input in remaining.by_ref() {
        let input = input.as_ref();
        let player = game.active_player().name().clone();

        let (position, outcome, error) = match Position::parse(input, size) {
            None => {
                warn!(input, "Unparseable move");
                let error = format!("Could not parse move '{input}'");
                (None, RoundOutcome::Invalid, Some(error))
            }
            Some(position) => match game.try_play(position) {
                Ok(outcome) => (Some(position), outcome, None),
                Err(e) => {
                    warn!(input, error = %e, "Move rejected");
                    (Some(position), RoundOutcome::Invalid, Some(e.to_string()))
                }
            },
        };

        records.push(MoveRecord {
            input: input.to_string(),
            position,
            player,
            outcome,
            error,
        });

        if outcome.ends_round() {
            break;
        }
    }

    let skipped: Vec<String> = remaining.map(|m| m.as_ref().to_string()).collect();
    let (winner, next) = match game.status() {
        RoundStatus::Won(token) => (Some(game.player(token).name().clone()), None),
        RoundStatus::Drawn => (None, None),
        RoundStatus::InProgress => (None, Some(game.active_player().name().clone())),
    };
    info!(status = %game.status(), moves = records.len(), skipped = skipped.len(), "Script finished");

    ScriptReport {
        moves: records,
        skipped,
        status: game.status(),
        winner,
        next,
        board: game.board().clone(),
        players: game.players().clone(),
    }
}

/// Plain-text rendering of a report.
pub fn render_text(report: &ScriptReport) -> String {
    let mut out = String::new();

    for record in &report.moves {
        match (&record.position, &record.error) {
            (_, Some(error)) => {
                let _ = writeln!(out, "{}: '{}' rejected: {}", record.player, record.input, error);
            }
            (Some(position), None) => {
                let _ = writeln!(out, "{} plays {}: {}", record.player, position, record.outcome);
            }
            (None, None) => {}
        }
    }
    if !report.skipped.is_empty() {
        let _ = writeln!(out, "Ignored after round end: {}", report.skipped.join(" "));
    }

    let _ = writeln!(out);
    let _ = write!(out, "{}", report.board);
    let _ = writeln!(out);

    let headline = match (&report.status, &report.winner, &report.next) {
        (RoundStatus::Won(_), Some(name), _) => format!("{name} has won this round!"),
        (RoundStatus::Drawn, _, _) => announce::TIE_MESSAGE.to_string(),
        (_, _, Some(name)) => format!("It's {name}'s turn!"),
        _ => String::new(),
    };
    let _ = writeln!(out, "{headline}");
    let _ = writeln!(out, "{}", announce::score_line(&report.players));
    out
}
