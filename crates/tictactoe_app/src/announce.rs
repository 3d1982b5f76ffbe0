//! User-facing messages shared by the terminal UI and the scripted runner.

use tictactoe_core::{GameController, Player, RoundStatus};

/// Message shown when a round ends without a winner.
pub const TIE_MESSAGE: &str = "This game has ended in a tie!";

/// Prompt for starting another round.
pub const PLAY_AGAIN_PROMPT: &str = "Play again? (y / n)";

/// Whose move it is.
pub fn turn_message(player: &Player) -> String {
    format!("It's {}'s turn!", player.name())
}

/// Round won by `player`.
pub fn win_message(player: &Player) -> String {
    format!("{} has won this round!", player.name())
}

/// `Name: score` for each player.
pub fn score_line(players: &[Player; 2]) -> String {
    players
        .iter()
        .map(|p| format!("{}: {}", p.name(), p.score()))
        .collect::<Vec<_>>()
        .join("  |  ")
}

/// Headline for the controller's current state.
pub fn status_message(game: &GameController) -> String {
    match game.status() {
        RoundStatus::InProgress => turn_message(game.active_player()),
        RoundStatus::Won(token) => win_message(game.player(token)),
        RoundStatus::Drawn => TIE_MESSAGE.to_string(),
    }
}
