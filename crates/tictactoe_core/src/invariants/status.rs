//! Status invariant: the recorded round status agrees with the board.

use super::Invariant;
use crate::GameController;

/// Invariant: the stored round status equals the status derived from the board.
pub struct StatusMatchesBoardInvariant;

impl Invariant<GameController> for StatusMatchesBoardInvariant {
    fn holds(game: &GameController) -> bool {
        game.status() == game.derived_status()
    }

    fn description() -> &'static str {
        "Round status matches the board"
    }
}
