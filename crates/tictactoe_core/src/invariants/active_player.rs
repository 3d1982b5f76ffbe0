//! Active player invariant: the turn pointer agrees with the marks on the board.

use super::Invariant;
use crate::{GameController, Token};

/// Invariant: the active player is consistent with the mark counts.
///
/// While the round is open, player one is active exactly when both players
/// have the same number of marks. Once the round is over the active player
/// is whoever placed the last mark.
pub struct ActiveMatchesMarksInvariant;

impl Invariant<GameController> for ActiveMatchesMarksInvariant {
    fn holds(game: &GameController) -> bool {
        let one = game.board().marks(Token::One);
        let two = game.board().marks(Token::Two);

        let expected = match (game.is_round_over(), one == two) {
            (false, true) | (true, false) => Token::One,
            (false, false) | (true, true) => Token::Two,
        };

        game.active_token() == expected
    }

    fn description() -> &'static str {
        "Active player matches the marks on the board"
    }
}
