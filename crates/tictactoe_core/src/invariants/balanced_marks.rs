//! Balanced marks invariant: player one is never behind, never two ahead.

use super::Invariant;
use crate::{GameController, Token};

/// Invariant: `marks(One) - marks(Two)` is 0 or 1.
///
/// Holds because player one opens every round and turns strictly alternate.
pub struct BalancedMarksInvariant;

impl Invariant<GameController> for BalancedMarksInvariant {
    fn holds(game: &GameController) -> bool {
        let one = game.board().marks(Token::One);
        let two = game.board().marks(Token::Two);
        one == two || one == two + 1
    }

    fn description() -> &'static str {
        "Player one has the same number of marks as player two, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_after_moves() {
        let mut game = GameController::default();
        assert!(BalancedMarksInvariant::holds(&game));
        game.play_round(0, 0);
        assert!(BalancedMarksInvariant::holds(&game));
        game.play_round(1, 1);
        assert!(BalancedMarksInvariant::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = GameController::default();
        game.play_round(0, 0);
        game.board_mut().mark(2, 2, Token::One);
        assert!(!BalancedMarksInvariant::holds(&game));
    }
}
