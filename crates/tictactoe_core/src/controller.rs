//! Round controller: players, turn order and scoring.

use crate::error::MoveError;
use crate::invariants::{ControllerInvariants, InvariantSet};
use crate::rules;
use crate::{Board, Player, Position, RoundOutcome, RoundStatus, Token};
use tracing::{info, instrument, warn};

/// Name given to player one when none is supplied.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";

/// Name given to player two when none is supplied.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";

/// Drives rounds on a board owned by the controller.
///
/// Player one opens every round. The active player switches after each
/// accepted move that leaves the round open, and stays put when the move
/// wins or draws.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active: Token,
    status: RoundStatus,
    round: u32,
}

impl GameController {
    /// Creates a controller with a standard 3x3 board.
    #[instrument(skip(player_one, player_two))]
    pub fn new(player_one: impl AsRef<str>, player_two: impl AsRef<str>) -> Self {
        Self::with_board(player_one, player_two, Board::default())
    }

    /// Creates a controller around an existing board.
    ///
    /// The board is cleared so the first round starts empty.
    #[instrument(skip(player_one, player_two, board), fields(size = board.size()))]
    pub fn with_board(
        player_one: impl AsRef<str>,
        player_two: impl AsRef<str>,
        mut board: Board,
    ) -> Self {
        board.reset();
        let players = [
            Player::new(player_one, Token::One),
            Player::new(player_two, Token::Two),
        ];
        info!(
            player_one = %players[0].name(),
            player_two = %players[1].name(),
            "New game"
        );
        Self {
            board,
            players,
            active: Token::One,
            status: RoundStatus::InProgress,
            round: 1,
        }
    }

    /// Plays the active player's mark at `(row, col)`.
    ///
    /// Rejections (occupied cell, off-board coordinates, finished round)
    /// come back as [`RoundOutcome::Invalid`] and change nothing.
    pub fn play_round(&mut self, row: usize, col: usize) -> RoundOutcome {
        match self.try_play(Position::new(row, col)) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(row, col, error = %e, "Move rejected");
                RoundOutcome::Invalid
            }
        }
    }

    /// Plays the active player's mark at `position`.
    ///
    /// Never returns `Ok(RoundOutcome::Invalid)`.
    ///
    /// # Errors
    ///
    /// [`MoveError::RoundOver`] once the round has a result, otherwise
    /// whatever [`Board::try_mark`] reports.
    #[instrument(skip(self), fields(round = self.round, active = %self.active))]
    pub fn try_play(&mut self, position: Position) -> Result<RoundOutcome, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::RoundOver);
        }

        self.board.try_mark(position, self.active)?;

        let outcome = if self.board.is_winner(self.active) {
            self.status = RoundStatus::Won(self.active);
            self.players[self.active.index()].add_win();
            let winner = &self.players[self.active.index()];
            info!(winner = %winner.name(), score = winner.score(), "Round won");
            RoundOutcome::Win
        } else if self.board.is_full() {
            self.status = RoundStatus::Drawn;
            info!("Round drawn");
            RoundOutcome::Draw
        } else {
            self.active = self.active.opponent();
            RoundOutcome::Continue
        };

        debug_assert!(
            ControllerInvariants::check_all(self).is_ok(),
            "Controller invariants violated after {position}"
        );

        Ok(outcome)
    }

    /// Player whose mark the next accepted move places.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.index()]
    }

    /// Token of the active player.
    pub fn active_token(&self) -> Token {
        self.active
    }

    /// Both players, player one first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player marking with `token`.
    pub fn player(&self, token: Token) -> &Player {
        &self.players[token.index()]
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Status of the current round.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// True once the round has been won or drawn.
    pub fn is_round_over(&self) -> bool {
        self.status.is_over()
    }

    /// One-based number of the current round.
    pub fn round_number(&self) -> u32 {
        self.round
    }

    /// Starts a new round: empty board, player one to move. Scores are kept.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn reset_board(&mut self) {
        self.board.reset();
        self.active = Token::One;
        self.status = RoundStatus::InProgress;
        self.round += 1;
        info!(round = self.round, "New round");
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Status recomputed from the board alone.
    pub(crate) fn derived_status(&self) -> RoundStatus {
        match rules::winner(&self.board) {
            Some(token) => RoundStatus::Won(token),
            None if rules::is_full(&self.board) => RoundStatus::Drawn,
            None => RoundStatus::InProgress,
        }
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_player_one() {
        let game = GameController::default();
        assert_eq!(game.active_player().name(), DEFAULT_PLAYER_ONE);
        assert_eq!(*game.active_player().token(), Token::One);
        assert_eq!(game.status(), RoundStatus::InProgress);
        assert_eq!(game.round_number(), 1);
    }

    #[test]
    fn test_continue_switches_player() {
        let mut game = GameController::new("Ada", "Grace");
        assert_eq!(game.play_round(1, 1), RoundOutcome::Continue);
        assert_eq!(game.active_player().name(), "Grace");
        assert_eq!(game.play_round(0, 0), RoundOutcome::Continue);
        assert_eq!(game.active_player().name(), "Ada");
    }

    #[test]
    fn test_invalid_keeps_turn() {
        let mut game = GameController::default();
        game.play_round(1, 1);
        let before = game.active_token();
        assert_eq!(game.play_round(1, 1), RoundOutcome::Invalid);
        assert_eq!(game.play_round(5, 1), RoundOutcome::Invalid);
        assert_eq!(game.active_token(), before);
        assert_eq!(game.board().marks(Token::Two), 0);
    }

    #[test]
    fn test_try_play_reports_reason() {
        let mut game = GameController::default();
        game.play_round(0, 0);
        assert_eq!(
            game.try_play(Position::new(0, 0)),
            Err(MoveError::CellOccupied(Position::new(0, 0)))
        );
    }

    #[test]
    fn test_derived_status_tracks_board() {
        let mut game = GameController::default();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            game.play_round(row, col);
        }
        assert_eq!(game.derived_status(), RoundStatus::Won(Token::One));
        assert_eq!(game.status(), game.derived_status());
    }
}
