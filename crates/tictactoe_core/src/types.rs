//! Core domain types for tic-tac-toe rounds.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Token placed on the board by one of the two players.
///
/// Player one marks with [`Token::One`] (shown as `X`), player two with
/// [`Token::Two`] (shown as `O`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Token {
    /// Player one (moves first).
    #[display("X")]
    One,
    /// Player two.
    #[display("O")]
    Two,
}

impl Token {
    /// Returns the opposing token.
    pub fn opponent(self) -> Self {
        match self {
            Token::One => Token::Two,
            Token::Two => Token::One,
        }
    }

    /// Numeric value of the token (1 or 2). Zero is reserved for empty cells.
    pub fn value(self) -> u8 {
        match self {
            Token::One => 1,
            Token::Two => 2,
        }
    }

    /// Looks up a token by numeric value.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Token::One),
            2 => Some(Token::Two),
            _ => None,
        }
    }

    /// Index into a two-element player array.
    pub(crate) fn index(self) -> usize {
        match self {
            Token::One => 0,
            Token::Two => 1,
        }
    }
}

/// A single square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No player has marked this cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Owned(Token),
}

impl Cell {
    /// Numeric view of the cell: 0 when empty, otherwise the token value.
    pub fn value(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Owned(token) => token.value(),
        }
    }

    /// Returns the owning token, if any.
    pub fn owner(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::Owned(token) => Some(token),
        }
    }

    /// True if no player has marked the cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Symbol used when printing the board.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Owned(Token::One) => "X",
            Cell::Owned(Token::Two) => "O",
        }
    }
}

/// One of the two participants, persisting across rounds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Token this player marks with.
    token: Token,
    /// Rounds won so far.
    score: u32,
}

impl Player {
    /// Creates a player with a zero score.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, token: Token) -> Self {
        Self {
            name: name.as_ref().to_string(),
            token,
            score: 0,
        }
    }

    /// Records a round win.
    pub(crate) fn add_win(&mut self) {
        self.score += 1;
    }
}

/// Whether the current round is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display)]
pub enum RoundStatus {
    /// Moves are still accepted.
    #[default]
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("won by {_0}")]
    Won(Token),
    /// Board filled without a winner.
    #[display("drawn")]
    Drawn,
}

impl RoundStatus {
    /// True once the round has a winner or ended in a draw.
    pub fn is_over(self) -> bool {
        self != RoundStatus::InProgress
    }
}

/// Result of asking the controller to play a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum RoundOutcome {
    /// Move rejected; nothing changed.
    #[display("invalid")]
    Invalid,
    /// Mark placed; the other player is up.
    #[display("continue")]
    Continue,
    /// Mark placed and completed a line for the active player.
    #[display("win")]
    Win,
    /// Mark placed and filled the board without a winner.
    #[display("draw")]
    Draw,
}

impl RoundOutcome {
    /// True for outcomes that end the round.
    pub fn ends_round(self) -> bool {
        matches!(self, RoundOutcome::Win | RoundOutcome::Draw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_token_values_skip_zero() {
        assert_eq!(Token::One.value(), 1);
        assert_eq!(Token::Two.value(), 2);
        assert_eq!(Token::from_value(0), None);
        assert_eq!(Token::from_value(2), Some(Token::Two));
        assert_eq!(Cell::Empty.value(), 0);
    }

    #[test]
    fn test_opponent_is_involution() {
        for token in Token::iter() {
            assert_ne!(token.opponent(), token);
            assert_eq!(token.opponent().opponent(), token);
        }
    }

    #[test]
    fn test_player_starts_at_zero() {
        let mut player = Player::new("Ada", Token::One);
        assert_eq!(*player.score(), 0);
        player.add_win();
        assert_eq!(*player.score(), 1);
        assert_eq!(player.name(), "Ada");
    }

    #[test]
    fn test_status_display() {
        assert_eq!(RoundStatus::Won(Token::Two).to_string(), "won by O");
        assert!(RoundStatus::Drawn.is_over());
        assert!(!RoundStatus::InProgress.is_over());
    }
}
