//! Application state and key handling.

use super::input::move_cursor;
use crate::announce;
use crossterm::event::KeyCode;
use tictactoe_core::{GameController, Position};
use tracing::{debug, info, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
pub struct App {
    game: GameController,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates the app around a freshly constructed controller.
    pub fn new(game: GameController) -> Self {
        let status_message = announce::status_message(&game);
        let center = game.board().size() / 2;
        Self {
            game,
            cursor: Position::new(center, center),
            status_message,
        }
    }

    /// The controller being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current announcement.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True while the play-again prompt is showing.
    pub fn awaiting_play_again(&self) -> bool {
        self.game.is_round_over()
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if matches!(key, KeyCode::Char('q') | KeyCode::Esc) {
            info!("User quit");
            return Control::Quit;
        }

        if self.awaiting_play_again() {
            return match key {
                KeyCode::Char('y') | KeyCode::Char('r') | KeyCode::Enter => {
                    self.play_again();
                    Control::Continue
                }
                KeyCode::Char('n') => Control::Quit,
                _ => Control::Continue,
            };
        }

        match key {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key, self.game.board().size());
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = Position::parse(&c.to_string(), self.game.board().size()) {
                    self.cursor = position;
                    self.play(position);
                }
            }
            _ => {}
        }
        Control::Continue
    }

    /// Plays the active player's mark at `position` and updates the announcement.
    pub fn play(&mut self, position: Position) {
        match self.game.try_play(position) {
            Ok(outcome) => {
                debug!(%position, %outcome, "Move applied");
                self.status_message = if outcome.ends_round() {
                    announce::status_message(&self.game)
                } else {
                    announce::turn_message(self.game.active_player())
                };
            }
            Err(e) => {
                debug!(%position, error = %e, "Move ignored");
                self.status_message = format!(
                    "{}. {}",
                    e,
                    announce::turn_message(self.game.active_player())
                );
            }
        }
    }

    /// Clears the board for another round, keeping scores.
    pub fn play_again(&mut self) {
        debug!("Starting another round");
        self.game.reset_board();
        self.status_message = announce::status_message(&self.game);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Token;

    fn app() -> App {
        App::new(GameController::new("Ada", "Grace"))
    }

    #[test]
    fn test_starts_centered_with_turn_message() {
        let app = app();
        assert_eq!(app.cursor(), Position::new(1, 1));
        assert_eq!(app.status_message(), "It's Ada's turn!");
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(
            app.game().board().get(0, 1).and_then(|c| c.owner()),
            Some(Token::One)
        );
        assert_eq!(app.status_message(), "It's Grace's turn!");
    }

    #[test]
    fn test_occupied_cell_keeps_turn() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().active_player().name(), "Grace");
        assert!(app.status_message().contains("already occupied"));
        assert!(app.status_message().ends_with("It's Grace's turn!"));
    }

    #[test]
    fn test_play_again_keeps_scores() {
        let mut app = app();
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert!(app.awaiting_play_again());
        assert_eq!(app.status_message(), "Ada has won this round!");

        // Board keys do nothing while the prompt is up.
        assert_eq!(app.handle_key(KeyCode::Char('9')), Control::Continue);
        assert!(app.game().board().get(2, 2).is_some_and(|c| c.is_empty()));

        assert_eq!(app.handle_key(KeyCode::Char('y')), Control::Continue);
        assert!(!app.awaiting_play_again());
        assert_eq!(*app.game().player(Token::One).score(), 1);
        assert_eq!(app.game().round_number(), 2);
        assert_eq!(app.status_message(), "It's Ada's turn!");
    }

    #[test]
    fn test_draw_announced() {
        let mut app = app();
        for key in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.status_message(), announce::TIE_MESSAGE);
        assert_eq!(app.handle_key(KeyCode::Char('n')), Control::Quit);
    }

    #[test]
    fn test_message_follows_each_move() {
        let mut app = app();
        for (key, expected) in [
            ('1', "It's Grace's turn!"),
            ('4', "It's Ada's turn!"),
            ('2', "It's Grace's turn!"),
            ('5', "It's Ada's turn!"),
            ('3', "Ada has won this round!"),
        ] {
            app.handle_key(KeyCode::Char(key));
            assert_eq!(app.status_message(), expected);
        }
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(app().handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app().handle_key(KeyCode::Esc), Control::Quit);
    }
}
