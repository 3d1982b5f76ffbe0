//! Tic-tac-toe rounds - board, rules and turn controller.
//!
//! # Architecture
//!
//! - **Board**: square grid of cells with mark / win / full / reset operations
//! - **Rules**: pure win and draw checks over a board
//! - **Controller**: two players, turn order, round outcomes and scores
//! - **Invariants**: properties the controller keeps after every move
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, RoundOutcome};
//!
//! let mut game = GameController::new("Ada", "Grace");
//! assert_eq!(game.play_round(0, 0), RoundOutcome::Continue);
//! assert_eq!(game.active_player().name(), "Grace");
//! assert_eq!(game.play_round(0, 0), RoundOutcome::Invalid);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use board::{Board, MIN_SIZE, STANDARD_SIZE};
pub use controller::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, GameController};
pub use error::{BoardError, MoveError};
pub use invariants::{ControllerInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use types::{Cell, Player, RoundOutcome, RoundStatus, Token};
