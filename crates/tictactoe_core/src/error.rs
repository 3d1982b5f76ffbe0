//! Error types for board construction and moves.

use derive_more::Display;

use crate::Position;

/// Error constructing a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Boards smaller than 3x3 have no meaningful lines.
    #[display("Board size {_0} is too small (minimum is 3)")]
    TooSmall(usize),

    /// Stored cells do not fill a `size`x`size` grid.
    #[display("Board needs {expected} cells but {found} were given")]
    CellCount {
        /// Cells required by the board size.
        expected: usize,
        /// Cells supplied.
        found: usize,
    },
}

impl std::error::Error for BoardError {}

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The cell already carries a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Position),

    /// Coordinates fall outside the board.
    #[display("Cell {position} is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested coordinates.
        position: Position,
        /// Board dimension.
        size: usize,
    },

    /// The round already ended in a win or draw.
    #[display("Round is already over")]
    RoundOver,
}

impl std::error::Error for MoveError {}
