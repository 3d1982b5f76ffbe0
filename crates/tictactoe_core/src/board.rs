//! Square tic-tac-toe board.

use crate::error::{BoardError, MoveError};
use crate::rules;
use crate::{Cell, Position, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Dimension used when no size is given.
pub const STANDARD_SIZE: usize = 3;

/// Smallest board with meaningful lines.
pub const MIN_SIZE: usize = 3;

/// Square grid of cells, stored row-major.
///
/// The dimension is fixed at construction. Cells only change through
/// [`Board::mark`] (empty to owned) and [`Board::reset`] (everything empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`], validated on the way in.
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Self::new(raw.size)?;
        if raw.cells.len() != board.cells.len() {
            return Err(BoardError::CellCount {
                expected: board.cells.len(),
                found: raw.cells.len(),
            });
        }
        board.cells = raw.cells;
        Ok(board)
    }
}

impl Board {
    /// Creates an empty `size`x`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TooSmall`] when `size` is below 3.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_SIZE {
            return Err(BoardError::TooSmall(size));
        }
        Ok(Self::empty(size))
    }

    fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `(row, col)`, or `None` outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Position::new(row, col)
            .to_index(self.size)
            .map(|index| self.cells[index])
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Positions that can still be marked.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .filter_map(|(index, _)| Position::from_index(index, self.size))
            .collect()
    }

    /// Number of cells owned by `token`.
    pub fn marks(&self, token: Token) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Owned(token))
            .count()
    }

    /// Marks a cell, explaining any rejection.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if the position is off the board,
    /// [`MoveError::CellOccupied`] if the cell already has a mark.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn try_mark(&mut self, position: Position, token: Token) -> Result<(), MoveError> {
        let index = position.to_index(self.size).ok_or(MoveError::OutOfBounds {
            position,
            size: self.size,
        })?;

        if !self.cells[index].is_empty() {
            return Err(MoveError::CellOccupied(position));
        }

        self.cells[index] = Cell::Owned(token);
        debug!(%position, %token, "Cell marked");
        Ok(())
    }

    /// Marks `(row, col)` for `token` if the cell is empty.
    ///
    /// Returns false, leaving the board untouched, when the cell is occupied
    /// or off the board.
    pub fn mark(&mut self, row: usize, col: usize, token: Token) -> bool {
        self.try_mark(Position::new(row, col), token).is_ok()
    }

    /// True if `token` owns a full row, column or diagonal.
    pub fn is_winner(&self, token: Token) -> bool {
        rules::is_winner(self, token)
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every cell, keeping the dimension.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(STANDARD_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let divider = "-".repeat(self.size * 4 - 1);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f, "{divider}")?;
            }
            let line = row
                .iter()
                .map(|cell| format!(" {} ", cell.symbol()))
                .collect::<Vec<_>>()
                .join("|");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
