//! Win detection.

use crate::{Board, Cell, Position, Token};
use tracing::instrument;

/// Enumerates every winning line on a `size`x`size` board.
///
/// Yields the rows, then the columns, then the main and anti diagonals.
pub fn lines(size: usize) -> impl Iterator<Item = Vec<Position>> {
    let rows = (0..size).map(move |row| {
        (0..size)
            .map(|col| Position::new(row, col))
            .collect::<Vec<_>>()
    });
    let cols = (0..size).map(move |col| {
        (0..size)
            .map(|row| Position::new(row, col))
            .collect::<Vec<_>>()
    });
    let main = std::iter::once((0..size).map(|i| Position::new(i, i)).collect::<Vec<_>>());
    let anti = std::iter::once(
        (0..size)
            .map(|i| Position::new(i, size - 1 - i))
            .collect::<Vec<_>>(),
    );

    rows.chain(cols).chain(main).chain(anti)
}

/// True if `token` owns every cell of some row, column or diagonal.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, token: Token) -> bool {
    lines(board.size()).any(|line| {
        line.iter()
            .all(|&pos| board.get(pos.row, pos.col) == Some(Cell::Owned(token)))
    })
}

/// Returns the first token found owning a complete line.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Token> {
    [Token::One, Token::Two]
        .into_iter()
        .find(|&token| is_winner(board, token))
}
