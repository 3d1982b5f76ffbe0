//! Board coordinates and parsing of user-entered moves.

use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A `(row, col)` coordinate, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Position {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Position {
    /// Converts to a row-major index for a board of `size`.
    ///
    /// Returns `None` when the position does not fit on the board.
    pub fn to_index(self, size: usize) -> Option<usize> {
        self.fits(size).then(|| self.row * size + self.col)
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if size == 0 || index >= size * size {
            return None;
        }
        Some(Self::new(index / size, index % size))
    }

    /// True if both coordinates are below `size`.
    pub fn fits(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Parses `"row,col"` or a 1-based keypad number (`1` is the top-left cell).
    ///
    /// Whitespace around the parts is ignored. Positions are not checked
    /// against the board here, except that a keypad number must map onto it.
    #[instrument]
    pub fn parse(s: &str, size: usize) -> Option<Self> {
        let s = s.trim();

        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse().ok()?;
            let col = col.trim().parse().ok()?;
            return Some(Self::new(row, col));
        }

        let keypad: usize = s.parse().ok()?;
        keypad.checked_sub(1).and_then(|index| Self::from_index(index, size))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_on_corners() {
        assert_eq!(Position::new(0, 0).to_index(3), Some(0));
        assert_eq!(Position::new(2, 2).to_index(3), Some(8));
        assert_eq!(Position::from_index(5, 3), Some(Position::new(1, 2)));
        assert_eq!(Position::from_index(9, 3), None);
    }

    #[test]
    fn test_out_of_board_has_no_index() {
        assert_eq!(Position::new(3, 0).to_index(3), None);
        assert_eq!(Position::new(0, 3).to_index(3), None);
        assert_eq!(Position::new(3, 3).to_index(4), Some(15));
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!(Position::parse("1,2", 3), Some(Position::new(1, 2)));
        assert_eq!(Position::parse(" 2 , 0 ", 3), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_parse_keypad() {
        assert_eq!(Position::parse("1", 3), Some(Position::new(0, 0)));
        assert_eq!(Position::parse("5", 3), Some(Position::new(1, 1)));
        assert_eq!(Position::parse("9", 3), Some(Position::new(2, 2)));
        assert_eq!(Position::parse("0", 3), None);
        assert_eq!(Position::parse("10", 3), None);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert_eq!(Position::parse("", 3), None);
        assert_eq!(Position::parse("a,b", 3), None);
        assert_eq!(Position::parse("1,", 3), None);
        assert_eq!(Position::parse("center", 3), None);
    }
}
