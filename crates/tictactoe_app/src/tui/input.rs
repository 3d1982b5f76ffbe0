//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// Moves the cursor one cell with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode, size: usize) -> Position {
    let last = size.saturating_sub(1);
    match key {
        KeyCode::Left => Position::new(cursor.row, cursor.col.saturating_sub(1)),
        KeyCode::Right => Position::new(cursor.row, (cursor.col + 1).min(last)),
        KeyCode::Up => Position::new(cursor.row.saturating_sub(1), cursor.col),
        KeyCode::Down => Position::new((cursor.row + 1).min(last), cursor.col),
        _ => cursor,
    }
}
