//! Board properties: marking, win lines, draws and reset.

use tictactoe_core::{Board, BoardError, Cell, Token, rules};

fn both() -> [Token; 2] {
    [Token::One, Token::Two]
}

#[test]
fn test_empty_board_has_no_winner() {
    for size in 3..=6 {
        let board = Board::new(size).unwrap();
        for token in both() {
            assert!(!board.is_winner(token), "size {size}, token {token}");
        }
        assert!(!board.is_full());
    }
}

#[test]
fn test_second_mark_is_rejected() {
    let mut board = Board::default();
    assert!(board.mark(2, 1, Token::Two));
    assert!(!board.mark(2, 1, Token::One));
    assert!(!board.mark(2, 1, Token::Two));
    assert_eq!(board.get(2, 1), Some(Cell::Owned(Token::Two)));
    assert_eq!(board.marks(Token::One), 0);
}

#[test]
fn test_every_line_wins_for_its_owner_only() {
    let lines: Vec<_> = rules::lines(3).collect();
    assert_eq!(lines.len(), 8);

    for line in lines {
        for token in both() {
            let mut board = Board::default();
            for pos in &line {
                assert!(board.mark(pos.row, pos.col, token));
            }
            assert!(board.is_winner(token), "{line:?} for {token}");
            assert!(!board.is_winner(token.opponent()), "{line:?} for {token}");
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let layout = [
        [Token::One, Token::Two, Token::One],
        [Token::One, Token::Two, Token::Two],
        [Token::Two, Token::One, Token::One],
    ];
    let mut board = Board::default();
    for (row, tokens) in layout.iter().enumerate() {
        for (col, &token) in tokens.iter().enumerate() {
            assert!(board.mark(row, col, token));
        }
    }

    assert!(board.is_full());
    assert!(!board.is_winner(Token::One));
    assert!(!board.is_winner(Token::Two));
    assert!(rules::is_draw(&board));
}

#[test]
fn test_reset_clears_any_state() {
    let mut board = Board::default();
    for index in 0..9 {
        let token = if index % 2 == 0 { Token::One } else { Token::Two };
        board.mark(index / 3, index % 3, token);
    }
    assert!(board.is_full());

    board.reset();
    assert!(!board.is_full());
    for token in both() {
        assert!(!board.is_winner(token));
    }
    assert_eq!(board.empty_positions().len(), 9);

    board.reset();
    assert_eq!(board, Board::default());
}

#[test]
fn test_larger_board_needs_full_line() {
    let mut board = Board::new(4).unwrap();
    for col in 0..3 {
        board.mark(1, col, Token::One);
    }
    assert!(!board.is_winner(Token::One));

    board.mark(1, 3, Token::One);
    assert!(board.is_winner(Token::One));
}

#[test]
fn test_larger_board_anti_diagonal() {
    let mut board = Board::new(5).unwrap();
    for i in 0..5 {
        board.mark(i, 4 - i, Token::Two);
    }
    assert_eq!(rules::winner(&board), Some(Token::Two));
}

#[test]
fn test_deserialize_rejects_malformed_boards() {
    let short = serde_json::from_str::<Board>(r#"{"size":3,"cells":[]}"#);
    assert!(short.is_err_and(|e| e.to_string().contains("needs 9 cells but 0")));

    let tiny = serde_json::from_str::<Board>(r#"{"size":0,"cells":[]}"#);
    assert!(tiny.is_err_and(|e| e.to_string().contains("too small")));

    assert_eq!(
        BoardError::CellCount {
            expected: 9,
            found: 0
        }
        .to_string(),
        "Board needs 9 cells but 0 were given"
    );
}

#[test]
fn test_deserialized_board_keeps_playing() {
    let mut board = Board::default();
    board.mark(0, 0, Token::One);
    board.mark(1, 1, Token::Two);

    let json = serde_json::to_string(&board).unwrap();
    let mut restored: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);

    restored.mark(0, 1, Token::One);
    restored.mark(0, 2, Token::One);
    assert!(restored.is_winner(Token::One));
    assert_eq!(restored.get(1, 1), Some(Cell::Owned(Token::Two)));
}
