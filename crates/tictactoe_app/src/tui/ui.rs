//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{Board, Cell, Position, Token};

use super::app::App;
use crate::announce;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Scores
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let scores = Paragraph::new(announce::score_line(app.game().players()))
        .alignment(Alignment::Center);
    frame.render_widget(scores, chunks[1]);

    let cursor = (!app.awaiting_play_again()).then(|| app.cursor());
    draw_board(frame, chunks[2], app.game().board(), cursor);

    let status = if app.awaiting_play_again() {
        format!("{}  {}", app.status_message(), announce::PLAY_AGAIN_PROMPT)
    } else {
        app.status_message().to_string()
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new("arrows move · enter/space or 1-9 play · q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Option<Position>) {
    let size = board.size() as u16;
    let width = size * CELL_WIDTH + size.saturating_sub(1);
    let height = size * CELL_HEIGHT + size.saturating_sub(1);
    let board_area = center_rect(area, width, height);

    let mut constraints = Vec::new();
    for i in 0..size {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(CELL_HEIGHT));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(board_area);

    for (row, cells) in board.rows().enumerate() {
        if row > 0 {
            draw_separator(frame, rows[row * 2 - 1]);
        }
        draw_row(frame, rows[row * 2], row, cells, cursor);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, row: usize, cells: &[Cell], cursor: Option<Position>) {
    let mut constraints = Vec::new();
    for i in 0..cells.len() {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(CELL_WIDTH));
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (col, &cell) in cells.iter().enumerate() {
        if col > 0 {
            draw_separator_vertical(frame, cols[col * 2 - 1]);
        }
        let highlighted = cursor == Some(Position::new(row, col));
        draw_cell(frame, cols[col * 2], cell, highlighted);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, highlighted: bool) {
    let base_style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Owned(Token::One) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Owned(Token::Two) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the symbol in the cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", cell.symbol()), style)),
    ];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
