//! Frame rendering.

use crate::app::App;
use crate::view::{REPLAY_ID, SQUARE_ID_PREFIX};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictac_board::{Cell, Mark};

/// Draws the whole frame: title, board, status banner, footer.
///
/// All nine squares are redrawn every frame; at this size there is nothing
/// worth diffing. Click targets are re-registered as part of the draw so
/// they always match what is on screen.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Min(11),    // Board
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Footer
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    app.view_mut().clear_targets();
    draw_board(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &mut App) {
    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    draw_row(frame, rows[0], app, 0);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, 3);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, 6);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &mut App, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_square(frame, cols[0], app, start);
    draw_vertical_sep(frame, cols[1]);
    draw_square(frame, cols[2], app, start + 1);
    draw_vertical_sep(frame, cols[3]);
    draw_square(frame, cols[4], app, start + 2);
}

fn draw_square(frame: &mut Frame, area: Rect, app: &mut App, index: usize) {
    let cell = app
        .model()
        .state()
        .board()
        .get(index)
        .unwrap_or(Cell::Empty);
    let (text, style) = match cell {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let style = if app.view().is_winning(index) {
        style.fg(Color::Black).bg(Color::Green)
    } else {
        style
    };

    app.view_mut()
        .register_target(area, format!("{}-{}", SQUARE_ID_PREFIX, index));

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let message = match app.view().status() {
        Some(banner) => banner.to_string(),
        None if app.model().sync_in_flight() => "Waiting for the server...".to_string(),
        None => format!(
            "Your move, {}. Press 1-9 or click a square.",
            app.model().mark()
        ),
    };
    let status = Paragraph::new(message)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &mut App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(area);

    let help = Paragraph::new("Press 'r' for a new game, 'q' to quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, cols[0]);

    app.view_mut()
        .register_target(cols[1], REPLAY_ID.to_string());
    let replay = Paragraph::new("[ New game ]")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(replay, cols[1]);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
