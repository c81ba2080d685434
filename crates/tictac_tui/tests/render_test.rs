//! Rendering tests on ratatui's test backend.

use anyhow::Result;
use async_trait::async_trait;
use ratatui::{Terminal, backend::TestBackend};
use std::sync::Arc;
use tictac_board::{Board, GameState, Mark, WinDescriptor};
use tictac_tui::app::App;
use tictac_tui::model::ModelEvent;
use tictac_tui::store::GameStore;
use tictac_tui::ui;
use tokio::sync::mpsc;

struct NullStore;

#[async_trait]
impl GameStore for NullStore {
    async fn fetch(&self) -> Result<GameState> {
        Ok(GameState::new())
    }

    async fn save(&self, _state: &GameState) -> Result<GameState> {
        Ok(GameState::new())
    }
}

/// Builds a controller already synced to `state`, with the change
/// notification consumed.
fn app_with_state(state: GameState) -> App {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(Arc::new(NullStore), tx);
    app.handle_event(ModelEvent::Synced(state));
    while let Ok(event) = rx.try_recv() {
        app.handle_event(event);
    }
    app
}

fn state_with(marks: &[(usize, Mark)], win: WinDescriptor) -> GameState {
    let mut board = Board::new();
    for &(index, mark) in marks {
        board.place(index, mark).unwrap();
    }
    GameState::from_parts(board, win)
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_win_banner_and_highlight() {
    let state = state_with(
        &[(0, Mark::X), (1, Mark::X), (2, Mark::X), (3, Mark::O), (4, Mark::O)],
        WinDescriptor::won(Mark::X, 0b000000111),
    );
    let mut app = app_with_state(state);
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|frame| ui::draw(frame, &mut app)).unwrap();

    assert!(screen_text(&terminal).contains("X wins!"));
    for index in 0..9 {
        assert_eq!(app.view().is_winning(index), index < 3, "square {}", index);
    }
}

#[test]
fn test_tie_banner_without_highlight() {
    let state = state_with(
        &[
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::O),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ],
        WinDescriptor::tie(),
    );
    let mut app = app_with_state(state);
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|frame| ui::draw(frame, &mut app)).unwrap();

    assert!(screen_text(&terminal).contains("It's a tie!"));
    assert!((0..9).all(|index| !app.view().is_winning(index)));
}

#[test]
fn test_redraw_without_changes_is_identical() {
    let state = state_with(&[(4, Mark::X), (0, Mark::O)], WinDescriptor::none());
    let mut app = app_with_state(state.clone());
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

    terminal.draw(|frame| ui::draw(frame, &mut app)).unwrap();
    let first = terminal.backend().buffer().clone();

    // Reconcile again with no intervening state change, then redraw.
    app.handle_event(ModelEvent::Changed);
    terminal.draw(|frame| ui::draw(frame, &mut app)).unwrap();
    let second = terminal.backend().buffer().clone();

    assert_eq!(first, second);
}

#[test]
fn test_every_square_and_the_replay_control_are_clickable() {
    let mut app = app_with_state(GameState::new());
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|frame| ui::draw(frame, &mut app)).unwrap();

    let mut seen = std::collections::HashSet::new();
    for row in 0..20 {
        for column in 0..60 {
            if let Some(id) = app.view().hit_test(column, row) {
                seen.insert(id);
            }
        }
    }

    for index in 0..9 {
        assert!(
            seen.contains(&format!("square-{}", index)),
            "square {} should be clickable",
            index
        );
    }
    assert!(seen.contains("replay"), "replay control should be clickable");
}

#[test]
fn test_marks_are_drawn_in_their_squares() {
    let state = state_with(&[(4, Mark::X), (8, Mark::O)], WinDescriptor::none());
    let mut app = app_with_state(state);
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal.draw(|frame| ui::draw(frame, &mut app)).unwrap();

    let text = screen_text(&terminal);
    assert!(text.contains('X'));
    assert!(text.contains('O'));
}
