//! Terminal entry point: wiring, terminal lifecycle, event loop.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info};

use tictac_tui::app::App;
use tictac_tui::cli::Cli;
use tictac_tui::input::{self, Action};
use tictac_tui::model::ModelEvent;
use tictac_tui::store::RestStore;
use tictac_tui::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so tracing output does not fight the UI for the
    // terminal.
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(server_url = %cli.server_url, "Starting tictac client");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let store = Arc::new(RestStore::new(cli.server_url));
    let mut app = App::new(store, event_tx);

    // Load the authoritative state before the first move.
    app.replay();

    let res = run_app(&mut terminal, &mut app, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<ModelEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Drain model notifications before taking more input.
        while let Ok(model_event) = event_rx.try_recv() {
            app.handle_event(model_event);
        }

        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => match input::action_for(key) {
                    Some(Action::Quit) => {
                        info!("User quit");
                        return Ok(());
                    }
                    Some(Action::Replay) => app.replay(),
                    Some(Action::Mark(index)) => app.square_clicked(index),
                    None => {}
                },
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(id) = app.view().hit_test(mouse.column, mouse.row) {
                        app.target_clicked(&id);
                    }
                }
                _ => {}
            }
        }
    }
}
