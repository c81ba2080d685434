//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

/// Terminal client for tic-tac-toe against a game server.
#[derive(Parser, Debug)]
#[command(name = "tictac", version)]
#[command(about = "Play tic-tac-toe against a game server", long_about = None)]
pub struct Cli {
    /// Base URL of the game server
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    pub server_url: String,

    /// Log file (the terminal itself is occupied by the UI)
    #[arg(long, default_value = "tictac_tui.log")]
    pub log_file: PathBuf,
}
