//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};
use tictactoe_timeline::Position;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_timeline.toml";

/// Tic Tac Toe Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with a move history you can jump through", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file (missing file means defaults)
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: std::path::PathBuf,
    },

    /// Apply moves without a UI and print the resulting position
    Replay {
        /// Cells to play in order: 0-8 or labels like `center`, `top-left`
        #[arg(required = true)]
        cells: Vec<Position>,

        /// Jump to this move after playing (0 is the empty board)
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
}
