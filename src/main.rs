//! Tic Tac Toe Timeline - CLI entry point
//!
//! Plays the game in a terminal, or replays a list of moves and prints the
//! resulting position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, DEFAULT_CONFIG_PATH};
use tictactoe_timeline::{GameStateStore, GameView, Position, TimelineConfig, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        None => play(&TimelineConfig::load_or_default(DEFAULT_CONFIG_PATH)?),
        Some(Command::Play { config }) => play(&TimelineConfig::load_or_default(&config)?),
        Some(Command::Replay { cells, jump, json }) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            replay(&cells, jump, json)
        }
    }
}

/// Run the interactive terminal game.
fn play(config: &TimelineConfig) -> Result<()> {
    run_tui(config)
}

/// Play `cells`, stopping at the first illegal one, optionally jump, and print the view.
fn replay(cells: &[Position], jump: Option<usize>, json: bool) -> Result<()> {
    let view = replay_view(cells, jump)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}

#[instrument(skip(cells), fields(moves = cells.len()))]
fn replay_view(cells: &[Position], jump: Option<usize>) -> Result<GameView> {
    let indices: Vec<usize> = cells.iter().map(|p| p.to_index()).collect();
    let mut store = GameStateStore::replay(&indices).context("Replay stopped at an illegal move")?;

    if let Some(move_index) = jump {
        store = store.jump_to_move(move_index)?;
    }
    info!(current_move = store.current_move(), "Replay finished");
    Ok(store.view())
}

fn render_text(view: &GameView) -> String {
    let mut out = format!("{}\n\n{}\n\n", view.board().display(), view.status_text());
    for entry in view.history() {
        let marker = if *entry.is_current() { '*' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}
