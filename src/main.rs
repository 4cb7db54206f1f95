//! tictactoe - terminal front end
//!
//! Reads moves as "row col" lines and prints the board after each one.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io;
use tictactoe::{Console, GameEngine, SessionConfig, parse_script};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SessionConfig::load(cli.config.as_deref())?;
    initialize_tracing(&config);

    match cli.command.unwrap_or(Command::Play {
        show_history: false,
    }) {
        Command::Play { show_history } => {
            let config = if show_history {
                config.with_show_history(true)
            } else {
                config
            };
            run_play(&config)
        }
        Command::Replay { moves } => run_replay(&moves),
    }
}

/// Logs go to stderr so the board on stdout stays readable.
fn initialize_tracing(config: &SessionConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip_all)]
fn run_play(config: &SessionConfig) -> Result<()> {
    info!("Starting interactive game");

    let mut engine = GameEngine::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), config);
    console.run(&mut engine)?;

    debug!(
        history = %serde_json::to_string(engine.history())?,
        "Session history"
    );

    Ok(())
}

/// Apply a move script and print the result
#[instrument]
fn run_replay(moves: &str) -> Result<()> {
    let moves = parse_script(moves).context("Invalid move script")?;
    info!(count = moves.len(), "Replaying moves");

    let engine = GameEngine::replay(&moves).context("Illegal move in script")?;

    println!("{}", engine.render_board());
    println!("{}", engine.status());
    Ok(())
}
