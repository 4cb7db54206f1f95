//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on a 3x3 grid", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game, reading "row col" lines from stdin
    Play {
        /// Print the move list after the game
        #[arg(long)]
        show_history: bool,
    },

    /// Apply a scripted list of moves and print the resulting board
    Replay {
        /// Moves as `;`-separated "row col" pairs, e.g. "1 1; 2 2; 1 2"
        moves: String,
    },
}
