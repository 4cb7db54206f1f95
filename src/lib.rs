//! Tic-tac-toe library - a pure game engine plus a thin text loop
//!
//! Two players take turns marking a fixed 3x3 grid. The engine validates and
//! applies moves and reports the status after each one; the console turns
//! lines of text into engine calls and engine answers into messages.
//!
//! # Architecture
//!
//! - **Engine**: board, move history, turn order and status ([`GameEngine`])
//! - **Rules**: pure line and draw detection over a board snapshot
//! - **Invariants**: checkable properties of every reachable engine state
//! - **Console**: prompt/parse/report loop over any reader and writer
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, MoveError, Status};
//!
//! let mut game = GameEngine::new();
//! game.make_move(1, 1)?;
//! game.make_move(2, 1)?;
//! game.make_move(1, 2)?;
//! game.make_move(2, 2)?;
//! game.make_move(1, 3)?;
//! assert_eq!(game.status(), Status::XWins);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Console
pub use console::{
    Console, InputError, NOT_NUMERIC, OCCUPIED, OUT_OF_RANGE, describe, parse_coordinates,
    parse_script,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, Coordinate, GameEngine, Mark, Move, MoveError, Player, SIDE, Status, new_game,
};

// Crate-level exports - Rules and invariants
pub use games::tictactoe::invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use games::tictactoe::rules;
