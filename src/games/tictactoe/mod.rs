//! Tic-tac-toe on a fixed 3x3 grid.

mod action;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use action::{Move, MoveError};
pub use engine::{GameEngine, new_game};
pub use position::{Coordinate, SIDE};
pub use status::Status;
pub use types::{Board, Cell, Mark, Player};
