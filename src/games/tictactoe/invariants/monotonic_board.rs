//! Monotonic board invariant: cells never change once set.

use super::super::{Board, GameEngine};
use super::Invariant;

/// Invariant: Replaying history onto an empty board reproduces the board.
///
/// A replay that hits an occupied cell means some cell was overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            let (row, col) = mov.coordinate().into();
            if reconstructed.mark(row, col, mov.player()).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
