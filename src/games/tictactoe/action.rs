//! Moves and the ways applying one can fail.

use super::position::Coordinate;
use super::types::{Mark, Player};
use serde::{Deserialize, Serialize};

/// A single ply: which mark went into which cell.
///
/// Moves are only ever appended to a game's history, never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    coordinate: Coordinate,
    mark: Player,
}

impl Move {
    /// Creates a new move.
    pub fn new(coordinate: Coordinate, player: Player) -> Self {
        Self {
            coordinate,
            mark: player,
        }
    }

    /// Returns the marked cell.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the mark placed.
    pub fn mark(&self) -> Mark {
        self.mark.into()
    }

    /// Returns the player who moved.
    pub fn player(&self) -> Player {
        self.mark
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.mark, self.coordinate)
    }
}

/// Error that can occur when applying a move.
///
/// Both variants are raised before any state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column is outside 1..3.
    #[display("Coordinates ({row}, {col}) are outside the board (1-3)")]
    OutOfRange {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Row of the occupied cell.
        row: i32,
        /// Column of the occupied cell.
        col: i32,
    },
}

impl MoveError {
    pub(super) fn cell_occupied(coordinate: Coordinate) -> Self {
        let (row, col) = coordinate.into();
        Self::CellOccupied { row, col }
    }
}
