//! Validated board coordinates.

use super::action::MoveError;
use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const SIDE: usize = 3;

/// A 1-indexed `(row, col)` pair known to lie on the board.
///
/// Raw integers only become a `Coordinate` through [`Coordinate::new`], which
/// is where out-of-range input is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coordinate {
    row: u8,
    col: u8,
}

impl Coordinate {
    /// Validates a 1-indexed `(row, col)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either value is outside 1..3.
    pub fn new(row: i32, col: i32) -> Result<Self, MoveError> {
        let range = 1..=SIDE as i32;
        if !range.contains(&row) || !range.contains(&col) {
            return Err(MoveError::OutOfRange { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Returns the 1-indexed row.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Returns the 1-indexed column.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Converts to a row-major board index (0-8).
    pub fn to_index(self) -> usize {
        (self.row as usize - 1) * SIDE + (self.col as usize - 1)
    }

    /// Creates a coordinate from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIDE * SIDE).then(|| Self::at_index(index))
    }

    // Callers guarantee `index < 9`.
    pub(super) fn at_index(index: usize) -> Self {
        Self {
            row: (index / SIDE + 1) as u8,
            col: (index % SIDE + 1) as u8,
        }
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SIDE * SIDE).map(Self::at_index)
    }
}

impl TryFrom<(i32, i32)> for Coordinate {
    type Error = MoveError;

    fn try_from((row, col): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    fn from(coordinate: Coordinate) -> Self {
        (coordinate.row as i32, coordinate.col as i32)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
