//! Core domain types for tic-tac-toe: marks, cells and the board.

use super::action::MoveError;
use super::position::Coordinate;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol held by a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (always moves first).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
    /// Unmarked cell.
    #[display(" ")]
    Empty,
}

impl Mark {
    /// Returns true for `X` and `O`.
    pub fn is_player(self) -> bool {
        self != Mark::Empty
    }
}

/// One of the two players; the only marks that can be written to a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// One of the nine fixed board positions.
///
/// The coordinate never changes. The mark starts `Empty` and can be set
/// exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    coordinate: Coordinate,
    mark: Mark,
}

impl Cell {
    fn empty(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            mark: Mark::Empty,
        }
    }

    /// Returns the cell position.
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Returns the 1-indexed row.
    pub fn row(&self) -> u8 {
        self.coordinate.row()
    }

    /// Returns the 1-indexed column.
    pub fn col(&self) -> u8 {
        self.coordinate.col()
    }

    /// Returns the current mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Checks if the cell is unmarked.
    pub fn is_empty(&self) -> bool {
        self.mark == Mark::Empty
    }

    fn place(&mut self, player: Player) -> Result<(), MoveError> {
        if !self.is_empty() {
            return Err(MoveError::cell_occupied(self.coordinate));
        }
        self.mark = player.into();
        Ok(())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order (indices 0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: std::array::from_fn(|index| Cell::empty(Coordinate::at_index(index))),
        }
    }

    /// Returns a copy of the cell at 1-indexed `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] if either coordinate is outside 1..3.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<Cell, MoveError> {
        let coordinate = Coordinate::new(row, col)?;
        Ok(self.cells[coordinate.to_index()])
    }

    /// Writes `player`'s mark into the cell at 1-indexed `(row, col)`.
    ///
    /// Only the target cell changes. Both checks run before anything is
    /// written, so a failed call leaves the board untouched.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if either coordinate is outside 1..3.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self))]
    pub fn mark(&mut self, row: i32, col: i32, player: Player) -> Result<Coordinate, MoveError> {
        let coordinate = Coordinate::new(row, col)?;
        self.cells[coordinate.to_index()].place(player)?;
        Ok(coordinate)
    }

    /// Returns all marks in row-major order.
    pub fn contents(&self) -> [Mark; 9] {
        self.cells.map(|cell| cell.mark)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns the coordinates of all unmarked cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .map(Cell::coordinate)
            .collect()
    }

    /// Formats the board as a framed text grid.
    ///
    /// ```text
    /// ---------
    /// | X O X |
    /// |   O   |
    /// |       |
    /// ---------
    /// ```
    pub fn render(&self) -> String {
        let rule = "-".repeat(9);
        let mut result = String::with_capacity(5 * 10);
        result.push_str(&rule);
        result.push('\n');
        for row in self.cells.chunks(3) {
            result.push_str(&format!(
                "| {} {} {} |\n",
                row[0].mark, row[1].mark, row[2].mark
            ));
        }
        result.push_str(&rule);
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
