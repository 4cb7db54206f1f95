//! Game engine for tic-tac-toe.
//!
//! The engine stores only the board and the move history. Whose turn it is
//! and how the game stands are projections over those two, recomputed on
//! every call.

use super::action::{Move, MoveError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::types::{Board, Mark, Player};
use super::{Status, rules};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
}

/// Starts a fresh game: empty board, empty history.
pub fn new_game() -> GameEngine {
    GameEngine::new()
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
        }
    }

    /// Replays `(row, col)` moves in order on a fresh game.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal move and returns its error.
    #[instrument]
    pub fn replay(moves: &[(i32, i32)]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &(row, col) in moves {
            engine.make_move(row, col)?;
        }
        Ok(engine)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player whose turn it is.
    ///
    /// X opens; afterwards the turn passes to whoever did not make the last
    /// move.
    pub fn current_player(&self) -> Mark {
        self.next_player().into()
    }

    fn next_player(&self) -> Player {
        self.history
            .last()
            .map_or(Player::X, |last| last.player().opponent())
    }

    /// Places the current player's mark at 1-indexed `(row, col)`.
    ///
    /// Board and history change together or not at all: the board rejects
    /// bad moves before writing, and history is only appended afterwards.
    ///
    /// # Errors
    ///
    /// Returns the board's [`MoveError::OutOfRange`] or
    /// [`MoveError::CellOccupied`] unchanged.
    #[instrument(skip(self), fields(player = %self.current_player()))]
    pub fn make_move(&mut self, row: i32, col: i32) -> Result<(), MoveError> {
        let player = self.next_player();
        let coordinate = self
            .board
            .mark(row, col, player)
            .inspect_err(|error| warn!(%error, "Move rejected"))?;
        self.history.push(Move::new(coordinate, player));
        debug!(%coordinate, ply = self.history.len(), "Move applied");

        debug_assert!(
            EngineInvariants::check_all(&*self).is_ok(),
            "engine invariants violated after {coordinate}"
        );
        Ok(())
    }

    /// Evaluates the game status from the current board.
    pub fn status(&self) -> Status {
        rules::evaluate(&self.board.contents())
    }

    /// Renders the board as text.
    pub fn render_board(&self) -> String {
        self.board.render()
    }
}
