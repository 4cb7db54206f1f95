//! Game rules for tic-tac-toe.
//!
//! Pure functions over a row-major snapshot of the board. Nothing here
//! touches engine state, so status is always a fresh recomputation.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, has_line, line_owners};

use super::{Mark, Status};
use tracing::{instrument, warn};

/// Evaluates the status of a board snapshot.
///
/// Exactly one player with a completed line wins. With no line and no empty
/// cell the game is drawn. Everything else is `Unfinished`, including a
/// board where both players hold a line, which alternating single-cell moves
/// can never produce.
#[instrument(level = "trace")]
pub fn evaluate(contents: &[Mark; 9]) -> Status {
    if is_draw(contents) {
        return Status::Draw;
    }
    match line_owners(contents).as_slice() {
        [Mark::X] => Status::XWins,
        [Mark::O] => Status::OWins,
        [] => Status::Unfinished,
        owners => {
            warn!(?owners, "Board holds lines for both players");
            Status::Unfinished
        }
    }
}
