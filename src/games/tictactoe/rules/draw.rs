//! Draw detection logic for tic-tac-toe.

use super::super::Mark;
use super::win::line_owners;

/// Checks if no cell is empty.
pub fn is_full(contents: &[Mark; 9]) -> bool {
    contents.iter().all(|mark| mark.is_player())
}

/// A full board with no completed line is a draw.
pub fn is_draw(contents: &[Mark; 9]) -> bool {
    is_full(contents) && line_owners(contents).is_empty()
}
