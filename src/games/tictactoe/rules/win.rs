//! Line detection for tic-tac-toe.

use super::super::Mark;
use strum::IntoEnumIterator;

/// The eight winning triples as row-major indices.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if `mark` fills all three cells of any line.
///
/// Always false for [`Mark::Empty`].
pub fn has_line(contents: &[Mark; 9], mark: Mark) -> bool {
    mark.is_player()
        && LINES
            .iter()
            .any(|line| line.iter().all(|&index| contents[index] == mark))
}

/// Returns every player holding at least one completed line, X first.
pub fn line_owners(contents: &[Mark; 9]) -> Vec<Mark> {
    Mark::iter()
        .filter(|&mark| has_line(contents, mark))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark::{Empty as E, O, X};

    #[test]
    fn test_no_line_on_empty_board() {
        let board = [E; 9];
        assert!(!has_line(&board, X));
        assert!(!has_line(&board, O));
        assert!(!has_line(&board, E));
        assert!(line_owners(&board).is_empty());
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = [E; 9];
            for index in line {
                board[index] = O;
            }
            assert!(has_line(&board, O), "line {line:?} not detected");
            assert!(!has_line(&board, X));
            assert_eq!(line_owners(&board), [O]);
        }
    }

    #[test]
    fn test_anti_diagonal() {
        let board = [O, O, X, E, X, E, X, E, E];
        assert_eq!(line_owners(&board), [X]);
    }

    #[test]
    fn test_mixed_line_is_not_a_line() {
        let board = [X, X, O, E, E, E, E, E, E];
        assert!(line_owners(&board).is_empty());
    }

    #[test]
    fn test_both_owners_reported() {
        let board = [O, O, O, X, X, X, E, E, E];
        assert_eq!(line_owners(&board), [X, O]);
    }
}
