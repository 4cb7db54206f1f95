//! Derived game status.

use serde::{Deserialize, Serialize};

/// Outcome of the game so far, recomputed from the board on every query.
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
pub enum Status {
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// Board is full with no line.
    #[display("Draw")]
    Draw,
    /// Moves remain to be played.
    #[display("Unfinished")]
    Unfinished,
}

impl Status {
    /// Returns true once no further moves should be requested.
    pub fn is_terminal(self) -> bool {
        self != Status::Unfinished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_strings() {
        let shown: Vec<String> = Status::iter().map(|s| s.to_string()).collect();
        assert_eq!(shown, ["X wins", "O wins", "Draw", "Unfinished"]);
    }

    #[test]
    fn test_only_unfinished_is_not_terminal() {
        let open: Vec<Status> = Status::iter().filter(|s| !s.is_terminal()).collect();
        assert_eq!(open, [Status::Unfinished]);
    }
}
