//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: Players alternate turns, X first.
///
/// Also requires the derived current player to match history parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let alternates = game.history().iter().enumerate().all(|(ply, mov)| {
            let expected = if ply % 2 == 0 { Mark::X } else { Mark::O };
            mov.mark() == expected
        });

        let expected_next = if game.history().len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };

        alternates && game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
