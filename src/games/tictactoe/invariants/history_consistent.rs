//! History consistency invariant: history length matches occupied cells.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(game: &GameEngine) -> bool {
        let occupied = game
            .board()
            .contents()
            .iter()
            .filter(|mark| mark.is_player())
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
