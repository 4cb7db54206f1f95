//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every move. They
//! are testable independently and the engine checks the full set in debug
//! builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of two and three invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn record<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        record::<S, I3>(state, &mut violations);
        into_result(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        record::<S, I1>(state, &mut violations);
        record::<S, I2>(state, &mut violations);
        into_result(violations)
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod monotonic_board;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_board::MonotonicBoardInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameEngine, Player};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(EngineInvariants::check_all(&GameEngine::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let engine = GameEngine::replay(&[(1, 1), (2, 2), (1, 3)]).unwrap();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut engine = GameEngine::replay(&[(2, 2)]).unwrap();
        // A mark with no matching history entry
        engine.board.mark(1, 1, Player::O).unwrap();

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(
            violations,
            [
                InvariantViolation::new(MonotonicBoardInvariant::description()),
                InvariantViolation::new(HistoryConsistentInvariant::description()),
            ]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&GameEngine::new()).is_ok());
    }
}
