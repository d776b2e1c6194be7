//! First-class invariants for the history engine.
//!
//! Invariants are logical properties that must hold throughout engine
//! execution. They are testable independently and serve as documentation
//! of system guarantees.

/// A logical property that must hold for a given state.
///
/// Invariants express system guarantees that should never be violated.
/// They are checked in debug builds and can be tested independently.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// This trait enables composition of multiple invariants into a single
/// verification step. Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

// Implement InvariantSet for 3-tuples
impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Implement InvariantSet for 2-tuples
impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_mark;
pub mod empty_start;
pub mod view_bounds;

pub use alternating_mark::AlternatingMarkInvariant;
pub use empty_start::EmptyStartInvariant;
pub use view_bounds::ViewBoundsInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    EmptyStartInvariant,
    AlternatingMarkInvariant,
    ViewBoundsInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::History;
    use crate::position::Position;
    use crate::types::{Board, Player, Square};

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        let history = History::new();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut history = History::new();
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        history.record(board.clone());
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        history.record(board);

        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut history = History::new();
        // Two marks appear in a single step.
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        history.record(board);

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert!(!violations.is_empty());
    }

    #[test]
    fn test_two_invariants_as_set() {
        let history = History::new();

        type TwoInvariants = (EmptyStartInvariant, ViewBoundsInvariant);
        assert!(TwoInvariants::check_all(&history).is_ok());
    }
}
