//! View bounds invariant: the viewed index addresses a recorded entry.

use super::Invariant;
use crate::history::History;

/// Invariant: The viewed index is within the recorded history.
///
/// Truncation on record keeps the viewed entry, and jumps are bounds
/// checked, so the view can never dangle past the last snapshot.
pub struct ViewBoundsInvariant;

impl Invariant<History> for ViewBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.current_index() < history.len()
    }

    fn description() -> &'static str {
        "Viewed index is within history bounds"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Board, Player, Square};

    #[test]
    fn test_new_history_holds() {
        let history = History::new();
        assert!(ViewBoundsInvariant::holds(&history));
    }

    #[test]
    fn test_holds_after_record_and_jump() {
        let mut history = History::new();
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        history.record(board);
        history.jump_to(0).expect("start entry exists");

        assert!(ViewBoundsInvariant::holds(&history));
    }
}
