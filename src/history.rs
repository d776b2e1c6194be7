//! Move history as a sequence of board snapshots.
//!
//! Entry 0 is always the empty board; entry `i` is the board after move
//! `i`. Each snapshot is an independent value - recording a move clones
//! the viewed board rather than aliasing it, so past entries can never
//! be edited through the present.

use crate::error::JumpError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Recorded board snapshots plus the index currently being viewed.
///
/// The viewed index doubles as the move count of the viewed board:
/// viewing entry `m` means `m` moves have been played to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Board>,
    current: usize,
}

impl History {
    /// Creates a history holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            entries: vec![Board::new()],
            current: 0,
        }
    }

    /// Returns the board currently being viewed.
    pub fn current(&self) -> &Board {
        &self.entries[self.current]
    }

    /// Returns the index currently being viewed.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns all recorded snapshots in move order.
    pub fn entries(&self) -> &[Board] {
        &self.entries
    }

    /// Number of recorded snapshots (moves played plus the start entry).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the start entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Records a new snapshot after the viewed entry and views it.
    ///
    /// Entries beyond the viewed index are discarded first: replaying
    /// from a past position destroys the previously recorded future.
    /// There is no branching history.
    #[instrument(skip(self, board), fields(current = self.current, len = self.entries.len()))]
    pub fn record(&mut self, board: Board) {
        self.entries.truncate(self.current + 1);
        self.entries.push(board);
        self.current = self.entries.len() - 1;
    }

    /// Moves the view to the given entry without altering the record.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        if index >= self.entries.len() {
            return Err(JumpError::InvalidMoveIndex {
                requested: index,
                len: self.entries.len(),
            });
        }
        self.current = index;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Player, Square};

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_new_history_views_empty_board() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_index(), 0);
        assert_eq!(history.current(), &Board::new());
    }

    #[test]
    fn test_record_appends_and_advances_view() {
        let mut history = History::new();
        let first = board_with(&[(Position::Center, Player::X)]);
        history.record(first.clone());

        assert_eq!(history.len(), 2);
        assert_eq!(history.current_index(), 1);
        assert_eq!(history.current(), &first);
        // The start entry is untouched.
        assert_eq!(&history.entries()[0], &Board::new());
    }

    #[test]
    fn test_record_after_jump_discards_future() {
        let mut history = History::new();
        let first = board_with(&[(Position::Center, Player::X)]);
        let second = board_with(&[(Position::Center, Player::X), (Position::TopLeft, Player::O)]);
        history.record(first.clone());
        history.record(second);

        history.jump_to(1).expect("entry 1 exists");
        let replacement = board_with(&[
            (Position::Center, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        history.record(replacement.clone());

        assert_eq!(history.len(), 3);
        assert_eq!(history.current_index(), 2);
        assert_eq!(history.current(), &replacement);
        assert_eq!(&history.entries()[1], &first);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut history = History::new();
        let err = history.jump_to(1).unwrap_err();
        assert_eq!(
            err,
            JumpError::InvalidMoveIndex {
                requested: 1,
                len: 1
            }
        );
        // View unchanged after rejection.
        assert_eq!(history.current_index(), 0);
    }

    #[test]
    fn test_jump_to_last_is_noop() {
        let mut history = History::new();
        history.record(board_with(&[(Position::Center, Player::X)]));
        let before = history.clone();
        history.jump_to(history.len() - 1).expect("last entry exists");
        assert_eq!(history, before);
    }
}
