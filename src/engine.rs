//! Game engine: plays moves, tracks history, answers queries.
//!
//! The engine owns the snapshot history and exposes the operations a
//! presentation layer needs: mutators (`play`, `jump_to`) and queries
//! (`current_board`, `status`, `move_list`). It has no reactivity of its
//! own - callers re-read the queries after each mutation.

use crate::error::{JumpError, PlayError};
use crate::history::History;
use crate::invariants::{HistoryInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Tic-tac-toe engine with per-move history and time travel.
///
/// The game has exactly two observable phases, both derived from the
/// viewed board: in progress (moves accepted subject to occupancy) and
/// won (moves rejected until the view leaves the winning board).
/// Jumping back to a pre-win entry re-enters the in-progress phase;
/// playing from there discards the recorded future.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    history: History,
}

impl GameEngine {
    /// Creates an engine viewing the empty starting board.
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Builds an engine by playing a recorded sequence of positions.
    ///
    /// # Errors
    ///
    /// Returns the first [`PlayError`] the sequence runs into.
    #[instrument]
    pub fn replay(positions: &[Position]) -> Result<Self, PlayError> {
        let mut engine = Self::new();
        for pos in positions {
            engine.play_position(*pos)?;
        }
        Ok(engine)
    }

    /// Returns the board currently being viewed.
    pub fn current_board(&self) -> &Board {
        self.history.current()
    }

    /// Returns the recorded history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of recorded snapshots, including the start entry.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false: the start entry is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Returns the player whose turn it is at the viewed entry.
    ///
    /// Derived from the viewed index alone: X on even indices, O on odd.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.history.current_index())
    }

    /// Returns the winner on the viewed board, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self.current_board())
    }

    /// Returns the status of the viewed board.
    ///
    /// The rendered form ([`GameStatus`] implements `Display`) announces
    /// either the winner or the next player to move.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Won { winner },
            None => GameStatus::InProgress {
                to_move: self.to_move(),
            },
        }
    }

    /// Returns true if the viewed board is full with no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// Returns true if the viewed board accepts no further moves.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || rules::is_full(self.current_board())
    }

    /// Returns the playable positions on the viewed board.
    ///
    /// Empty once the viewed board is won.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// Plays the current mover's mark at the given board index.
    ///
    /// On success the viewed board is cloned, marked, and recorded;
    /// entries beyond the viewed one are discarded and the view moves to
    /// the new last entry.
    ///
    /// # Errors
    ///
    /// Checked in order, with the engine untouched on failure:
    /// - [`PlayError::InvalidPosition`] if `index` is not in 0-8
    /// - [`PlayError::CellOccupied`] if the square holds a mark
    /// - [`PlayError::GameAlreadyWon`] if the viewed board is won
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<(), PlayError> {
        let pos = Position::from_index(index).ok_or(PlayError::InvalidPosition(index))?;
        self.play_position(pos)
    }

    /// Plays the current mover's mark at the given position.
    ///
    /// Same as [`GameEngine::play`] with the range check discharged by
    /// the type.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::CellOccupied`] or [`PlayError::GameAlreadyWon`].
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn play_position(&mut self, pos: Position) -> Result<(), PlayError> {
        let board = self.history.current();
        if !board.is_empty(pos) {
            return Err(PlayError::CellOccupied(pos));
        }
        if let Some(winner) = rules::check_winner(board) {
            return Err(PlayError::GameAlreadyWon(winner));
        }

        let mut next = board.clone();
        next.set(pos, Square::Occupied(self.to_move()));
        self.history.record(next);

        self.assert_invariants();
        Ok(())
    }

    /// Moves the view to the given history entry.
    ///
    /// The record is untouched; only the viewed index changes. Jumping
    /// to the last entry is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::InvalidMoveIndex`] if no such entry exists.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), JumpError> {
        self.history.jump_to(index)?;
        self.assert_invariants();
        Ok(())
    }

    /// Returns labels for every history entry, in move order.
    ///
    /// Lazy and restartable - each call produces a fresh pass over the
    /// current record.
    pub fn move_list(&self) -> impl Iterator<Item = MoveLabel> {
        (0..self.history.len()).map(MoveLabel::new)
    }

    /// Asserts that all history invariants hold (debug builds only).
    fn assert_invariants(&self) {
        debug_assert!(
            HistoryInvariants::check_all(&self.history).is_ok(),
            "history invariants violated: {:?}",
            HistoryInvariants::check_all(&self.history).unwrap_err()
        );
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Label for one history entry in a time-travel move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveLabel {
    index: usize,
}

impl MoveLabel {
    fn new(index: usize) -> Self {
        Self { index }
    }

    /// History index this label points at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Human-readable label for the entry.
    pub fn label(&self) -> String {
        if self.index == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.index)
        }
    }
}

impl std::fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
