//! Pure tic-tac-toe game logic with move history and time travel.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the snapshot history and exposes
//!   the mutators (`play`, `jump_to`) and queries (`current_board`,
//!   `status`, `move_list`) a presentation layer renders from
//! - **Rules**: pure win/draw evaluation over any board snapshot
//! - **History**: one immutable board per move, truncate-then-append on
//!   replay from a past entry
//! - **Invariants**: first-class, composable checks of the history laws
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{GameEngine, Player};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameEngine::new();
//! game.play(4)?; // X takes the center
//! game.play(0)?; // O answers in the corner
//!
//! assert_eq!(game.to_move(), Player::X);
//! println!("{}", game.status()); // "Next player: X"
//!
//! // Time travel: view the position after X's first move.
//! game.jump_to(1)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod error;
mod history;
mod position;
mod rules;
mod types;

pub mod invariants;

// Crate-level exports - engine
pub use engine::{GameEngine, MoveLabel};

// Crate-level exports - errors
pub use error::{JumpError, PlayError};

// Crate-level exports - history
pub use history::History;

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - rule functions
pub use rules::{check_winner, is_draw, is_full};
