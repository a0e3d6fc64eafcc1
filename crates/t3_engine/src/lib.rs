//! Pure tic-tac-toe rules.
//!
//! Games are immutable [`GameState`] snapshots. [`make_move`] validates a move
//! and returns the next snapshot, or a [`MoveError`] naming the rule broken.
//!
//! # Example
//!
//! ```
//! use t3_engine::{Player, make_move, new_game, status};
//!
//! let game = new_game();
//! let game = make_move(&game, 4, Player::X)?;
//! assert_eq!(status(&game), "in progress");
//! # Ok::<(), t3_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod state;
mod types;

pub use engine::{available_moves, make_move, new_game, status};
pub use error::MoveError;
pub use position::Position;
pub use state::{GameState, GameStatus, InvalidState};
pub use types::{Board, Player, Square};
