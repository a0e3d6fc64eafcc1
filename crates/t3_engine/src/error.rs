//! Rule violations raised by the engine.

use derive_more::{Display, Error};

/// A move that the rules reject.
///
/// The display text is what API clients see, so it stays fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game already has a winner or is drawn.
    #[display("Game is already over.")]
    GameOver,

    /// Index is outside 0-8.
    #[display("Index must be in range [0, 8].")]
    IndexOutOfRange,

    /// The target square is taken.
    #[display("Cell already occupied.")]
    CellOccupied,
}
