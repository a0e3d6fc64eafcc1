//! Move application.
//!
//! Every function takes a snapshot by reference and hands back a new value,
//! so a caller holding an older [`GameState`] never sees it change.
//!
//! Turn order is not enforced here. Either symbol may be placed in any empty
//! square until the game ends; callers that want alternation wrap these
//! functions with their own policy.

use crate::rules::{check_winner, is_draw};
use crate::{GameState, MoveError, Player, Position, Square};
use tracing::{debug, instrument};

/// Fresh game: empty board, no winner, not a draw.
#[instrument]
pub fn new_game() -> GameState {
    GameState::default()
}

/// Places `player` at `index` and returns the resulting snapshot.
///
/// Checks run in order: game over, index range, occupied square. After
/// placement a completed line sets the winner; otherwise a full board is a
/// draw.
///
/// # Errors
///
/// Returns the [`MoveError`] variant for the first rule violated.
#[instrument(skip(state), fields(status = %state.status()))]
pub fn make_move(state: &GameState, index: i64, player: Player) -> Result<GameState, MoveError> {
    if state.is_over() {
        return Err(MoveError::GameOver);
    }

    let pos = Position::from_index(index).ok_or(MoveError::IndexOutOfRange)?;

    if !state.board().is_empty(pos) {
        return Err(MoveError::CellOccupied);
    }

    let board = state.board().with(pos, Square::Occupied(player));

    let next = if let Some(winner) = check_winner(&board) {
        GameState::from_parts(board, Some(winner), false)
    } else if is_draw(&board) {
        GameState::from_parts(board, None, true)
    } else {
        GameState::from_parts(board, None, false)
    };

    debug!(position = %pos, status = %next.status(), "Move applied");
    Ok(next)
}

/// Indices of empty squares in ascending order.
pub fn available_moves(state: &GameState) -> Vec<usize> {
    Position::ALL
        .iter()
        .filter(|pos| state.board().is_empty(**pos))
        .map(|pos| pos.to_index())
        .collect()
}

/// `"<player> wins"`, `"draw"` or `"in progress"`.
pub fn status(state: &GameState) -> String {
    state.status().to_string()
}
