//! Game snapshots.

use crate::{Board, Player};
use serde::{Deserialize, Serialize};

/// Terminal condition of a game, derived from a [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Game ended in a win.
    #[display("{_0} wins")]
    Won(Player),
    /// Game ended in a draw.
    #[display("draw")]
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Immutable game snapshot.
///
/// `winner` and `is_draw` are never both set; once either is set the game
/// accepts no further moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    board: Board,
    winner: Option<Player>,
    is_draw: bool,
}

impl GameState {
    pub(crate) fn from_parts(board: Board, winner: Option<Player>, is_draw: bool) -> Self {
        debug_assert!(!(winner.is_some() && is_draw));
        Self {
            board,
            winner,
            is_draw,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// True when the board filled up without a winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Typed status view.
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// True once a winner or draw has been recorded.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::from_parts(Board::new(), None, false)
    }
}

/// Rejected snapshot on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("game state cannot have both a winner and a draw")]
pub struct InvalidState;

#[derive(Deserialize)]
struct RawGameState {
    board: Board,
    winner: Option<Player>,
    is_draw: bool,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.winner.is_some() && raw.is_draw {
            return Err(InvalidState);
        }
        Ok(Self {
            board: raw.board,
            winner: raw.winner,
            is_draw: raw.is_draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
        assert_eq!(GameStatus::Won(Player::O).to_string(), "O wins");
        assert_eq!(GameStatus::Draw.to_string(), "draw");
    }

    #[test]
    fn test_default_is_in_progress() {
        let state = GameState::default();
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(!state.is_over());
    }

    #[test]
    fn test_rejects_winner_and_draw() {
        let json = format!(
            r#"{{"board": {}, "winner": "X", "is_draw": true}}"#,
            serde_json::to_string(&Board::new()).unwrap()
        );
        let result: Result<GameState, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }
}
