//! Request and response bodies.

use crate::registry::GameId;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use t3_engine::{Board, GameState, Player};

/// Request for making a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Board index (0-8, where 0=top-left, 8=bottom-right).
    ///
    /// Any JSON integer is accepted and clamped into `i64`, so out-of-range
    /// values reach the rules and get the rule-violation response rather
    /// than a body error.
    #[serde(deserialize_with = "deserialize_index")]
    pub index: i64,
    /// Symbol to place.
    pub player: Player,
}

struct IndexVisitor;

impl Visitor<'_> for IndexVisitor {
    type Value = i64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
        Ok(i64::try_from(v).unwrap_or(i64::MAX))
    }

    // Integers beyond 64 bits arrive as floats; `as` saturates.
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
        if v.is_finite() && v.fract() == 0.0 {
            Ok(v as i64)
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }
}

fn deserialize_index<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    deserializer.deserialize_any(IndexVisitor)
}

/// Game snapshot as returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateDto {
    /// Game id.
    pub id: GameId,
    /// Nine squares, `null` when empty.
    pub board: Board,
    /// Winning symbol, if any.
    pub winner: Option<Player>,
    /// True when the board filled with no winner.
    pub is_draw: bool,
    /// `"X wins"`, `"O wins"`, `"draw"` or `"in progress"`.
    pub status: String,
}

impl GameStateDto {
    /// Builds the response body for a stored game.
    pub fn new(id: GameId, state: &GameState) -> Self {
        Self {
            id,
            board: *state.board(),
            winner: state.winner(),
            is_draw: state.is_draw(),
            status: t3_engine::status(state),
        }
    }
}
