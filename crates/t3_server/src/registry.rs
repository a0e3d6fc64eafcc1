//! In-memory game registry.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use t3_engine::{GameState, MoveError, Player};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Random v4 UUID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Borrows the id text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Registry failure.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum RegistryError {
    /// No game with this id.
    #[display("Game not found.")]
    #[from(ignore)]
    NotFound(#[error(not(source))] GameId),

    /// The engine rejected the move.
    #[display("{_0}")]
    Rule(MoveError),
}

/// Owns every live game for the lifetime of the process.
///
/// Clones share the same map. Each operation takes the lock once, so a move's
/// read, engine call and write-back cannot interleave with another move.
#[derive(Debug, Clone, Default)]
pub struct GameRegistry {
    games: Arc<Mutex<HashMap<GameId, GameState>>>,
}

impl GameRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game registry");
        Self::default()
    }

    // Entries are only ever replaced whole, so a poisoned map is still consistent.
    fn lock(&self) -> MutexGuard<'_, HashMap<GameId, GameState>> {
        self.games.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores a fresh game under a new id.
    #[instrument(skip(self))]
    pub fn create(&self) -> (GameId, GameState) {
        let state = t3_engine::new_game();
        let mut games = self.lock();

        let id = loop {
            let id = GameId::generate();
            if let Entry::Vacant(slot) = games.entry(id.clone()) {
                slot.insert(state);
                break id;
            }
        };

        info!(game_id = %id, total = games.len(), "Created game");
        (id, state)
    }

    /// Current snapshot for `id`.
    #[instrument(skip(self), fields(game_id = %id))]
    pub fn get(&self, id: &GameId) -> Result<GameState, RegistryError> {
        self.lock().get(id).copied().ok_or_else(|| {
            debug!("Game not found");
            RegistryError::NotFound(id.clone())
        })
    }

    /// Applies a move and stores the result.
    ///
    /// On any failure the stored snapshot is left as it was.
    #[instrument(skip(self), fields(game_id = %id))]
    pub fn apply_move(
        &self,
        id: &GameId,
        index: i64,
        player: Player,
    ) -> Result<GameState, RegistryError> {
        let mut games = self.lock();

        let current = games.get_mut(id).ok_or_else(|| {
            debug!("Game not found");
            RegistryError::NotFound(id.clone())
        })?;

        let next = t3_engine::make_move(current, index, player).map_err(|e| {
            warn!(error = %e, "Move rejected");
            RegistryError::Rule(e)
        })?;

        *current = next;
        info!(status = %next.status(), "Move stored");
        debug!("\n{}", next.board());
        Ok(next)
    }

    /// Number of games held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True when no game has been created.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
