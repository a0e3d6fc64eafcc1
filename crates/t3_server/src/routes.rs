//! REST routes for tic-tac-toe games.

use crate::config::{ConfigError, ServerConfig};
use crate::dto::{GameStateDto, MoveRequest};
use crate::error::ApiError;
use crate::registry::{GameId, GameRegistry};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

/// Game routes bound to `registry`, without middleware.
pub fn router(registry: GameRegistry) -> Router {
    Router::new()
        .route("/tictactoe/new", post(create_game))
        .route("/tictactoe/{id}", get(get_game))
        .route("/tictactoe/{id}/move", post(make_move))
        .with_state(registry)
}

/// Full application: game routes plus CORS and request tracing.
pub fn app(registry: GameRegistry, config: &ServerConfig) -> Result<Router, ConfigError> {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(config.cors_origins()?))
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(router(registry)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Creates a game. The request body is ignored.
#[instrument(skip(registry))]
async fn create_game(State(registry): State<GameRegistry>) -> Json<GameStateDto> {
    let (id, state) = registry.create();
    info!(game_id = %id, "New game");
    Json(GameStateDto::new(id, &state))
}

/// Returns the current snapshot of a game.
#[instrument(skip(registry))]
async fn get_game(
    State(registry): State<GameRegistry>,
    Path(id): Path<GameId>,
) -> Result<Json<GameStateDto>, ApiError> {
    let state = registry.get(&id)?;
    Ok(Json(GameStateDto::new(id, &state)))
}

/// Applies a move.
///
/// The body is validated before the game is looked up.
#[instrument(skip(registry, payload))]
async fn make_move(
    State(registry): State<GameRegistry>,
    Path(id): Path<GameId>,
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<GameStateDto>, ApiError> {
    let Json(req) = payload?;
    info!(index = req.index, player = %req.player, "Move requested");

    let state = registry.apply_move(&id, req.index, req.player)?;
    Ok(Json(GameStateDto::new(id, &state)))
}
