//! Tic-tac-toe game server.
//!
//! Holds games in an in-memory [`GameRegistry`] and exposes them over a small
//! REST API:
//!
//! - `POST /tictactoe/new` creates a game
//! - `GET /tictactoe/{id}` returns its state
//! - `POST /tictactoe/{id}/move` places a symbol
//!
//! # Example
//!
//! ```no_run
//! use t3_server::{GameRegistry, ServerConfig, app};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = app(GameRegistry::new(), &config)?;
//! let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod dto;
mod error;
mod registry;
mod routes;

pub use config::{ConfigError, ServerConfig};
pub use dto::{GameStateDto, MoveRequest};
pub use error::{ApiError, ErrorBody};
pub use registry::{GameId, GameRegistry, RegistryError};
pub use routes::{app, router};
