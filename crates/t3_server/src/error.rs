//! HTTP error mapping.

use crate::registry::RegistryError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Error body returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message.
    pub detail: String,
}

/// Failure of an API request.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// Request body missing fields or carrying invalid values.
    #[display("{_0}")]
    #[from(ignore)]
    Malformed(#[error(not(source))] String),

    /// Unknown game or rejected move.
    #[display("{_0}")]
    Registry(RegistryError),
}

impl ApiError {
    /// Status code for this error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Malformed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Registry(RegistryError::Rule(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Malformed(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        debug!(%status, error = %self, "Request failed");
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
