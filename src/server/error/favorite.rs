//! Favorite relation error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::catalog::CatalogKind, server::error::error_response};

/// Errors raised when reading or mutating a user's favorites
#[derive(Error, Debug)]
pub enum FavoriteError {
    /// The user whose favorites were requested does not exist.
    #[error("User ID {0} not found")]
    UserNotFound(i32),
    /// The favorite would reference a catalog record that does not exist.
    #[error("Cannot favorite {kind} ID {id} as it does not exist")]
    InvalidReference { kind: CatalogKind, id: i32 },
    /// The pair is not currently part of the user's favorites.
    #[error("{} ID {entity_id} is not a favorite of user ID {user_id}", .kind.label())]
    NotFavorited {
        kind: CatalogKind,
        user_id: i32,
        entity_id: i32,
    },
    /// The ID in the request body disagrees with the ID in the path.
    #[error("Request body ID {body_id} does not match path ID {path_id}")]
    MismatchedBody { path_id: i32, body_id: i32 },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::InvalidReference { kind, .. } => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("{} not found", kind.label()),
            ),
            Self::NotFavorited { kind, .. } => error_response(
                StatusCode::NOT_FOUND,
                format!("{} is not in favorites", kind.label()),
            ),
            Self::MismatchedBody { .. } => error_response(
                StatusCode::BAD_REQUEST,
                "Request body ID does not match the path",
            ),
        }
    }
}
