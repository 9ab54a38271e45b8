//! Error types for the Citadel server application.
//!
//! This module provides specialized error types for each domain (configuration, users,
//! catalog, favorites). All errors implement `IntoResponse` for Axum HTTP responses and
//! use `thiserror` for ergonomic error definitions.

pub mod catalog;
pub mod config;
pub mod favorite;
pub mod user;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        catalog::CatalogError, config::ConfigError, favorite::FavoriteError, user::UserError,
    },
};

/// Main error type for the Citadel server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// User error (duplicate username or email, invalid registration field).
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Catalog error (unknown character, location, or episode).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Favorite error (unknown user, dangling reference, missing favorite).
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Path parameters could not be parsed (unknown kind, non-numeric ID).
    #[error(transparent)]
    PathRejection(#[from] PathRejection),
    /// JSON request body was missing, malformed, or had the wrong shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors and extractor rejections provide their own status codes, everything else
/// is treated as an internal server error (500) with logging.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::PathRejection(rejection) => {
                tracing::debug!("{}", rejection);
                error_response(rejection.status(), rejection.body_text())
            }
            Self::JsonRejection(rejection) => {
                tracing::debug!("{}", rejection);
                error_response(rejection.status(), rejection.body_text())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the provided status code and message
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
