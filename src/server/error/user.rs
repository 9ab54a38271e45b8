//! User account error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Errors raised by user account operations
#[derive(Error, Debug)]
pub enum UserError {
    /// A unique column (username or email) already holds the provided value.
    #[error("User {field} {value:?} is already registered")]
    DuplicateKey { field: &'static str, value: String },
    /// A registration field is empty or longer than its column allows.
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::DuplicateKey { field, .. } => match field {
                "email" => error_response(StatusCode::CONFLICT, "Email already used"),
                _ => error_response(StatusCode::CONFLICT, "Username already used"),
            },
            Self::InvalidField { field, reason } => error_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid {}: {}", field, reason),
            ),
        }
    }
}
