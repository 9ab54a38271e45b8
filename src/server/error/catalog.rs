//! Catalog lookup error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{model::catalog::CatalogKind, server::error::error_response};

/// Errors raised by catalog lookups
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{} ID {id} not found", .kind.label())]
    NotFound { kind: CatalogKind, id: i32 },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound { kind, .. } => error_response(
                StatusCode::NOT_FOUND,
                format!("The {} you are looking for doesn't exist.", kind),
            ),
        }
    }
}
