//! Request extractors that reject with the API's JSON error body.
//!
//! Axum's own [`Path`] and [`Json`] extractors reject with a plain text body. These wrappers
//! delegate to them and convert the rejection into [`Error`], so a malformed path or body
//! is answered with `{"error": "..."}` like every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts, OptionalFromRequest, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::Error;

/// Path parameters deserialized into `T`
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;

        Ok(Self(value))
    }
}

/// JSON request body deserialized into `T`
///
/// Wrap in `Option` for an optional body: a request without a JSON content type yields
/// `None`, while a JSON body that fails to parse is still rejected.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;

        Ok(Self(value))
    }
}

impl<T, S> OptionalFromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Option<Self>, Self::Rejection> {
        let value = <Json<T> as OptionalFromRequest<S>>::from_request(req, state).await?;

        Ok(value.map(|Json(value)| Self(value)))
    }
}
