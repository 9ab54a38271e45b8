//! HTTP controller endpoints for the Citadel web API.
//!
//! This module contains Axum handlers for user accounts, the read-only catalog, and user
//! favorites. Controllers extract path parameters and bodies, call into services, and
//! return the JSON envelopes clients expect. They use utoipa for OpenAPI documentation.

pub mod catalog;
pub mod extract;
pub mod favorite;
pub mod user;
