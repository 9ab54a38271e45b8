//! End to end scenarios driving the full router.
//!
//! These tests send HTTP requests through the same router the server runs, covering
//! routing, extractors, JSON envelopes and status codes together.

mod favorites;
mod malformed_requests;

use axum::http::StatusCode;
use citadel_test_utils::prelude::*;
use serde_json::json;

use crate::util::{app, delete, get, post_empty, post_json, post_raw, send};
