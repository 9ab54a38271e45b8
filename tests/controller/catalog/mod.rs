//! Tests for catalog controller endpoints.
//!
//! This module verifies listing and single record lookups for characters, locations
//! and episodes, including 404 responses for unknown IDs.

mod get_character;
mod get_episode;
mod get_location;
mod list;

use super::*;
