//! Citadel: a catalog of characters, locations and episodes with per-user favorites,
//! served as a JSON HTTP API.

pub mod model;
pub mod server;
