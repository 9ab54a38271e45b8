//! Catalog data repositories.
//!
//! Characters, locations, and episodes are reference data. The HTTP API only reads them,
//! `create` exists for seeding and admin tooling.

pub mod character;
pub mod episode;
pub mod location;
