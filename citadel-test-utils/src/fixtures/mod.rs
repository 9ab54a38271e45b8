//! Test fixture modules for database record creation.
//!
//! Each submodule provides specialized fixtures for a different part of the schema:
//!
//! - `catalog` - Characters, locations, and episodes
//! - `favorite` - User favorite join records
//! - `user` - User accounts

pub mod catalog;
pub mod favorite;
pub mod user;
