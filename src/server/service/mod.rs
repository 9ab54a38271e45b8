//! Service layer for business logic.
//!
//! This module contains the service layer that implements business logic on top of the
//! repositories. Services validate references, translate database outcomes into domain
//! errors and convert models into DTOs. Services include user management, catalog reads
//! and user favorites.

pub mod catalog;
pub mod favorite;
pub mod user;
