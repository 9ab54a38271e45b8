//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (users, catalog records and user favorites).

pub mod catalog;
pub mod favorite;
pub mod user;
