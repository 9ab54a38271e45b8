//! Server application core modules.
//!
//! This module contains all server-side functionality for the Citadel API: HTTP routing,
//! request handlers, the service layer holding the favorites rules, and the repositories
//! that persist users, catalog records, and favorite relations.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
