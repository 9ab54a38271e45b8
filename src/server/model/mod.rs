//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers and the database
//! model type aliases together with their conversions into API DTOs.

pub mod app;
pub mod db;
