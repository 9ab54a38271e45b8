//! API data transfer objects.
//!
//! These types define the JSON wire format of every request and response body. They never
//! carry storage-only fields such as the user password.

pub mod api;
pub mod catalog;
pub mod favorite;
pub mod user;
