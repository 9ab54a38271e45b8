//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main citadel crate to ensure consistency across tests.

/// Type alias for user database model.
pub type UserModel = entity::user::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for location database model.
pub type LocationModel = entity::location::Model;

/// Type alias for episode database model.
pub type EpisodeModel = entity::episode::Model;
