//! Database model type aliases and their DTO conversions.
//!
//! This module provides convenient type aliases for SeaORM database entity models used
//! throughout the application, and the one-way conversions from those models into the
//! DTOs that are serialized to clients. Conversions copy an explicit list of fields so
//! storage-only columns (password, timestamps) can never leak into a response.

use crate::model::{
    catalog::{CharacterDto, EpisodeDto, LocationDto},
    user::UserDto,
};

/// Type alias for user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `username` - Unique username
/// - `first_name` - First name
/// - `last_name` - Last name
/// - `email` - Unique email address
/// - `password` - Stored password, never serialized
/// - `is_active` - Whether the account is active
/// - `created_at` - Timestamp when the user registered
pub type UserModel = entity::user::Model;

/// Type alias for character database model.
pub type CharacterModel = entity::character::Model;

/// Type alias for location database model.
pub type LocationModel = entity::location::Model;

/// Type alias for episode database model.
pub type EpisodeModel = entity::episode::Model;

impl From<UserModel> for UserDto {
    fn from(user: UserModel) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            is_active: user.is_active,
        }
    }
}

impl From<CharacterModel> for CharacterDto {
    fn from(character: CharacterModel) -> Self {
        Self {
            id: character.id,
            character_name: character.character_name,
            gender: character.gender,
            alive: character.alive,
            species: character.species,
        }
    }
}

impl From<LocationModel> for LocationDto {
    fn from(location: LocationModel) -> Self {
        Self {
            id: location.id,
            location_name: location.location_name,
            location_type: location.location_type,
            dimension: location.dimension,
        }
    }
}

impl From<EpisodeModel> for EpisodeDto {
    fn from(episode: EpisodeModel) -> Self {
        Self {
            id: episode.id,
            episode_name: episode.episode_name,
            air_date: episode.air_date,
            episode: episode.episode,
        }
    }
}
