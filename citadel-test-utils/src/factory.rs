//! Factory functions for generating mock database models.
//!
//! Provides pure functions for creating user and catalog database models with standard
//! test values derived from the provided ID. These are in-memory model instances that
//! don't require database interaction, suitable for unit tests. The fixture helpers
//! insert the same values so a model built here matches the row a fixture creates.

use chrono::Utc;

use crate::model::{CharacterModel, EpisodeModel, LocationModel, UserModel};

/// Create a mock user database model for testing.
///
/// Username and email are derived from the ID so multiple mock users never collide
/// on unique columns.
///
/// # Arguments
/// - `id` - The user ID
///
/// # Returns
/// - `UserModel` - A user model with test data
pub fn mock_user_model(id: i32) -> UserModel {
    UserModel {
        id,
        username: format!("user{}", id),
        first_name: "Rick".to_string(),
        last_name: "Sanchez".to_string(),
        email: format!("user{}@citadel.org", id),
        password: "wubbalubbadubdub".to_string(),
        is_active: true,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock character database model for testing.
///
/// # Arguments
/// - `id` - The character ID
///
/// # Returns
/// - `CharacterModel` - A character model with test data
pub fn mock_character_model(id: i32) -> CharacterModel {
    CharacterModel {
        id,
        character_name: format!("Morty {}", id),
        gender: "Male".to_string(),
        alive: true,
        species: "Human".to_string(),
    }
}

/// Create a mock location database model for testing.
///
/// # Arguments
/// - `id` - The location ID
///
/// # Returns
/// - `LocationModel` - A location model with test data
pub fn mock_location_model(id: i32) -> LocationModel {
    LocationModel {
        id,
        location_name: format!("Earth (C-{})", id),
        location_type: "Planet".to_string(),
        dimension: format!("Dimension C-{}", id),
    }
}

/// Create a mock episode database model for testing.
///
/// # Arguments
/// - `id` - The episode ID
///
/// # Returns
/// - `EpisodeModel` - An episode model with test data
pub fn mock_episode_model(id: i32) -> EpisodeModel {
    EpisodeModel {
        id,
        episode_name: format!("Pilot {}", id),
        air_date: "December 2, 2013".to_string(),
        episode: format!("S01E{:02}", id),
    }
}
