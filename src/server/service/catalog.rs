//! Catalog service layer.
//!
//! Read-only access to characters, locations and episodes converted to their DTOs.

use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{CharacterDto, EpisodeDto, LocationDto},
    server::{
        data::catalog::{
            character::CharacterRepository, episode::EpisodeRepository,
            location::LocationRepository,
        },
        error::Error,
    },
};

/// Service for reading catalog records.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of CatalogService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every character ordered by ID
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let characters = CharacterRepository::new(self.db).get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a character, `None` if it does not exist
    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character = CharacterRepository::new(self.db)
            .get_by_id(character_id)
            .await?;

        Ok(character.map(CharacterDto::from))
    }

    /// Retrieves every location ordered by ID
    pub async fn get_locations(&self) -> Result<Vec<LocationDto>, Error> {
        let locations = LocationRepository::new(self.db).get_all().await?;

        Ok(locations.into_iter().map(LocationDto::from).collect())
    }

    /// Retrieves a location, `None` if it does not exist
    pub async fn get_location(&self, location_id: i32) -> Result<Option<LocationDto>, Error> {
        let location = LocationRepository::new(self.db)
            .get_by_id(location_id)
            .await?;

        Ok(location.map(LocationDto::from))
    }

    /// Retrieves every episode ordered by ID
    pub async fn get_episodes(&self) -> Result<Vec<EpisodeDto>, Error> {
        let episodes = EpisodeRepository::new(self.db).get_all().await?;

        Ok(episodes.into_iter().map(EpisodeDto::from).collect())
    }

    /// Retrieves an episode, `None` if it does not exist
    pub async fn get_episode(&self, episode_id: i32) -> Result<Option<EpisodeDto>, Error> {
        let episode = EpisodeRepository::new(self.db).get_by_id(episode_id).await?;

        Ok(episode.map(EpisodeDto::from))
    }
}
