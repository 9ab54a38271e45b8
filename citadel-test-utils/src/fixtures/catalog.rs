//! Catalog fixture utilities for characters, locations, and episodes.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    factory,
    model::{CharacterModel, EpisodeModel, LocationModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_character(&self, id: i32) -> Result<CharacterModel, TestError> {
        let character = factory::mock_character_model(id);

        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                id: ActiveValue::Set(character.id),
                character_name: ActiveValue::Set(character.character_name),
                gender: ActiveValue::Set(character.gender),
                alive: ActiveValue::Set(character.alive),
                species: ActiveValue::Set(character.species),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_location(&self, id: i32) -> Result<LocationModel, TestError> {
        let location = factory::mock_location_model(id);

        Ok(
            entity::prelude::Location::insert(entity::location::ActiveModel {
                id: ActiveValue::Set(location.id),
                location_name: ActiveValue::Set(location.location_name),
                location_type: ActiveValue::Set(location.location_type),
                dimension: ActiveValue::Set(location.dimension),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_mock_episode(&self, id: i32) -> Result<EpisodeModel, TestError> {
        let episode = factory::mock_episode_model(id);

        Ok(
            entity::prelude::Episode::insert(entity::episode::ActiveModel {
                id: ActiveValue::Set(episode.id),
                episode_name: ActiveValue::Set(episode.episode_name),
                air_date: ActiveValue::Set(episode.air_date),
                episode: ActiveValue::Set(episode.episode),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
