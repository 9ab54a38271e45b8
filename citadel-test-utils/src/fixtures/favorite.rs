//! Favorite join record fixture utilities.
//!
//! These insert rows directly into the join tables, both the user and the target
//! catalog record must already exist as foreign keys are enforced.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::user_favorite_character::Model, TestError> {
        Ok(entity::prelude::UserFavoriteCharacter::insert(
            entity::user_favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite_location(
        &self,
        user_id: i32,
        location_id: i32,
    ) -> Result<entity::user_favorite_location::Model, TestError> {
        Ok(entity::prelude::UserFavoriteLocation::insert(
            entity::user_favorite_location::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                location_id: ActiveValue::Set(location_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite_episode(
        &self,
        user_id: i32,
        episode_id: i32,
    ) -> Result<entity::user_favorite_episode::Model, TestError> {
        Ok(entity::prelude::UserFavoriteEpisode::insert(
            entity::user_favorite_episode::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                episode_id: ActiveValue::Set(episode_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
