//! Episode catalog repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository for episode catalog rows
pub struct EpisodeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EpisodeRepository<'a, C> {
    /// Creates a new instance of [`EpisodeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an episode, both the name and the episode code must be unique
    pub async fn create(
        &self,
        episode_name: String,
        air_date: String,
        episode: String,
    ) -> Result<entity::episode::Model, DbErr> {
        let episode = entity::episode::ActiveModel {
            episode_name: ActiveValue::Set(episode_name),
            air_date: ActiveValue::Set(air_date),
            episode: ActiveValue::Set(episode),
            ..Default::default()
        };

        episode.insert(self.db).await
    }

    /// Gets a episode by ID, `None` if no such episode exists
    pub async fn get_by_id(
        &self,
        episode_id: i32,
    ) -> Result<Option<entity::episode::Model>, DbErr> {
        entity::prelude::Episode::find_by_id(episode_id)
            .one(self.db)
            .await
    }

    /// Gets all episodes ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::episode::Model>, DbErr> {
        entity::prelude::Episode::find()
            .order_by_asc(entity::episode::Column::Id)
            .all(self.db)
            .await
    }
}
