//! Favorite relation repository.
//!
//! Each catalog kind has its own join table keyed by `(user_id, <kind>_id)`. The composite
//! primary key makes every relation a set: a pair is either a member or it is not, and a
//! second insert of the same pair can never produce a duplicate row.

#[cfg(test)]
mod tests;

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use crate::model::catalog::CatalogKind;

/// Repository for the per-kind favorite join tables
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the characters favorited by a user, ordered by character ID
    pub async fn get_characters(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .inner_join(entity::prelude::UserFavoriteCharacter)
            .filter(entity::user_favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the locations favorited by a user, ordered by location ID
    pub async fn get_locations(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .inner_join(entity::prelude::UserFavoriteLocation)
            .filter(entity::user_favorite_location::Column::UserId.eq(user_id))
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the episodes favorited by a user, ordered by episode ID
    pub async fn get_episodes(&self, user_id: i32) -> Result<Vec<entity::episode::Model>, DbErr> {
        entity::prelude::Episode::find()
            .inner_join(entity::prelude::UserFavoriteEpisode)
            .filter(entity::user_favorite_episode::Column::UserId.eq(user_id))
            .order_by_asc(entity::episode::Column::Id)
            .all(self.db)
            .await
    }

    /// Checks whether the pair is a member of the relation for `kind`
    pub async fn exists(
        &self,
        kind: CatalogKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<bool, DbErr> {
        let found = match kind {
            CatalogKind::Character => entity::prelude::UserFavoriteCharacter::find_by_id((
                user_id, entity_id,
            ))
            .one(self.db)
            .await?
            .is_some(),
            CatalogKind::Location => entity::prelude::UserFavoriteLocation::find_by_id((
                user_id, entity_id,
            ))
            .one(self.db)
            .await?
            .is_some(),
            CatalogKind::Episode => {
                entity::prelude::UserFavoriteEpisode::find_by_id((user_id, entity_id))
                    .one(self.db)
                    .await?
                    .is_some()
            }
        };

        Ok(found)
    }

    /// Adds the pair to the relation for `kind`
    ///
    /// # Returns
    /// - `Ok(true)` - The pair was inserted
    /// - `Ok(false)` - The pair was already a member, nothing was written
    /// - `Err(DbErr)` - Database error, including foreign key violations when the user or
    ///   catalog record does not exist
    pub async fn create(
        &self,
        kind: CatalogKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<bool, DbErr> {
        if self.exists(kind, user_id, entity_id).await? {
            return Ok(false);
        }

        let created_at = Utc::now().naive_utc();
        let result = match kind {
            CatalogKind::Character => entity::prelude::UserFavoriteCharacter::insert(
                entity::user_favorite_character::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    character_id: ActiveValue::Set(entity_id),
                    created_at: ActiveValue::Set(created_at),
                },
            )
            .exec_without_returning(self.db)
            .await,
            CatalogKind::Location => entity::prelude::UserFavoriteLocation::insert(
                entity::user_favorite_location::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    location_id: ActiveValue::Set(entity_id),
                    created_at: ActiveValue::Set(created_at),
                },
            )
            .exec_without_returning(self.db)
            .await,
            CatalogKind::Episode => entity::prelude::UserFavoriteEpisode::insert(
                entity::user_favorite_episode::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    episode_id: ActiveValue::Set(entity_id),
                    created_at: ActiveValue::Set(created_at),
                },
            )
            .exec_without_returning(self.db)
            .await,
        };

        match result {
            Ok(_) => Ok(true),
            // Another request inserted the same pair between the check and the insert
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Removes the pair from the relation for `kind`
    ///
    /// Returns OK regardless of the pair existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(
        &self,
        kind: CatalogKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        match kind {
            CatalogKind::Character => {
                entity::prelude::UserFavoriteCharacter::delete_by_id((user_id, entity_id))
                    .exec(self.db)
                    .await
            }
            CatalogKind::Location => {
                entity::prelude::UserFavoriteLocation::delete_by_id((user_id, entity_id))
                    .exec(self.db)
                    .await
            }
            CatalogKind::Episode => {
                entity::prelude::UserFavoriteEpisode::delete_by_id((user_id, entity_id))
                    .exec(self.db)
                    .await
            }
        }
    }

    /// Removes every favorite of every kind held by a user
    ///
    /// # Returns
    /// - `Ok(u64)` - Total number of favorite rows removed
    pub async fn delete_all_by_user_id(&self, user_id: i32) -> Result<u64, DbErr> {
        let characters = entity::prelude::UserFavoriteCharacter::delete_many()
            .filter(entity::user_favorite_character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        let locations = entity::prelude::UserFavoriteLocation::delete_many()
            .filter(entity::user_favorite_location::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;
        let episodes = entity::prelude::UserFavoriteEpisode::delete_many()
            .filter(entity::user_favorite_episode::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(characters.rows_affected + locations.rows_affected + episodes.rows_affected)
    }
}
