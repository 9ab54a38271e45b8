//! Favorites service layer.
//!
//! Manages the three user favorite relations. Every operation first confirms the user
//! exists so an unknown user is reported instead of an empty listing, and additions
//! confirm the catalog record exists before touching the relation.

#[cfg(test)]
mod tests;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        catalog::{CatalogKind, CharacterDto, EpisodeDto, LocationDto},
        favorite::FavoritesDto,
    },
    server::{
        data::{
            catalog::{
                character::CharacterRepository, episode::EpisodeRepository,
                location::LocationRepository,
            },
            favorite::FavoriteRepository,
            user::UserRepository,
        },
        error::{favorite::FavoriteError, Error},
    },
};

/// Service for reading and mutating a user's favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of FavoriteService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `FavoriteService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves the user's favorites of a single kind ordered by ID.
    ///
    /// Only the requested kind is set on the returned [`FavoritesDto`].
    ///
    /// # Returns
    /// - `Ok(FavoritesDto)` - Favorites of the requested kind, possibly empty
    /// - `Err(Error::FavoriteError(FavoriteError::UserNotFound))` - User does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_favorites(
        &self,
        user_id: i32,
        kind: CatalogKind,
    ) -> Result<FavoritesDto, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let mut favorites = FavoritesDto::default();

        match kind {
            CatalogKind::Character => {
                let characters = favorite_repo.get_characters(user_id).await?;
                favorites.characters =
                    Some(characters.into_iter().map(CharacterDto::from).collect());
            }
            CatalogKind::Location => {
                let locations = favorite_repo.get_locations(user_id).await?;
                favorites.locations = Some(locations.into_iter().map(LocationDto::from).collect());
            }
            CatalogKind::Episode => {
                let episodes = favorite_repo.get_episodes(user_id).await?;
                favorites.episodes = Some(episodes.into_iter().map(EpisodeDto::from).collect());
            }
        }

        Ok(favorites)
    }

    /// Retrieves the user's favorites of every kind.
    ///
    /// # Returns
    /// - `Ok(FavoritesDto)` - All three kinds set, each possibly empty
    /// - `Err(Error::FavoriteError(FavoriteError::UserNotFound))` - User does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_all_favorites(&self, user_id: i32) -> Result<FavoritesDto, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let characters = favorite_repo.get_characters(user_id).await?;
        let locations = favorite_repo.get_locations(user_id).await?;
        let episodes = favorite_repo.get_episodes(user_id).await?;

        Ok(FavoritesDto {
            characters: Some(characters.into_iter().map(CharacterDto::from).collect()),
            locations: Some(locations.into_iter().map(LocationDto::from).collect()),
            episodes: Some(episodes.into_iter().map(EpisodeDto::from).collect()),
        })
    }

    /// Adds a catalog record to the user's favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - The record was added
    /// - `Ok(false)` - The record was already a favorite, nothing changed
    /// - `Err(Error::FavoriteError(FavoriteError::UserNotFound))` - User does not exist
    /// - `Err(Error::FavoriteError(FavoriteError::InvalidReference))` - Record does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        entity_id: i32,
    ) -> Result<bool, Error> {
        self.ensure_user_exists(user_id).await?;

        if !self.catalog_record_exists(kind, entity_id).await? {
            return Err(FavoriteError::InvalidReference {
                kind,
                id: entity_id,
            }
            .into());
        }

        let added = FavoriteRepository::new(self.db)
            .create(kind, user_id, entity_id)
            .await?;

        if added {
            tracing::info!(
                "Added {} ID {} to favorites of user ID {}",
                kind,
                entity_id,
                user_id
            );
        } else {
            tracing::debug!(
                "{} ID {} is already a favorite of user ID {}",
                kind.label(),
                entity_id,
                user_id
            );
        }

        Ok(added)
    }

    /// Removes a catalog record from the user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - The record was removed
    /// - `Err(Error::FavoriteError(FavoriteError::UserNotFound))` - User does not exist
    /// - `Err(Error::FavoriteError(FavoriteError::NotFavorited))` - Record was not a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        entity_id: i32,
    ) -> Result<(), Error> {
        self.ensure_user_exists(user_id).await?;

        let result = FavoriteRepository::new(self.db)
            .delete(kind, user_id, entity_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(FavoriteError::NotFavorited {
                kind,
                user_id,
                entity_id,
            }
            .into());
        }

        tracing::info!(
            "Removed {} ID {} from favorites of user ID {}",
            kind,
            entity_id,
            user_id
        );

        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        match UserRepository::new(self.db).get_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(FavoriteError::UserNotFound(user_id).into()),
        }
    }

    async fn catalog_record_exists(&self, kind: CatalogKind, id: i32) -> Result<bool, Error> {
        let exists = match kind {
            CatalogKind::Character => CharacterRepository::new(self.db)
                .get_by_id(id)
                .await?
                .is_some(),
            CatalogKind::Location => LocationRepository::new(self.db)
                .get_by_id(id)
                .await?
                .is_some(),
            CatalogKind::Episode => EpisodeRepository::new(self.db)
                .get_by_id(id)
                .await?
                .is_some(),
        };

        Ok(exists)
    }
}
