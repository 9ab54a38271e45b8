//! Character catalog repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository for character catalog rows
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a character
    pub async fn create(
        &self,
        character_name: String,
        gender: String,
        alive: bool,
        species: String,
    ) -> Result<entity::character::Model, DbErr> {
        let character = entity::character::ActiveModel {
            character_name: ActiveValue::Set(character_name),
            gender: ActiveValue::Set(gender),
            alive: ActiveValue::Set(alive),
            species: ActiveValue::Set(species),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Gets a character by ID, `None` if no such character exists
    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<entity::character::Model>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets all characters ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::character::Model>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }
}
