//! Location catalog repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository for location catalog rows
pub struct LocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    /// Creates a new instance of [`LocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a location, the name must be unique
    pub async fn create(
        &self,
        location_name: String,
        location_type: String,
        dimension: String,
    ) -> Result<entity::location::Model, DbErr> {
        let location = entity::location::ActiveModel {
            location_name: ActiveValue::Set(location_name),
            location_type: ActiveValue::Set(location_type),
            dimension: ActiveValue::Set(dimension),
            ..Default::default()
        };

        location.insert(self.db).await
    }

    /// Gets a location by ID, `None` if no such location exists
    pub async fn get_by_id(
        &self,
        location_id: i32,
    ) -> Result<Option<entity::location::Model>, DbErr> {
        entity::prelude::Location::find_by_id(location_id)
            .one(self.db)
            .await
    }

    /// Gets all locations ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::location::Model>, DbErr> {
        entity::prelude::Location::find()
            .order_by_asc(entity::location::Column::Id)
            .all(self.db)
            .await
    }
}
