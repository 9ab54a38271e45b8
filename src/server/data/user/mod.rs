//! User account repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::user::RegisterUserDto;

/// Repository for user account rows
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    ///
    /// Returns a database error when the username or email violates a unique constraint.
    pub async fn create(&self, user: RegisterUserDto) -> Result<entity::user::Model, DbErr> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(user.username),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by ID, `None` if no such user exists
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a user already holding the provided username or email
    pub async fn find_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Username.eq(username))
                    .add(entity::user::Column::Email.eq(email)),
            )
            .one(self.db)
            .await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
