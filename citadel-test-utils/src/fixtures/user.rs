//! User fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, factory, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user built from [`factory::mock_user_model`] with the provided ID.
    pub async fn insert_mock_user(&self, id: i32) -> Result<UserModel, TestError> {
        let user = factory::mock_user_model(id);

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(user.id),
            username: ActiveValue::Set(user.username),
            first_name: ActiveValue::Set(user.first_name),
            last_name: ActiveValue::Set(user.last_name),
            email: ActiveValue::Set(user.email),
            password: ActiveValue::Set(user.password),
            is_active: ActiveValue::Set(user.is_active),
            created_at: ActiveValue::Set(user.created_at),
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
