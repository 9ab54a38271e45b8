//! User service layer.
//!
//! This module contains business logic for user accounts: listing, registration with
//! duplicate detection, and deletion together with every favorite the user holds.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::user::{RegisterUserDto, UserDto},
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{user::UserError, Error},
    },
};

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every registered user ordered by ID.
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - All users, empty if none are registered
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_all_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Registers a new active user.
    ///
    /// The email is checked before the username, so a request colliding on both reports
    /// the email. A unique violation raised by the database on insert, which happens when
    /// two registrations race, is reported the same way as the pre-check.
    ///
    /// # Arguments
    /// - `user` - Registration details including the password to store
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::UserError(UserError::InvalidField))` - A field is empty or too long
    /// - `Err(Error::UserError(UserError::DuplicateKey))` - Username or email already used
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn register_user(&self, user: RegisterUserDto) -> Result<UserDto, Error> {
        validate_registration(&user)?;

        let user_repo = UserRepository::new(self.db);

        if let Some(existing) = user_repo
            .find_by_username_or_email(&user.username, &user.email)
            .await?
        {
            let err = if existing.email == user.email {
                UserError::DuplicateKey {
                    field: "email",
                    value: user.email,
                }
            } else {
                UserError::DuplicateKey {
                    field: "username",
                    value: user.username,
                }
            };

            return Err(err.into());
        }

        let username = user.username.clone();
        let email = user.email.clone();

        let created = match user_repo.create(user).await {
            Ok(created) => created,
            Err(err) => match duplicate_key_error(&err, username, email) {
                Some(duplicate) => return Err(duplicate.into()),
                None => return Err(err.into()),
            },
        };

        tracing::info!("Registered user ID {} ({})", created.id, created.username);

        Ok(UserDto::from(created))
    }

    /// Deletes a user and every favorite they hold.
    ///
    /// Favorites are removed in the same transaction as the user, so a failure leaves
    /// both untouched.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - No user exists with the provided ID
    /// - `Err(Error::DbErr)` - Database operation failed, nothing was deleted
    pub async fn delete_user(&self, user_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let favorites_removed = FavoriteRepository::new(&txn)
            .delete_all_by_user_id(user_id)
            .await?;
        let result = UserRepository::new(&txn).delete(user_id).await?;

        txn.commit().await?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        tracing::info!(
            "Deleted user ID {} along with {} favorites",
            user_id,
            favorites_removed
        );

        Ok(true)
    }
}

const USERNAME_MAX_LEN: usize = 50;
const NAME_MAX_LEN: usize = 50;
const EMAIL_MAX_LEN: usize = 120;
const PASSWORD_MAX_LEN: usize = 80;

/// Checks registration fields against the user table's column limits
fn validate_registration(user: &RegisterUserDto) -> Result<(), UserError> {
    let fields = [
        ("username", &user.username, USERNAME_MAX_LEN, true),
        ("first_name", &user.first_name, NAME_MAX_LEN, false),
        ("last_name", &user.last_name, NAME_MAX_LEN, false),
        ("email", &user.email, EMAIL_MAX_LEN, true),
        ("password", &user.password, PASSWORD_MAX_LEN, true),
    ];

    for (field, value, max_len, required) in fields {
        if required && value.trim().is_empty() {
            return Err(UserError::InvalidField {
                field,
                reason: "must not be empty".to_string(),
            });
        }

        if value.chars().count() > max_len {
            return Err(UserError::InvalidField {
                field,
                reason: format!("must be at most {} characters", max_len),
            });
        }
    }

    Ok(())
}

/// Maps a unique constraint violation on insert to the column that caused it
fn duplicate_key_error(err: &DbErr, username: String, email: String) -> Option<UserError> {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            if message.contains("email") {
                Some(UserError::DuplicateKey {
                    field: "email",
                    value: email,
                })
            } else {
                Some(UserError::DuplicateKey {
                    field: "username",
                    value: username,
                })
            }
        }
        _ => None,
    }
}
