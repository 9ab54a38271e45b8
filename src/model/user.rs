use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public representation of a user, the password is never included
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_active: bool,
}

/// Request body for registering a new user
///
/// First and last name are optional and stored empty when omitted.
#[derive(Clone, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub password: String,
}
