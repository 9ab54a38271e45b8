use citadel_test_utils::prelude::*;

use crate::{
    model::user::RegisterUserDto,
    server::{error::Error, service::user::UserService},
};


fn register_dto(username: &str, email: &str) -> RegisterUserDto {
    RegisterUserDto {
        username: username.to_string(),
        first_name: "Rick".to_string(),
        last_name: "Sanchez".to_string(),
        email: email.to_string(),
        password: "x".to_string(),
    }
}
