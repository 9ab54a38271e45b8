use axum::{extract::State, http::StatusCode, response::IntoResponse};
use citadel::{
    model::user::RegisterUserDto,
    server::controller::{extract::ApiJson, user::register_user},
};

use super::*;

fn register_dto(username: &str, email: &str) -> RegisterUserDto {
    RegisterUserDto {
        username: username.to_string(),
        first_name: "Rick".to_string(),
        last_name: "Sanchez".to_string(),
        email: email.to_string(),
        password: "x".to_string(),
    }
}

/// Tests registering a new user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_new_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register_user(
        State(test.to_app_state()),
        ApiJson(register_dto("rick77", "rick@citadel.org")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests registering with an email already used by another user.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn error_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .build()
        .await?;
    let existing = factory::mock_user_model(1);

    let result = register_user(
        State(test.to_app_state()),
        ApiJson(register_dto("rick77", &existing.email)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

/// Tests registering with a username already used by another user.
///
/// Expected: Err with 409 CONFLICT response
#[tokio::test]
async fn error_for_duplicate_username() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .build()
        .await?;
    let existing = factory::mock_user_model(1);

    let result = register_user(
        State(test.to_app_state()),
        ApiJson(register_dto(&existing.username, "rick@citadel.org")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
