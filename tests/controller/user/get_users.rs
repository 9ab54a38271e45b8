use axum::{extract::State, http::StatusCode, response::IntoResponse};
use citadel::server::controller::user::get_users;

use super::*;

/// Tests listing users when none are registered.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests listing registered users.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_with_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .build()
        .await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
