use axum::{extract::State, http::StatusCode, response::IntoResponse};
use citadel::server::controller::{extract::ApiPath, user::delete_user};

use super::*;

/// Tests deleting an existing user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = delete_user(State(test.to_app_state()), ApiPath(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests deleting a user that does not exist, deletion is idempotent.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = delete_user(State(test.to_app_state()), ApiPath(1)).await;

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

    let result = delete_user(State(test.to_app_state()), ApiPath(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
