use axum::{extract::State, http::StatusCode, response::IntoResponse};
use citadel::server::controller::{extract::ApiPath, favorite::get_all_favorites};

use super::*;

/// Tests listing every favorite of an existing user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_episode(1)
        .with_favorite_episode(1, 1)
        .build()
        .await?;

    let result = get_all_favorites(State(test.to_app_state()), ApiPath(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests listing favorites of a user that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn error_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_all_favorites(State(test.to_app_state()), ApiPath(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
