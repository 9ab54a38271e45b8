use axum::{extract::State, http::StatusCode, response::IntoResponse};
use citadel::server::controller::{catalog::get_episode, extract::ApiPath};

use super::*;

/// Tests getting an existing episode.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_episode() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_episode(3)
        .build()
        .await?;

    let result = get_episode(State(test.to_app_state()), ApiPath(3)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests getting a episode that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn error_for_nonexistent_episode() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = get_episode(State(test.to_app_state()), ApiPath(3)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
