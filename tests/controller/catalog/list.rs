use axum::{extract::State, http::StatusCode, response::IntoResponse};
use citadel::server::controller::catalog::{get_characters, get_episodes, get_locations};

use super::*;

/// Tests listing every catalog kind.
///
/// Expected: Ok with 200 OK response for each kind
#[tokio::test]
async fn success_for_every_kind() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_character(1)
        .with_mock_location(1)
        .with_mock_episode(1)
        .build()
        .await?;

    let characters = get_characters(State(test.to_app_state())).await;
    let locations = get_locations(State(test.to_app_state())).await;
    let episodes = get_episodes(State(test.to_app_state())).await;

    assert_eq!(
        characters.unwrap().into_response().status(),
        StatusCode::OK
    );
    assert_eq!(locations.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(episodes.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err with 500 INTERNAL_SERVER_ERROR response
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_characters(State(test.to_app_state())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
