use axum::{extract::State, http::StatusCode, response::IntoResponse};
use citadel::{
    model::{catalog::CatalogKind, favorite::AddFavoriteDto},
    server::controller::{
        extract::{ApiJson, ApiPath},
        favorite::add_favorite,
    },
};

use super::*;

/// Tests adding a favorite without a request body.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_without_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_character(5)
        .build()
        .await?;

    let result = add_favorite(
        State(test.to_app_state()),
        ApiPath((1, CatalogKind::Character, 5)),
        None,
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests adding a favorite that is already present, the request still succeeds.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_existing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_character(5)
        .with_favorite_character(1, 5)
        .build()
        .await?;

    let body = AddFavoriteDto {
        character_id: Some(5),
        ..Default::default()
    };
    let result = add_favorite(
        State(test.to_app_state()),
        ApiPath((1, CatalogKind::Character, 5)),
        Some(ApiJson(body)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests a request body ID that does not match the path ID.
///
/// Expected: Err with 400 BAD_REQUEST response
#[tokio::test]
async fn error_for_mismatched_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_episode(2)
        .build()
        .await?;

    let body = AddFavoriteDto {
        episode_id: Some(3),
        ..Default::default()
    };
    let result = add_favorite(
        State(test.to_app_state()),
        ApiPath((1, CatalogKind::Episode, 2)),
        Some(ApiJson(body)),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests adding a catalog record that does not exist.
///
/// Expected: Err with 422 UNPROCESSABLE_ENTITY response
#[tokio::test]
async fn error_for_nonexistent_record() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = add_favorite(
        State(test.to_app_state()),
        ApiPath((1, CatalogKind::Location, 9)),
        None,
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

/// Tests adding a favorite for a user that does not exist.
///
/// Expected: Err with 404 NOT_FOUND response
#[tokio::test]
async fn error_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_location(9)
        .build()
        .await?;

    let result = add_favorite(
        State(test.to_app_state()),
        ApiPath((1, CatalogKind::Location, 9)),
        None,
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
