use super::*;

/// Tests adding a character favorite with a body then listing character favorites.
///
/// Expected: `charactersFav` holding the character and no other kinds
#[tokio::test]
async fn add_then_list_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_character(5)
        .build()
        .await?;

    let (status, body) = send(
        app(&test),
        post_json(
            "/user/1/favorites/characters/5",
            json!({"character_id": 5}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Character added to favorites"}));

    let (status, body) = send(app(&test), get("/user/1/favorites/character")).await;
    assert_eq!(status, StatusCode::OK);
    let favorites = body.as_object().unwrap();
    assert_eq!(favorites.len(), 1);
    let characters = favorites["charactersFav"].as_array().unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0]["id"], 5);

    Ok(())
}

/// Tests adding the same favorite twice without a body.
///
/// Expected: both succeed and the favorite is listed exactly once
#[tokio::test]
async fn add_twice_lists_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_episode(3)
        .build()
        .await?;

    let (first, _) = send(app(&test), post_empty("/user/1/favorites/episodes/3")).await;
    let (second, _) = send(app(&test), post_empty("/user/1/favorites/episodes/3")).await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);

    let (_, body) = send(app(&test), get("/user/1/favorites")).await;
    assert_eq!(body["episodesFav"].as_array().unwrap().len(), 1);
    assert_eq!(body["charactersFav"], json!([]));
    assert_eq!(body["locationsFav"], json!([]));

    Ok(())
}

/// Tests removing a favorite twice.
///
/// Expected: first removal succeeds, second is 404 and the listing is empty
#[tokio::test]
async fn remove_then_remove_again() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_location(2)
        .with_favorite_location(1, 2)
        .build()
        .await?;

    let (status, body) = send(app(&test), delete("/user/1/favorites/locations/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Location removed from favorites"}));

    let (status, body) = send(app(&test), delete("/user/1/favorites/locations/2")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (_, body) = send(app(&test), get("/user/1/favorites/location")).await;
    assert_eq!(body, json!({"locationsFav": []}));

    Ok(())
}

/// Tests the client error statuses for favorites.
///
/// Expected: 400 for a mismatched body, 422 for an unknown record, 404 for an unknown user
#[tokio::test]
async fn client_errors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_character(5)
        .build()
        .await?;

    let (status, _) = send(
        app(&test),
        post_json(
            "/user/1/favorites/characters/5",
            json!({"character_id": 6}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(app(&test), post_empty("/user/1/favorites/characters/6")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(app(&test), post_empty("/user/2/favorites/characters/5")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}
