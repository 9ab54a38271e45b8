use super::*;

/// Tests listing favorites for a kind that is not a catalog kind.
///
/// Expected: 400 with an `error` string body
#[tokio::test]
async fn unknown_kind_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let (status, body) = send(app(&test), get("/user/1/favorites/users")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests path IDs that are not integers across user, favorite and catalog routes.
///
/// Expected: 400 with an `error` string body for each route
#[tokio::test]
async fn non_numeric_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    for request in [
        get("/user/abc/favorites"),
        get("/characters/abc"),
        delete("/user/abc"),
        post_empty("/user/1/favorites/characters/abc"),
    ] {
        let (status, body) = send(app(&test), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    Ok(())
}

/// Tests registering with a body that is not valid JSON.
///
/// Expected: 400 with an `error` string body and no user created
#[tokio::test]
async fn malformed_registration_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let (status, body) = send(
        app(&test),
        post_raw("/user_register", r#"{"username": "rick77", "email":"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
    let (_, body) = send(app(&test), get("/users")).await;
    assert!(body["body"].as_array().unwrap().is_empty());

    Ok(())
}

/// Tests registering without the required email field.
///
/// Expected: 422 with an `error` string body
#[tokio::test]
async fn registration_missing_field_is_unprocessable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let (status, body) = send(
        app(&test),
        post_json(
            "/user_register",
            json!({"username": "rick77", "password": "x"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    Ok(())
}

/// Tests registering a username longer than the username column allows.
///
/// Expected: 422 with an `error` naming the username, and no user created
#[tokio::test]
async fn overlong_username_is_unprocessable() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let (status, body) = send(
        app(&test),
        post_json(
            "/user_register",
            json!({
                "username": "r".repeat(51),
                "email": "rick@citadel.org",
                "password": "x"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"error": "Invalid username: must be at most 50 characters"})
    );
    let (_, body) = send(app(&test), get("/users")).await;
    assert!(body["body"].as_array().unwrap().is_empty());

    Ok(())
}

/// Tests adding a favorite with the body ID sent as a string.
///
/// Expected: 422 with an `error` string body and no favorite created
#[tokio::test]
async fn mistyped_favorite_body_is_unprocessable() -> Result<(), TestError> {
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
            json!({"character_id": "5"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());
    let (_, body) = send(app(&test), get("/user/1/favorites/characters")).await;
    assert!(body["charactersFav"].as_array().unwrap().is_empty());

    Ok(())
}
