//! Endpoints for listing, adding and removing user favorites.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ResponseDto},
        catalog::CatalogKind,
        favorite::{AddFavoriteDto, FavoritesDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::{favorite::FavoriteError, Error},
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for the favorites endpoints
pub static FAVORITE_TAG: &str = "favorite";

/// Get every favorite of a user grouped by kind
///
/// # Responses
/// - 200 (OK): `charactersFav`, `locationsFav` and `episodesFav`, each ordered by ID
/// - 404 (Not Found): The user does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Favorites of every kind", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_favorites(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .get_all_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Get the favorites of a user for a single kind
///
/// Only the key for the requested kind is present in the response, e.g. `charactersFav`.
///
/// # Responses
/// - 200 (OK): Favorites of the requested kind ordered by ID
/// - 404 (Not Found): The user does not exist
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/user/{user_id}/favorites/{kind}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("kind" = CatalogKind, Path, description = "character, location or episode")
    ),
    responses(
        (status = 200, description = "Favorites of the requested kind", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(
    State(state): State<AppState>,
    ApiPath((user_id, kind)): ApiPath<(i32, CatalogKind)>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .get_favorites(user_id, kind)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Add a catalog record to a user's favorites
///
/// The body is optional. When sent, the ID under the key for the kind (e.g. `character_id`)
/// must match the ID in the path. Adding a record that is already a favorite succeeds
/// without creating a duplicate.
///
/// # Responses
/// - 200 (OK): Record is a favorite of the user
/// - 400 (Bad Request): The body ID does not match the path ID, or the path is malformed
/// - 404 (Not Found): The user does not exist
/// - 422 (Unprocessable Entity): The catalog record does not exist, or the body is mistyped
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/user/{user_id}/favorites/{kind}/{entity_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("kind" = CatalogKind, Path, description = "characters, locations or episodes"),
        ("entity_id" = i32, Path, description = "ID of the catalog record")
    ),
    request_body(content = AddFavoriteDto, description = "Optional, the ID must match the path"),
    responses(
        (status = 200, description = "Record added to favorites", body = ResponseDto),
        (status = 400, description = "Body ID does not match path ID", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Catalog record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, kind, entity_id)): ApiPath<(i32, CatalogKind, i32)>,
    body: Option<ApiJson<AddFavoriteDto>>,
) -> Result<impl IntoResponse, Error> {
    if let Some(body_id) = body.and_then(|ApiJson(body)| body.id_for(kind)) {
        if body_id != entity_id {
            return Err(FavoriteError::MismatchedBody {
                path_id: entity_id,
                body_id,
            }
            .into());
        }
    }

    FavoriteService::new(&state.db)
        .add_favorite(user_id, kind, entity_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto {
            response: format!("{} added to favorites", kind.label()),
        }),
    ))
}

/// Remove a catalog record from a user's favorites
///
/// # Responses
/// - 200 (OK): Record removed from favorites
/// - 404 (Not Found): The user does not exist or the record is not a favorite
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    delete,
    path = "/user/{user_id}/favorites/{kind}/{entity_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("kind" = CatalogKind, Path, description = "characters, locations or episodes"),
        ("entity_id" = i32, Path, description = "ID of the catalog record")
    ),
    responses(
        (status = 200, description = "Record removed from favorites", body = ResponseDto),
        (status = 404, description = "User not found or record not a favorite", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, kind, entity_id)): ApiPath<(i32, CatalogKind, i32)>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(user_id, kind, entity_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto {
            response: format!("{} removed from favorites", kind.label()),
        }),
    ))
}
