//! Read-only catalog endpoints for characters, locations and episodes.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BodyDto, ErrorDto, ResultDto},
        catalog::{CatalogKind, CharacterDto, EpisodeDto, LocationDto},
    },
    server::{
        controller::extract::ApiPath,
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

/// OpenAPI tag for the read-only catalog endpoints
pub static CATALOG_TAG: &str = "catalog";

/// List every character
#[utoipa::path(
    get,
    path = "/characters",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Characters ordered by ID", body = BodyDto<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CatalogService::new(&state.db).get_characters().await?;

    Ok((StatusCode::OK, Json(BodyDto { body: characters })))
}

/// Get a single character
///
/// # Responses
/// - 200 (OK): The character under the `Result` key
/// - 404 (Not Found): No character exists with the provided ID
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/characters/{character_id}",
    tag = CATALOG_TAG,
    params(
        ("character_id" = i32, Path, description = "ID of the character")
    ),
    responses(
        (status = 200, description = "Character found", body = ResultDto<CharacterDto>),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CatalogService::new(&state.db)
        .get_character(character_id)
        .await?
        .ok_or(CatalogError::NotFound {
            kind: CatalogKind::Character,
            id: character_id,
        })?;

    Ok((StatusCode::OK, Json(ResultDto { result: character })))
}

/// List every location
#[utoipa::path(
    get,
    path = "/locations",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Locations ordered by ID", body = BodyDto<LocationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_locations(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let locations = CatalogService::new(&state.db).get_locations().await?;

    Ok((StatusCode::OK, Json(BodyDto { body: locations })))
}

/// Get a single location
#[utoipa::path(
    get,
    path = "/locations/{location_id}",
    tag = CATALOG_TAG,
    params(
        ("location_id" = i32, Path, description = "ID of the location")
    ),
    responses(
        (status = 200, description = "Location found", body = ResultDto<LocationDto>),
        (status = 404, description = "Location not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_location(
    State(state): State<AppState>,
    ApiPath(location_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let location = CatalogService::new(&state.db)
        .get_location(location_id)
        .await?
        .ok_or(CatalogError::NotFound {
            kind: CatalogKind::Location,
            id: location_id,
        })?;

    Ok((StatusCode::OK, Json(ResultDto { result: location })))
}

/// List every episode
#[utoipa::path(
    get,
    path = "/episodes",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Episodes ordered by ID", body = BodyDto<EpisodeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_episodes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let episodes = CatalogService::new(&state.db).get_episodes().await?;

    Ok((StatusCode::OK, Json(BodyDto { body: episodes })))
}

/// Get a single episode
#[utoipa::path(
    get,
    path = "/episodes/{episode_id}",
    tag = CATALOG_TAG,
    params(
        ("episode_id" = i32, Path, description = "ID of the episode")
    ),
    responses(
        (status = 200, description = "Episode found", body = ResultDto<EpisodeDto>),
        (status = 404, description = "Episode not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_episode(
    State(state): State<AppState>,
    ApiPath(episode_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let episode = CatalogService::new(&state.db)
        .get_episode(episode_id)
        .await?
        .ok_or(CatalogError::NotFound {
            kind: CatalogKind::Episode,
            id: episode_id,
        })?;

    Ok((StatusCode::OK, Json(ResultDto { result: episode })))
}
