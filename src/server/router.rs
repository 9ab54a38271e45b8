//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/docs`.

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /users` - List users
/// - `POST /user_register` - Register a user
/// - `DELETE /user/{user_id}` - Delete a user and their favorites
/// - `GET /characters`, `GET /characters/{character_id}` - Characters
/// - `GET /locations`, `GET /locations/{location_id}` - Locations
/// - `GET /episodes`, `GET /episodes/{episode_id}` - Episodes
/// - `GET /user/{user_id}/favorites` - Every favorite of a user
/// - `GET /user/{user_id}/favorites/{kind}` - Favorites of one kind
/// - `POST /user/{user_id}/favorites/{kind}/{entity_id}` - Add a favorite
/// - `DELETE /user/{user_id}/favorites/{kind}/{entity_id}` - Remove a favorite
///
/// The OpenAPI specification is available at `/docs/openapi.json` and Swagger UI is served
/// at `/docs`. Cross-origin requests are allowed from any origin.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes and middleware, ready for `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Citadel", description = "Citadel API"), tags(
        (name = controller::user::USER_TAG, description = "User account API routes"),
        (name = controller::catalog::CATALOG_TAG, description = "Character, location and episode API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorites API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::register_user))
        .routes(routes!(controller::user::delete_user))
        .routes(routes!(controller::catalog::get_characters))
        .routes(routes!(controller::catalog::get_character))
        .routes(routes!(controller::catalog::get_locations))
        .routes(routes!(controller::catalog::get_location))
        .routes(routes!(controller::catalog::get_episodes))
        .routes(routes!(controller::catalog::get_episode))
        .routes(routes!(controller::favorite::get_all_favorites))
        .routes(routes!(controller::favorite::get_favorites))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/docs").url("/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
