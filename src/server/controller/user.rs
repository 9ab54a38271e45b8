//! User account endpoints.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{BodyDto, ErrorDto, MessageDto, ResponseDto},
        user::{RegisterUserDto, UserDto},
    },
    server::{
        controller::extract::{ApiJson, ApiPath},
        error::Error,
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag for the user account endpoints
pub static USER_TAG: &str = "user";

/// List every registered user
///
/// # Responses
/// - 200 (OK): Users ordered by ID under the `body` key, passwords are never included
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = BodyDto<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_all_users().await?;

    Ok((StatusCode::OK, Json(BodyDto { body: users })))
}

/// Register a new user
///
/// # Responses
/// - 200 (OK): User created
/// - 400 (Bad Request): The body is not valid JSON
/// - 409 (Conflict): The username or email is already used by another user
/// - 422 (Unprocessable Entity): A field is missing, empty or longer than allowed
/// - 500 (Internal Server Error): Database error
#[utoipa::path(
    post,
    path = "/user_register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 200, description = "User registered", body = ResponseDto),
        (status = 400, description = "Malformed JSON body", body = ErrorDto),
        (status = 409, description = "Username or email already used", body = ErrorDto),
        (status = 422, description = "Invalid registration field", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register_user(
    State(state): State<AppState>,
    ApiJson(user): ApiJson<RegisterUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    user_service.register_user(user).await?;

    Ok((
        StatusCode::OK,
        Json(ResponseDto {
            response: "User registered successfully".to_string(),
        }),
    ))
}

/// Delete a user along with their favorites
///
/// Deleting a user that does not exist is not an error, the response message tells the
/// two cases apart.
///
/// # Responses
/// - 200 (OK): User deleted or did not exist
/// - 500 (Internal Server Error): Database error, nothing was deleted
#[utoipa::path(
    delete,
    path = "/user/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted or did not exist", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let msg = if user_service.delete_user(user_id).await? {
        "User deleted successfully"
    } else {
        "User does not exist"
    };

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            msg: msg.to_string(),
        }),
    ))
}
