use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Confirmation returned by endpoints that mutate state
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResponseDto {
    pub response: String,
}

/// Status message returned when deleting a user
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub msg: String,
}

/// Wrapper for list endpoints, items are returned under the `body` key
#[derive(Serialize, Deserialize, ToSchema)]
pub struct BodyDto<T> {
    pub body: Vec<T>,
}

/// Wrapper for single record lookups, the record is returned under the `Result` key
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ResultDto<T> {
    #[serde(rename = "Result")]
    pub result: T,
}
