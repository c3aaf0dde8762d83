use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::hello::HelloDto;

pub static HELLO_TAG: &str = "hello";

pub static GREETING: &str = "Hello, World!";

/// Returns a fixed greeting
///
/// # Responses
/// - 200 (OK): `{"message": "Hello, World!"}`
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = HELLO_TAG,
    responses(
        (status = 200, description = "Fixed greeting", body = HelloDto)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HelloDto {
            message: GREETING.to_string(),
        }),
    )
}
