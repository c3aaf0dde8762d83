use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced while turning a birth date string into an age.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    /// The input is not an existing `YYYY-MM-DD` calendar date.
    #[error("Invalid birth date format {input:?}, expected YYYY-MM-DD")]
    InvalidFormat { input: String },
    /// The input parsed but cannot be anyone's birth date.
    #[error("Invalid birth date: {reason}")]
    InvalidValue { reason: String },
}

impl AgeError {
    pub fn missing() -> Self {
        Self::InvalidValue {
            reason: "birth date is required".to_string(),
        }
    }

    pub fn future() -> Self {
        Self::InvalidValue {
            reason: "future birth date".to_string(),
        }
    }
}

impl IntoResponse for AgeError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected age calculation request: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
