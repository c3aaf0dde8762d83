//! Error types for the workshop server.
//!
//! Domain errors (age calculation, configuration) are defined in their own modules and
//! aggregated into [`Error`]. Every error implements `IntoResponse` so handlers can return
//! `Result<_, Error>` and let `?` pick the HTTP status. Errors are defined with `thiserror`.

pub mod age;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{age::AgeError, config::ConfigError},
};

/// Main error type for the workshop server.
///
/// Uses `thiserror`'s `#[from]` attribute so domain errors and library errors convert via the
/// `?` operator. The `IntoResponse` implementation delegates to the domain error when it has
/// its own HTTP mapping and falls back to a 500 Internal Server Error otherwise.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Age calculation error (malformed, missing, or future birth date).
    #[error(transparent)]
    AgeError(#[from] AgeError),
    /// Internal error indicating a bug in the server's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Logger could not be installed as the global subscriber.
    #[error(transparent)]
    LoggerError(#[from] tracing::subscriber::SetGlobalDefaultError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AgeError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests;
