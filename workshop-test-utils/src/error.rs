use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    HttpError(#[from] axum::http::Error),
    #[error(transparent)]
    AxumError(#[from] axum::Error),
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    #[error("Date arithmetic out of range: {0}")]
    DateOutOfRange(String),
}
