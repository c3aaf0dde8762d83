//! Tests for mapping errors to HTTP responses.

use axum::{body::to_bytes, response::Response};

use super::*;


async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
