//! Helpers for driving an axum router in-process.

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use crate::error::TestError;

/// Status and decoded JSON body of a response.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

/// Sends a GET request for `uri` through `router` and decodes the JSON body.
pub async fn get(router: Router, uri: &str) -> Result<TestResponse, TestError> {
    let request = Request::builder().method("GET").uri(uri).body(Body::empty())?;

    // Router's error type is Infallible
    let response = match router.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = serde_json::from_slice(&bytes)?;

    Ok(TestResponse { status, body })
}
