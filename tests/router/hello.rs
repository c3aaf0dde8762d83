//! Tests for GET /api/hello.

use axum::http::StatusCode;
use serde_json::json;

use super::*;

/// Tests the exact greeting body.
///
/// Expected: 200 OK with {"message": "Hello, World!"}
#[tokio::test]
async fn returns_greeting() -> Result<(), TestError> {
    let test = TestBuilder::new().build();

    let resp = get(test.into_router(), "/api/hello").await?;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!({ "message": "Hello, World!" }));

    Ok(())
}

/// Tests that query parameters do not change the greeting.
///
/// Expected: 200 OK with the same body
#[tokio::test]
async fn ignores_query_parameters() -> Result<(), TestError> {
    let test = TestBuilder::new().build();

    let resp = get(test.into_router(), "/api/hello?name=Rust&birthDay=2000-01-01").await?;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!({ "message": "Hello, World!" }));

    Ok(())
}
