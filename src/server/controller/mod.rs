//! HTTP controller endpoints for the workshop API.
//!
//! Axum handlers that extract request inputs, call into the service layer and map results to
//! JSON responses. Each handler is annotated with utoipa so it shows up in the OpenAPI document.

pub mod calc_age;
pub mod hello;
