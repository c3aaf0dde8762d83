//! Data transfer objects returned by the HTTP API.

pub mod age;
pub mod api;
pub mod hello;
