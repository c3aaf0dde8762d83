//! Utility helpers for server operations.

pub mod time;
