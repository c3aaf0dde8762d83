//! Server application models.
//!
//! Holds the state shared by every HTTP handler.

pub mod app;
