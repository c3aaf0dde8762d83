//! Service layer for business logic.
//!
//! Services are plain structs built per request from the application state; they hold no
//! state shared across requests.

pub mod calc_age;
