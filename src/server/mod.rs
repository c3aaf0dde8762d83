//! Server application core modules.
//!
//! HTTP routing, controllers, the age calculation service, configuration and error handling
//! for the workshop API.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
