//! Extension trait turning a test context into server state

use axum::Router;
use workshop::server::{model::app::AppState, router, util::time::Clock};
use workshop_test_utils::TestContext;

pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
    fn into_router(&self) -> Router;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let clock = match self.today {
            Some(today) => Clock::Fixed(today),
            None => Clock::System,
        };

        AppState::new(clock)
    }

    fn into_router(&self) -> Router {
        router::app(self.into_app_state())
    }
}
