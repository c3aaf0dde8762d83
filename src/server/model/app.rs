use crate::server::util::time::Clock;

#[derive(Clone)]
pub struct AppState {
    pub clock: Clock,
}

impl AppState {
    pub fn new(clock: Clock) -> Self {
        Self { clock }
    }
}
