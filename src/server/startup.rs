use dioxus_logger::tracing::{self, Level};
use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router,
    util::time::Clock,
};

/// Install the global tracing subscriber at the configured level
pub fn init_logger(level: Level) -> Result<(), Error> {
    dioxus_logger::init(level)?;

    Ok(())
}

/// Bind the configured address and serve the API until the process is stopped
pub async fn serve(config: &Config) -> Result<(), Error> {
    let address = config.address();
    let listener = TcpListener::bind(&address).await?;

    tracing::info!("Server listening on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/api/docs", address);

    axum::serve(listener, router::app(AppState::new(Clock::System))).await?;

    Ok(())
}
