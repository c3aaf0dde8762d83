//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and Swagger
//! UI is mounted at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/hello` - Fixed greeting
/// - `GET /api/calc-age?birthDay=YYYY-MM-DD` - Age in whole years
///
/// The OpenAPI document is served at `/api/docs/openapi.json` and Swagger UI at `/api/docs`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(Clock::System));
/// ```
pub fn routes() -> Router<AppState> {
    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::hello::hello))
        .routes(routes!(controller::calc_age::calc_age))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the router with state applied, ready to be served.
pub fn app(state: AppState) -> Router {
    routes().with_state(state)
}

#[derive(OpenApi)]
#[openapi(info(title = "Workshop", description = "Workshop API"), tags(
    (name = controller::hello::HELLO_TAG, description = "Greeting API routes"),
    (name = controller::calc_age::CALC_AGE_TAG, description = "Age calculation API routes"),
))]
struct ApiDoc;
