use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{age::CalcAgeDto, api::ErrorDto},
    server::{error::Error, model::app::AppState, service::calc_age::CalcAgeService},
};

pub static CALC_AGE_TAG: &str = "calc-age";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CalcAgeParams {
    /// Birth date as an ISO-8601 calendar date (YYYY-MM-DD)
    #[serde(rename = "birthDay")]
    #[param(example = "1990-04-01")]
    pub birth_day: Option<String>,
}

/// Calculate age in whole years from a birth date
///
/// Parses the `birthDay` query parameter and returns the number of complete years elapsed
/// between it and today.
///
/// # Responses
/// - 200 (OK): `{"age": <years>}`
/// - 400 (Bad Request): `birthDay` missing, not a valid YYYY-MM-DD date, or in the future
#[utoipa::path(
    get,
    path = "/api/calc-age",
    tag = CALC_AGE_TAG,
    params(CalcAgeParams),
    responses(
        (status = 200, description = "Age in whole years", body = CalcAgeDto),
        (status = 400, description = "Missing, malformed, or future birth date", body = ErrorDto)
    ),
)]
pub async fn calc_age(
    State(state): State<AppState>,
    Query(params): Query<CalcAgeParams>,
) -> Result<impl IntoResponse, Error> {
    let calc_age_service = CalcAgeService::new(state.clock.today());

    let age = calc_age_service.calculate_age_from_str(params.birth_day.as_deref())?;

    Ok((StatusCode::OK, Json(CalcAgeDto { age })))
}
