//! Tests for the calc_age endpoint.
//!
//! Verifies successful age calculation against a pinned date and the 400 responses for
//! missing, malformed, and future birth dates.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use workshop::server::{
    controller::calc_age::{calc_age, CalcAgeParams},
    error::{age::AgeError, Error},
};

use super::*;

fn params(birth_day: Option<&str>) -> Query<CalcAgeParams> {
    Query(CalcAgeParams {
        birth_day: birth_day.map(str::to_string),
    })
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// Tests successful response for a past birth date.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn success_for_past_birth_date() -> Result<(), TestError> {
    let test = TestBuilder::new().with_today(today()).build();

    let result = calc_age(State(test.into_app_state()), params(Some("1990-04-01"))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 400 response when birthDay is missing.
///
/// Expected: Err(AgeError::InvalidValue) with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_when_birth_day_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_today(today()).build();

    let result = calc_age(State(test.into_app_state()), params(None)).await;

    let err = match result {
        Err(err) => err,
        Ok(_) => panic!("Expected missing birth date to be rejected"),
    };
    assert!(matches!(err, Error::AgeError(AgeError::InvalidValue { .. })));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 400 response for a malformed birth date.
///
/// Expected: Err(AgeError::InvalidFormat) with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_when_birth_day_malformed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_today(today()).build();

    let result = calc_age(State(test.into_app_state()), params(Some("not-a-date"))).await;

    let err = match result {
        Err(err) => err,
        Ok(_) => panic!("Expected malformed birth date to be rejected"),
    };
    assert!(matches!(err, Error::AgeError(AgeError::InvalidFormat { .. })));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests 400 response for a birth date after today.
///
/// Expected: Err(AgeError::InvalidValue) with 400 BAD_REQUEST response
#[tokio::test]
async fn bad_request_when_birth_day_in_future() -> Result<(), TestError> {
    let test = TestBuilder::new().with_today(today()).build();
    let tomorrow = days_after(today(), 1)?;

    let result = calc_age(
        State(test.into_app_state()),
        params(Some(&tomorrow.to_string())),
    )
    .await;

    let err = match result {
        Err(err) => err,
        Ok(_) => panic!("Expected future birth date to be rejected"),
    };
    assert!(matches!(err, Error::AgeError(AgeError::InvalidValue { .. })));
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}
