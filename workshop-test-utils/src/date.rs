//! Calendar helpers for building birth dates relative to a reference date.

use chrono::{Days, Months, NaiveDate};

use crate::error::TestError;

/// Returns `today` minus `years` whole years minus `days` days.
///
/// A Feb 29 reference date lands on Feb 28 when the target year is not a leap year.
pub fn years_and_days_before(
    today: NaiveDate,
    years: u32,
    days: u64,
) -> Result<NaiveDate, TestError> {
    today
        .checked_sub_months(Months::new(years * 12))
        .and_then(|date| date.checked_sub_days(Days::new(days)))
        .ok_or_else(|| {
            TestError::DateOutOfRange(format!("{} minus {} years and {} days", today, years, days))
        })
}

/// Returns `today` plus `days` days.
pub fn days_after(today: NaiveDate, days: u64) -> Result<NaiveDate, TestError> {
    today
        .checked_add_days(Days::new(days))
        .ok_or_else(|| TestError::DateOutOfRange(format!("{} plus {} days", today, days)))
}
