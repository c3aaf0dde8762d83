//! Date source used for age calculation.
//!
//! Requests read "today" through a [`Clock`] so the running server follows the local system
//! date while tests can pin the date and get deterministic ages.

use chrono::{Local, NaiveDate};

/// Source of the current calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    /// The local date of the host at the time of the call.
    System,
    /// Always reports the contained date.
    Fixed(NaiveDate),
}

impl Clock {
    /// Returns the current date according to this clock.
    pub fn today(&self) -> NaiveDate {
        match self {
            Self::System => Local::now().date_naive(),
            Self::Fixed(date) => *date,
        }
    }
}
