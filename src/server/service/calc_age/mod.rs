//! Age calculation service.
//!
//! Turns a birth date supplied as an ISO-8601 `YYYY-MM-DD` string into the number of whole
//! years elapsed until "today". Years are counted by calendar comparison: the count only goes
//! up once the anniversary month and day have been reached, so someone born on 2000-06-15 is
//! 23 on 2024-06-14 and 24 on 2024-06-15.

#[cfg(test)]
mod tests;

use chrono::NaiveDate;

use crate::server::error::age::AgeError;

/// Format accepted for birth dates.
pub static BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Service computing ages relative to a reference date.
pub struct CalcAgeService {
    today: NaiveDate,
}

impl CalcAgeService {
    /// Creates a new instance of CalcAgeService.
    ///
    /// # Arguments
    /// - `today` - Date ages are computed against
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Parses and validates a birth date string, then computes the age.
    ///
    /// # Arguments
    /// - `input` - Birth date as `YYYY-MM-DD`, `None` when the caller supplied none
    ///
    /// # Returns
    /// - `Ok(u32)` - Whole years elapsed since the birth date
    /// - `Err(AgeError::InvalidValue)` - Birth date missing, empty, or in the future
    /// - `Err(AgeError::InvalidFormat)` - Birth date is not an existing calendar date
    pub fn calculate_age_from_str(&self, input: Option<&str>) -> Result<u32, AgeError> {
        let input = match input {
            Some(input) if !input.is_empty() => input,
            _ => return Err(AgeError::missing()),
        };

        let birth_date = parse_birth_date(input)?;

        self.calculate_age(birth_date)
    }

    /// Computes the whole years elapsed between `birth_date` and today.
    ///
    /// # Returns
    /// - `Ok(u32)` - Whole years, 0 when born today
    /// - `Err(AgeError::InvalidValue)` - Birth date is after today
    pub fn calculate_age(&self, birth_date: NaiveDate) -> Result<u32, AgeError> {
        if birth_date > self.today {
            return Err(AgeError::future());
        }

        // Only None when birth_date is after today, which is rejected above
        self.today
            .years_since(birth_date)
            .ok_or_else(AgeError::future)
    }
}

/// Parses an ISO-8601 calendar date (`YYYY-MM-DD`).
///
/// Exactly four year digits and two month and day digits are required; chrono alone would
/// also take `2020-1-5` or `+2020-01-05`. Non-existent dates such as `2023-02-30` are rejected
/// the same way as malformed strings.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate, AgeError> {
    let invalid_format = || AgeError::InvalidFormat {
        input: input.to_string(),
    };

    let well_formed = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid_format());
    }

    NaiveDate::parse_from_str(input, BIRTH_DATE_FORMAT).map_err(|_| invalid_format())
}
