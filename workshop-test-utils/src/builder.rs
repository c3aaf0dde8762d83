//! Declarative test builder.
//!
//! `TestBuilder` collects the settings a test needs and produces a `TestContext` that the
//! server's tests turn into application state.

use chrono::NaiveDate;

/// Builder for declarative test initialization.
pub struct TestBuilder {
    today: Option<NaiveDate>,
}

/// Settings resolved by [`TestBuilder::build`].
pub struct TestContext {
    /// Date the server under test treats as today, `None` to follow the system clock
    pub today: Option<NaiveDate>,
}

impl TestBuilder {
    /// Create a new TestBuilder that follows the system clock.
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Pin the date the server under test treats as today.
    ///
    /// # Arguments
    /// - `today` - Fixed reference date for age calculation
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Finish configuration.
    pub fn build(self) -> TestContext {
        TestContext { today: self.today }
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
