pub mod builder;
pub mod date;
pub mod error;
pub mod request;

pub use builder::{TestBuilder, TestContext};
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        date::{days_after, years_and_days_before},
        request::{get, TestResponse},
        TestBuilder, TestContext, TestError,
    };
}
