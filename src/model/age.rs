use serde::{Deserialize, Serialize};

/// Age in whole years computed from a birth date
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CalcAgeDto {
    pub age: u32,
}
