use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters accepted by `GET /api/advocates`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct AdvocateQuery {
    #[validate(length(max = 100))]
    pub search: Option<String>,
    #[validate(length(max = 100))]
    pub city: Option<String>,
    #[validate(length(max = 100))]
    pub degree: Option<String>,
}
