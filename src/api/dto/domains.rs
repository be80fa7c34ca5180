//! DTOs for domain statistics endpoints.

use serde::Deserialize;
use validator::Validate;

/// Default number of entries returned by `GET /domains/top`.
pub const DEFAULT_TOP_LIMIT: usize = 3;

/// Query parameters for the top domains endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct TopDomainsQuery {
    #[validate(range(min = 1, max = 100))]
    pub limit: Option<usize>,
}

impl TopDomainsQuery {
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_TOP_LIMIT)
    }
}
