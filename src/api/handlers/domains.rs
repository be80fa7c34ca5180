//! Handlers for per-domain shortening statistics.

use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use validator::Validate;

use crate::api::dto::domains::TopDomainsQuery;
use crate::domain::entities::DomainCount;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the number of shortened URLs for every domain.
///
/// # Endpoint
///
/// `GET /domains`
///
/// # Response
///
/// ```json
/// { "example.com": 2, "rust-lang.org": 1 }
/// ```
///
/// # Errors
///
/// Returns 503 Service Unavailable if the store fails.
pub async fn domain_counts_handler(
    State(state): State<AppState>,
) -> Result<Json<HashMap<String, u64>>, AppError> {
    let counts = state.domain_stats_service.domain_counts().await?;
    Ok(Json(counts))
}

/// Returns the most shortened domains, highest count first.
///
/// # Endpoint
///
/// `GET /domains/top?limit=3`
///
/// `limit` defaults to 3 and must be between 1 and 100.
///
/// # Response
///
/// ```json
/// [
///   { "domain": "example.com", "count": 2 },
///   { "domain": "rust-lang.org", "count": 1 }
/// ]
/// ```
pub async fn top_domains_handler(
    State(state): State<AppState>,
    Query(query): Query<TopDomainsQuery>,
) -> Result<Json<Vec<DomainCount>>, AppError> {
    query.validate()?;

    let top = state
        .domain_stats_service
        .top_domains(query.limit())
        .await?;

    Ok(Json(top))
}
