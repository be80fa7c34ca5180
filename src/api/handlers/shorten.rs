//! Handler for link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short token for a long URL, creating it on first use.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/foo" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "1a2b3c4d" }
/// ```
///
/// Repeating the request for the same URL returns the same token.
///
/// # Errors
///
/// - 400 `validation_error` if `url` is empty or too long
/// - 400 `invalid_url` if `url` is not an absolute URL with a host
/// - 503 `store_unavailable` if the key-value store fails
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let short_url = state.link_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse { short_url }))
}
