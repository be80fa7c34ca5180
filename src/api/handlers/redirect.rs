//! Handler for short token redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use tracing::{debug, warn};

use crate::domain::repositories::StoreError;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short token to its long URL.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// # Response
///
/// 307 Temporary Redirect with the long URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if no mapping exists for the token.
/// Returns 503 Service Unavailable if the store fails or the stored long URL
/// cannot be sent as a header value.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.link_service.resolve(&token).await?;

    let location = HeaderValue::try_from(long_url.as_str()).map_err(|_| {
        warn!(token = %token, "Stored long URL is not a valid Location header");
        StoreError::UnexpectedValue {
            key: token.clone(),
            reason: "long URL is not a valid header value".to_string(),
        }
    })?;

    debug!(token = %token, "Redirecting");

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]))
}
