//! API route configuration.

use crate::api::handlers::{
    domain_counts_handler, health_handler, redirect_handler, shorten_handler,
    top_domains_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST /shorten`      - Shorten a long URL
/// - `GET  /domains`      - Shortened URL count per domain
/// - `GET  /domains/top`  - Most shortened domains
/// - `GET  /health`       - Store connectivity check
/// - `GET  /{token}`      - Redirect to the long URL
///
/// Static segments win over `/{token}`, and generated tokens never collide
/// with them because tokens are eight hex characters.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/domains", get(domain_counts_handler))
        .route("/domains/top", get(top_domains_handler))
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
}
