//! URL mapping service: shortening and resolution.

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::keys::{DOMAIN_KEY_PREFIX, domain_counter_key};
use crate::domain::repositories::KeyValueStore;
use crate::error::AppError;
use crate::utils::code_generator::{generate_token, is_token_shaped};
use crate::utils::url_normalizer::normalized_host;

/// Service mapping long URLs to short tokens and back.
///
/// Holds no state of its own: forward mappings (long URL → token), reverse
/// mappings (token → long URL) and domain counters all live in the store.
///
/// # Concurrency
///
/// The shortening sequence (read forward, write forward, write reverse,
/// increment counter) is not transactional. Two concurrent first-time calls
/// for the same long URL can both miss the forward mapping; their mapping
/// writes are identical, but the domain counter is then incremented twice.
pub struct LinkService<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
}

impl<S: KeyValueStore + ?Sized> LinkService<S> {
    /// Creates a new link service over the given store handle.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the short token for `long_url`, creating the mapping on first use.
    ///
    /// # Idempotence
    ///
    /// If the long URL was shortened before, the stored token is returned and
    /// nothing is written.
    ///
    /// # Partial Failure
    ///
    /// The forward mapping, reverse mapping and domain counter are written in
    /// that order and earlier writes are never rolled back. A failed counter
    /// increment leaves a resolvable but uncounted token; a retry finds the
    /// forward mapping and does not count it either.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL does not parse, has no
    /// host, or starts with the counter key prefix (its forward mapping would
    /// land among the domain counters). Nothing is written in that case.
    ///
    /// Returns [`AppError::StoreUnavailable`] if any store operation fails.
    pub async fn shorten(&self, long_url: &str) -> Result<String, AppError> {
        let host = normalized_host(long_url).map_err(|e| {
            AppError::invalid_url(
                "Invalid URL format",
                json!({ "url": long_url, "reason": e.to_string() }),
            )
        })?;

        if long_url.starts_with(DOMAIN_KEY_PREFIX) {
            return Err(AppError::invalid_url(
                "URL collides with reserved key prefix",
                json!({ "url": long_url, "prefix": DOMAIN_KEY_PREFIX }),
            ));
        }

        if let Some(existing) = self.store.get(long_url).await? {
            debug!(token = %existing, "Long URL already shortened");
            metrics::counter!("urls_reused_total").increment(1);
            return Ok(existing);
        }

        let token = generate_token(long_url);

        self.store.set(long_url, &token).await?;
        self.store.set(&token, long_url).await?;

        let counter_key = domain_counter_key(&host);
        let count = match self.store.incr(&counter_key).await {
            Ok(count) => count,
            Err(e) => {
                warn!(
                    token = %token,
                    domain = %host,
                    error = %e,
                    "Mappings stored but domain counter not incremented"
                );
                return Err(e.into());
            }
        };

        info!(token = %token, domain = %host, count, "Shortened URL");
        metrics::counter!("urls_shortened_total").increment(1);

        Ok(token)
    }

    /// Looks up the long URL behind a short token.
    ///
    /// Values that cannot be generated tokens are rejected without a store
    /// round trip, so long URLs and counter keys are never resolvable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the token.
    /// Returns [`AppError::StoreUnavailable`] on store errors.
    pub async fn resolve(&self, token: &str) -> Result<String, AppError> {
        let not_found =
            || AppError::not_found("Short link not found", json!({ "token": token }));

        if !is_token_shaped(token) {
            return Err(not_found());
        }

        let long_url = self.store.get(token).await?.ok_or_else(not_found)?;
        metrics::counter!("short_links_resolved_total").increment(1);

        Ok(long_url)
    }

    /// Checks that the backing store answers.
    pub async fn store_healthy(&self) -> bool {
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                false
            }
        }
    }
}
