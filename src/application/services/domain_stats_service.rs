//! Per-domain shortening statistics.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::DomainCount;
use crate::domain::keys::{DOMAIN_KEY_PREFIX, host_from_counter_key};
use crate::domain::repositories::{KeyValueStore, StoreError};
use crate::error::AppError;

/// Service reading the per-domain counters maintained by
/// [`crate::application::services::LinkService`].
pub struct DomainStatsService<S: KeyValueStore + ?Sized> {
    store: Arc<S>,
}

impl<S: KeyValueStore + ?Sized> DomainStatsService<S> {
    /// Creates a new domain statistics service.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the number of shortened URLs per normalized host.
    ///
    /// Counters are read one by one after listing, so the snapshot is not
    /// atomic with respect to concurrent shortening.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if listing or any read fails,
    /// or if a counter key holds something other than a non-negative integer
    /// or vanished between listing and reading.
    pub async fn domain_counts(&self) -> Result<HashMap<String, u64>, AppError> {
        let keys = self.store.list_keys(DOMAIN_KEY_PREFIX).await?;
        debug!(count = keys.len(), "Listed domain counters");

        let mut counts = HashMap::with_capacity(keys.len());
        for key in keys {
            let Some(host) = host_from_counter_key(&key) else {
                continue;
            };

            let raw = self
                .store
                .get(&key)
                .await?
                .ok_or_else(|| StoreError::UnexpectedValue {
                    key: key.clone(),
                    reason: "counter disappeared while reading".to_string(),
                })?;

            let count = raw.parse::<u64>().map_err(|_| StoreError::UnexpectedValue {
                key: key.clone(),
                reason: format!("not a counter: {:?}", raw),
            })?;

            counts.insert(host.to_string(), count);
        }

        Ok(counts)
    }

    /// Returns the `limit` hosts with the most shortened URLs.
    ///
    /// Sorted by count descending, ties by host name ascending.
    ///
    /// # Errors
    ///
    /// See [`Self::domain_counts`].
    pub async fn top_domains(&self, limit: usize) -> Result<Vec<DomainCount>, AppError> {
        let mut ranked: Vec<DomainCount> = self
            .domain_counts()
            .await?
            .into_iter()
            .map(|(domain, count)| DomainCount::new(domain, count))
            .collect();

        ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)));
        ranked.truncate(limit);

        Ok(ranked)
    }
}
