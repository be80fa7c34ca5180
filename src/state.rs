//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{DomainStatsService, LinkService};
use crate::domain::repositories::KeyValueStore;

/// Services shared by every request, all backed by one store handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn KeyValueStore>>,
    pub domain_stats_service: Arc<DomainStatsService<dyn KeyValueStore>>,
}

impl AppState {
    /// Builds the services over an explicitly constructed store handle.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store.clone())),
            domain_stats_service: Arc::new(DomainStatsService::new(store)),
        }
    }
}
