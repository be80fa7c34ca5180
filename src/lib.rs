//! # kv-shortener
//!
//! A URL shortener that keeps its mappings in a key-value store and counts
//! shortened URLs per source domain.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Key-value store trait, key layout and entities
//! - **Application Layer** ([`application`]) - Shortening, resolution and domain statistics
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Data Model
//!
//! Three kinds of entries share one keyspace:
//!
//! - `<long URL>` → `<token>` (forward mapping)
//! - `<token>` → `<long URL>` (reverse mapping)
//! - `domain:<host>` → count of distinct long URLs shortened for `<host>`
//!
//! Tokens are a deterministic 32-bit hash of the long URL, so shortening the
//! same URL twice returns the same token and counts it once.
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_HOST=localhost   # defaults to localhost:6379 when unset
//! cargo run
//!
//! curl -X POST localhost:8080/shorten -H 'content-type: application/json' \
//!      -d '{"url":"https://example.com/foo"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{DomainStatsService, LinkService};
    pub use crate::domain::entities::DomainCount;
    pub use crate::domain::repositories::{KeyValueStore, StoreError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{InMemoryStore, RedisStore};
    pub use crate::state::AppState;
}
