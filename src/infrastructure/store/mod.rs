//! Key-value store backends.
//!
//! Provides two [`crate::domain::repositories::KeyValueStore`] implementations:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`InMemoryStore`] - Process-local store for tests and local runs

mod memory_store;
mod redis_store;

pub use memory_store::InMemoryStore;
pub use redis_store::RedisStore;
