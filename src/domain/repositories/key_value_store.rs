//! Key-value store abstraction the mapping service is built on.

use async_trait::async_trait;

/// Errors raised by a key-value store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store connection error: {0}")]
    Connection(String),

    #[error("store operation error: {0}")]
    Operation(String),

    #[error("unexpected value at key {key}: {reason}")]
    UnexpectedValue { key: String, reason: String },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Minimal key-value store contract.
///
/// Each operation on a single key is expected to be atomic. Nothing is
/// atomic across keys: callers composing several operations must tolerate
/// interleaving with other writers.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed production store
/// - [`crate::infrastructure::store::InMemoryStore`] - process-local store for tests and local runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value at `key`, `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `value` at `key` unconditionally, without expiry.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Increments the integer at `key` by one and returns the new value.
    ///
    /// An absent key is treated as `0`, so the first call returns `1`.
    async fn incr(&self, key: &str) -> StoreResult<i64>;

    /// Lists every key starting with `prefix`. Order is unspecified.
    async fn list_keys(&self, prefix: &str) -> StoreResult<Vec<String>>;

    /// Checks that the backend answers.
    async fn ping(&self) -> StoreResult<()>;
}
