//! Redis-backed key-value store.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};

/// Redis implementation of [`KeyValueStore`].
///
/// The connection is established lazily on first use and then shared through
/// a cloneable `ConnectionManager`, which reconnects on its own after drops.
/// Constructing the store therefore never fails because Redis is down; only
/// operations do.
pub struct RedisStore {
    client: Client,
    manager: OnceCell<ConnectionManager>,
}

impl RedisStore {
    /// Creates a store for `redis_url` without connecting.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is not a valid Redis
    /// connection string.
    pub fn open(redis_url: &str) -> StoreResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        Ok(Self {
            client,
            manager: OnceCell::new(),
        })
    }

    async fn connection(&self) -> StoreResult<ConnectionManager> {
        let manager = self
            .manager
            .get_or_try_init(|| async {
                let manager = ConnectionManager::new(self.client.clone())
                    .await
                    .map_err(|e| {
                        StoreError::Connection(format!("Failed to connect to Redis: {}", e))
                    })?;
                info!("✓ Connected to Redis");
                Ok::<_, StoreError>(manager)
            })
            .await?;

        Ok(manager.clone())
    }
}

fn operation_error(op: &str, key: &str, e: redis::RedisError) -> StoreError {
    StoreError::Operation(format!("Redis {} failed for {}: {}", op, key, e))
}

/// Escapes glob metacharacters so `prefix` matches literally in `KEYS`.
fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for c in prefix.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value = conn
            .get::<_, Option<String>>(key)
            .await
            .map_err(|e| operation_error("GET", key, e))?;
        debug!(key, hit = value.is_some(), "Redis GET");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut conn = self.connection().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| operation_error("SET", key, e))?;
        debug!(key, "Redis SET");
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.connection().await?;
        let value = conn
            .incr::<_, _, i64>(key, 1_i64)
            .await
            .map_err(|e| operation_error("INCR", key, e))?;
        debug!(key, value, "Redis INCR");
        Ok(value)
    }

    async fn list_keys(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let mut conn = self.connection().await?;
        let pattern = format!("{}*", escape_glob(prefix));
        let keys = conn
            .keys::<_, Vec<String>>(&pattern)
            .await
            .map_err(|e| operation_error("KEYS", &pattern, e))?;
        debug!(pattern = %pattern, count = keys.len(), "Redis KEYS");
        Ok(keys)
    }

    async fn ping(&self) -> StoreResult<()> {
        let mut conn = self.connection().await?;
        conn.ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_glob() {
        assert_eq!(escape_glob("domain:"), "domain:");
        assert_eq!(escape_glob("a*b?c[d]e\\"), "a\\*b\\?c\\[d\\]e\\\\");
    }

    #[test]
    fn test_open_rejects_invalid_url() {
        assert!(matches!(
            RedisStore::open("not-a-redis-url"),
            Err(StoreError::Connection(_))
        ));
    }

    #[test]
    fn test_open_does_not_connect() {
        // Nothing listens on port 1; opening must still succeed.
        assert!(RedisStore::open("redis://127.0.0.1:1/0").is_ok());
    }
}
