//! Process-local key-value store.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::repositories::{KeyValueStore, StoreError, StoreResult};

/// In-memory implementation of [`KeyValueStore`] using `DashMap`.
///
/// Each operation holds the shard lock of its key only, which gives the same
/// single-key atomicity Redis provides. Contents are lost with the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn incr(&self, key: &str) -> StoreResult<i64> {
        let mut entry = self
            .entries
            .entry(key.to_owned())
            .or_insert_with(|| "0".to_string());

        let next = entry
            .parse::<i64>()
            .ok()
            .and_then(|current| current.checked_add(1))
            .ok_or_else(|| StoreError::UnexpectedValue {
                key: key.to_owned(),
                reason: "value is not an integer or out of range".to_string(),
            })?;

        *entry = next.to_string();
        Ok(next)
    }

    async fn list_keys(&self, prefix: &str) -> StoreResult<Vec<String>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.key().starts_with(prefix))
            .map(|entry| entry.key().clone())
            .collect())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = InMemoryStore::new();
        store.set("k", "v").await.unwrap();
        store.set("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_incr_starts_from_zero() {
        let store = InMemoryStore::new();
        assert_eq!(store.incr("domain:example.com").await.unwrap(), 1);
        assert_eq!(store.incr("domain:example.com").await.unwrap(), 2);
        assert_eq!(
            store.get("domain:example.com").await.unwrap().as_deref(),
            Some("2")
        );
    }

    #[tokio::test]
    async fn test_incr_non_integer_value() {
        let store = InMemoryStore::new();
        store.set("k", "abc").await.unwrap();

        let result = store.incr("k").await;
        assert!(matches!(result, Err(StoreError::UnexpectedValue { .. })));
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_list_keys_by_prefix() {
        let store = InMemoryStore::new();
        store.set("domain:a.com", "1").await.unwrap();
        store.set("domain:b.com", "2").await.unwrap();
        store.set("https://a.com/x", "0a1b2c3d").await.unwrap();

        let mut keys = store.list_keys("domain:").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["domain:a.com", "domain:b.com"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_incr_is_atomic() {
        let store = Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..100)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.incr("counter").await.unwrap() })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.get("counter").await.unwrap().as_deref(), Some("100"));
    }
}
