#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use kv_shortener::api::routes::api_routes;
use kv_shortener::domain::repositories::{KeyValueStore, StoreError, StoreResult};
use kv_shortener::infrastructure::store::InMemoryStore;
use kv_shortener::state::AppState;
use std::sync::Arc;

/// Store that fails every operation, standing in for an unreachable Redis.
pub struct UnreachableStore;

fn refused() -> StoreError {
    StoreError::Connection("Connection refused (os error 111)".to_string())
}

#[async_trait]
impl KeyValueStore for UnreachableStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(refused())
    }

    async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(refused())
    }

    async fn incr(&self, _key: &str) -> StoreResult<i64> {
        Err(refused())
    }

    async fn list_keys(&self, _prefix: &str) -> StoreResult<Vec<String>> {
        Err(refused())
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(refused())
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone());
    (state, store)
}

pub fn create_unreachable_state() -> AppState {
    AppState::new(Arc::new(UnreachableStore))
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(api_routes().with_state(state)).unwrap()
}

pub async fn shorten(server: &TestServer, url: &str) -> String {
    let response = server
        .post("/shorten")
        .json(&serde_json::json!({ "url": url }))
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["short_url"]
        .as_str()
        .unwrap()
        .to_string()
}
