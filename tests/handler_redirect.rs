mod common;

use axum::http::{StatusCode, header};
use kv_shortener::domain::repositories::KeyValueStore;

#[tokio::test]
async fn test_redirect_success() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let token = common::shorten(&server, "https://example.com/foo?q=1").await;

    let response = server.get(&format!("/{token}")).await;

    response.assert_status(StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/foo?q=1"
    );
}

#[tokio::test]
async fn test_redirect_unknown_token() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/0a1b2c3d").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_redirect_malformed_token() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/unknown-token").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_does_not_expose_counters() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    common::shorten(&server, "https://example.com/foo").await;

    let response = server.get("/domain:example.com").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_store_unavailable() {
    let server = common::test_server(common::create_unreachable_state());

    let response = server.get("/0a1b2c3d").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_redirect_unsendable_stored_url() {
    let (state, store) = common::create_test_state();
    store.set("0a1b2c3d", "https://example.com/a\nb").await.unwrap();
    let server = common::test_server(state);

    let response = server.get("/0a1b2c3d").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "store_unavailable"
    );
}
