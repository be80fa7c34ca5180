mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_domain_counts_empty() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server.get("/domains").await;

    response.assert_status_ok();
    response.assert_json(&json!({}));
}

#[tokio::test]
async fn test_domain_counts_scenario() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    common::shorten(&server, "https://example.com/foo").await;
    server
        .get("/domains")
        .await
        .assert_json(&json!({ "example.com": 1 }));

    common::shorten(&server, "https://example.com/bar").await;
    server
        .get("/domains")
        .await
        .assert_json(&json!({ "example.com": 2 }));

    // Repeat shortening does not count again
    common::shorten(&server, "https://example.com/bar").await;
    server
        .get("/domains")
        .await
        .assert_json(&json!({ "example.com": 2 }));
}

#[tokio::test]
async fn test_domain_counts_normalize_www() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    common::shorten(&server, "http://www.example.com/a").await;
    common::shorten(&server, "http://example.com/b").await;
    common::shorten(&server, "https://rust-lang.org/").await;

    server
        .get("/domains")
        .await
        .assert_json(&json!({ "example.com": 2, "rust-lang.org": 1 }));
}

#[tokio::test]
async fn test_top_domains() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    for i in 0..3 {
        common::shorten(&server, &format!("https://a.com/{i}")).await;
    }
    for i in 0..5 {
        common::shorten(&server, &format!("https://b.com/{i}")).await;
    }
    common::shorten(&server, "https://c.com/").await;
    common::shorten(&server, "https://d.com/").await;

    let response = server.get("/domains/top").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        { "domain": "b.com", "count": 5 },
        { "domain": "a.com", "count": 3 },
        { "domain": "c.com", "count": 1 },
    ]));

    let response = server
        .get("/domains/top")
        .add_query_param("limit", 1)
        .await;

    response.assert_json(&json!([{ "domain": "b.com", "count": 5 }]));
}

#[tokio::test]
async fn test_top_domains_invalid_limit() {
    let (state, _store) = common::create_test_state();
    let server = common::test_server(state);

    let response = server
        .get("/domains/top")
        .add_query_param("limit", 0)
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_domain_counts_store_unavailable() {
    let server = common::test_server(common::create_unreachable_state());

    let response = server.get("/domains").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
}
