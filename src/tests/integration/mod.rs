//! Integration tests for the Exchanger server
//!
//! Each test builds the full route tree from a test configuration whose
//! providers point at a wiremock server, then drives it with `warp::test`.

use crate::{
    infrastructure::http::server::HttpServer,
    tests::{
        common::{assert_field_error, get_json, FakeProviders},
        config,
    },
};
use serde_json::json;
use warp::http::StatusCode;

const KEY: &str = "integration-key";

async fn setup() -> (FakeProviders, HttpServer) {
    config::init();
    let providers = FakeProviders::start().await;
    let server = HttpServer::new(config::test_config(&providers.uri())).unwrap();
    (providers, server)
}

#[tokio::test]
async fn test_openexchangerates_conversion() {
    let (providers, server) = setup().await;
    providers
        .open_exchange_rates(KEY, json!({"rates": {"USD": 1.0, "EUR": 0.9}}))
        .await;
    let routes = server.create_routes();

    let uri = format!("/exchange?source=openexchangerates&key={}&amount=100&from=USD&to=EUR", KEY);
    let (status, body) = get_json(&routes, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "openexchangerates");
    assert_eq!(body["from"], "USD");
    assert_eq!(body["to"], "EUR");
    assert_eq!(body["amount"], 100.0);
    assert!((body["converted"].as_f64().unwrap() - 90.0).abs() < 1e-9);
    assert_eq!(providers.request_count().await, 1);
}

#[tokio::test]
async fn test_fixerio_conversion() {
    let (providers, server) = setup().await;
    providers
        .fixer(KEY, json!({"success": true, "base": "EUR", "rates": {"USD": 1.25, "GBP": 0.85}}))
        .await;
    let routes = server.create_routes();

    let uri = format!("/exchange?source=fixerio&key={}&amount=50&from=USD&to=GBP", KEY);
    let (status, body) = get_json(&routes, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["source"], "fixerio");
    assert!((body["converted"].as_f64().unwrap() - 34.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_missing_key_is_unauthorized() {
    let (providers, server) = setup().await;
    let routes = server.create_routes();

    for uri in [
        "/exchange?source=fixerio&amount=1&from=USD&to=EUR",
        "/exchange?source=fixerio&key=&amount=1&from=USD&to=EUR",
        "/exchange?source=bogus&amount=abc",
        "/exchange",
    ] {
        let (status, body) = get_json(&routes, uri).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "uri {}", uri);
        assert_field_error(&body, "key");
        assert_eq!(body["error"], "API key is required!");
    }

    assert_eq!(providers.request_count().await, 0);
}

#[tokio::test]
async fn test_unknown_source_is_bad_request() {
    let (providers, server) = setup().await;
    let routes = server.create_routes();

    for source in ["ecb", "FIXERIO", ""] {
        let uri = format!("/exchange?source={}&key={}&amount=abc&from=USD&to=EUR", source, KEY);
        let (status, body) = get_json(&routes, &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "source {:?}", source);
        assert_field_error(&body, "source");
    }

    assert_eq!(providers.request_count().await, 0);
}

#[tokio::test]
async fn test_non_numeric_amount_is_bad_request() {
    let (providers, server) = setup().await;
    let routes = server.create_routes();

    for amount in ["abc", "", "12abc"] {
        let uri = format!("/exchange?source=fixerio&key={}&amount={}&from=USD&to=EUR", KEY, amount);
        let (status, body) = get_json(&routes, &uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "amount {:?}", amount);
        assert_field_error(&body, "amount");
        assert_eq!(body["error"], "Invalid amount");
    }

    assert_eq!(providers.request_count().await, 0);
}

#[tokio::test]
async fn test_provider_failure_is_bad_request_without_name() {
    let (providers, server) = setup().await;
    providers
        .fail_with(
            200,
            r#"{"success": false, "error": {"code": 101, "type": "invalid_access_key", "info": "You have not supplied a valid API Access Key."}}"#,
        )
        .await;
    let routes = server.create_routes();

    let uri = format!("/exchange?source=fixerio&key={}&amount=1&from=USD&to=EUR", KEY);
    let (status, body) = get_json(&routes, &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "fixerio: invalid_access_key: You have not supplied a valid API Access Key."})
    );
}

#[tokio::test]
async fn test_non_json_provider_body_is_provider_error() {
    let (providers, server) = setup().await;
    providers.fail_with(503, "Service Unavailable").await;
    let routes = server.create_routes();

    let uri = format!("/exchange?source=openexchangerates&key={}&amount=1&from=USD&to=EUR", KEY);
    let (status, body) = get_json(&routes, &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("openexchangerates: invalid response"));
    assert!(body.get("name").is_none());
}

#[tokio::test]
async fn test_missing_target_currency_converts_to_zero() {
    let (providers, server) = setup().await;
    providers.open_exchange_rates(KEY, json!({"rates": {"USD": 1.0}})).await;
    let routes = server.create_routes();

    let uri = format!("/exchange?source=openexchangerates&key={}&amount=100&from=USD&to=EUR", KEY);
    let (status, body) = get_json(&routes, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["converted"], 0.0);
}

#[tokio::test]
async fn test_missing_source_currency_converts_to_null() {
    let (providers, server) = setup().await;
    providers.open_exchange_rates(KEY, json!({"rates": {"EUR": 0.9}})).await;
    let routes = server.create_routes();

    let uri = format!("/exchange?source=openexchangerates&key={}&amount=100&from=USD&to=EUR", KEY);
    let (status, body) = get_json(&routes, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["converted"].is_null());
}

#[tokio::test]
async fn test_identical_requests_are_idempotent() {
    let (providers, server) = setup().await;
    providers
        .fixer(KEY, json!({"base": "EUR", "rates": {"USD": 1.1, "JPY": 160.0}}))
        .await;
    let routes = server.create_routes();

    let uri = format!("/exchange?source=fixerio&key={}&amount=42.5&from=USD&to=JPY", KEY);
    let (_, first) = get_json(&routes, &uri).await;
    let (_, second) = get_json(&routes, &uri).await;

    assert_eq!(first, second);
    // No caching: every request goes to the provider
    assert_eq!(providers.request_count().await, 2);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (_providers, server) = setup().await;
    let routes = server.create_routes();

    let (status, body) = get_json(&routes, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["details"]["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_metrics_endpoint_counts_outcomes() {
    let (providers, server) = setup().await;
    providers.open_exchange_rates(KEY, json!({"rates": {"USD": 1.0, "EUR": 0.9}})).await;
    let routes = server.create_routes();

    let ok = format!("/exchange?source=openexchangerates&key={}&amount=1&from=USD&to=EUR", KEY);
    get_json(&routes, &ok).await;
    get_json(&routes, "/exchange?source=nope&key=k").await;

    let response = warp::test::request().method("GET").path("/metrics").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = String::from_utf8(response.body().to_vec()).unwrap();
    assert!(text.contains(r#"exchange_requests_total{outcome="success",source="openexchangerates"} 1"#));
    assert!(text.contains(r#"exchange_requests_total{outcome="unsupported_provider",source="unknown"} 1"#));
    assert!(text.contains(r#"provider_request_duration_seconds_count{source="openexchangerates"} 1"#));
}

#[tokio::test]
async fn test_unknown_path_and_method() {
    let (_providers, server) = setup().await;
    let routes = server.create_routes();

    let response = warp::test::request().method("GET").path("/convert").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = warp::test::request().method("POST").path("/exchange").reply(&routes).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
