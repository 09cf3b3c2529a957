//! Common test utilities and fake providers
//!
//! A single wiremock server stands in for both providers: Open Exchange
//! Rates under `/oxr` and Fixer under `/fixer`, matching `config::test_config`.

use serde_json::Value;
use warp::http::StatusCode;
use warp::{Filter, Reply};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fake exchange-rate providers
pub struct FakeProviders {
    pub server: MockServer,
}

impl FakeProviders {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Serve `body` for Open Exchange Rates requests made with `key`
    pub async fn open_exchange_rates(&self, key: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/oxr/latest.json"))
            .and(query_param("app_id", key))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve `body` for Fixer requests made with `key`
    pub async fn fixer(&self, key: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/fixer/latest"))
            .and(query_param("access_key", key))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Serve a raw response with an arbitrary status on every path
    pub async fn fail_with(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Number of requests the providers have received so far
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or_default()
    }
}

/// Send `GET {uri}` through `routes` and decode the body as JSON
pub async fn get_json<F>(routes: &F, uri: &str) -> (StatusCode, Value)
where
    F: Filter + 'static,
    F::Extract: Reply + Send,
{
    let response = warp::test::request().method("GET").path(uri).reply(routes).await;

    let status = response.status();
    let body = serde_json::from_slice(response.body()).unwrap_or(Value::Null);
    (status, body)
}

/// Assert a validation failure body naming `field`
pub fn assert_field_error(body: &Value, field: &str) {
    assert!(body["error"].is_string(), "missing error message in {}", body);
    assert_eq!(body["name"], field, "unexpected body {}", body);
}
