//! Rate provider adapter contract
//!
//! Every exchange-rate provider is reached through an [`ExchangeRateAdapter`].
//! Adapters fetch one rate table per call and derive the cross rate from it;
//! nothing is cached between calls.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::{form_urlencoded::byte_serialize, Url};

use crate::config::app_config::ProvidersConfig;
use crate::domain::{ProviderKind, RateTable};
use crate::shared::error::{AppError, AppResult};

/// Uniform access to a remote exchange-rate provider
#[async_trait]
pub trait ExchangeRateAdapter: Send + Sync {
    /// Provider this adapter talks to
    fn source(&self) -> ProviderKind;

    /// Rate to multiply an amount in `from` by to get an amount in `to`
    async fn get_exchange_rate(&self, from: &str, to: &str) -> AppResult<f64>;

    /// Convert `amount` from one currency to another.
    ///
    /// Fails exactly when [`get_exchange_rate`](Self::get_exchange_rate) fails.
    async fn convert_currency(&self, amount: f64, from: &str, to: &str) -> AppResult<f64> {
        let rate = self.get_exchange_rate(from, to).await?;
        Ok(amount * rate)
    }
}

/// Build the outbound HTTP client shared by all adapters
pub fn build_http_client(config: &ProvidersConfig) -> AppResult<Client> {
    let mut builder = Client::builder().user_agent(concat!("exchanger/", env!("CARGO_PKG_VERSION")));

    if let Some(seconds) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(seconds));
    }

    builder
        .build()
        .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))
}

/// Build the rate table URL: `<endpoint>?<key_param>=<key>&symbols=<from>,<to>`.
///
/// The key and both codes are percent-encoded; the comma between the codes
/// stays literal.
pub(crate) fn rate_table_url(endpoint: &str, key_param: &str, key: &str, from: &str, to: &str) -> AppResult<Url> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| AppError::Config(format!("Invalid provider URL '{}': {}", endpoint, e)))?;

    let symbols = [from, to]
        .iter()
        .map(|code| byte_serialize(code.as_bytes()).collect::<String>())
        .collect::<Vec<_>>()
        .join(",");

    url.query_pairs_mut().append_pair(key_param, key);
    let query = format!("{}&symbols={}", url.query().unwrap_or_default(), symbols);
    url.set_query(Some(&query));

    Ok(url)
}

/// Issue the GET and return the raw body.
///
/// The status code is only logged: provider error bodies are handled by
/// [`parse_rate_table`].
pub(crate) async fn fetch_body(client: &Client, source: ProviderKind, url: Url) -> AppResult<String> {
    debug!(source = %source, path = %url.path(), "Fetching rate table");

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!(source = %source, status = status.as_u16(), "Provider returned non-success status");
    }

    Ok(response.text().await?)
}

/// Decode a rate table, falling back to the provider's error envelope for a
/// descriptive message when the body is not a rate table.
pub(crate) fn parse_rate_table<E>(source: ProviderKind, body: &str) -> AppResult<RateTable>
where
    E: DeserializeOwned + ProviderErrorBody,
{
    serde_json::from_str::<RateTable>(body).map_err(|parse_error| {
        let message = serde_json::from_str::<E>(body)
            .ok()
            .and_then(|envelope| envelope.describe())
            .unwrap_or_else(|| format!("invalid response: {}", parse_error));

        AppError::Provider(format!("{}: {}", source, message))
    })
}

/// Provider-specific error envelope
pub(crate) trait ProviderErrorBody {
    /// Human-readable failure description, if the envelope carries one
    fn describe(&self) -> Option<String>;
}
