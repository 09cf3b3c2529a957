//! openexchangerates.org adapter
//!
//! `GET {base}/latest.json?app_id=<key>&symbols=<from>,<to>` answers with
//! `{"rates": {"EUR": 0.9, ...}}` relative to the account's base currency.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::instrument;

use super::rate_provider::{fetch_body, parse_rate_table, rate_table_url, ExchangeRateAdapter, ProviderErrorBody};
use crate::domain::{ProviderKind, RateTable};
use crate::shared::error::AppResult;

/// Adapter for the Open Exchange Rates API
pub struct OpenExchangeRatesAdapter {
    api_key: String,
    base_url: String,
    client: Client,
}

/// `{"error": true, "status": 401, "message": "invalid_app_id", "description": "..."}`
#[derive(Debug, Deserialize)]
struct OpenExchangeRatesError {
    #[serde(default)]
    error: bool,
    message: Option<String>,
    description: Option<String>,
}

impl ProviderErrorBody for OpenExchangeRatesError {
    fn describe(&self) -> Option<String> {
        if !self.error {
            return None;
        }
        match (&self.message, &self.description) {
            (Some(message), Some(description)) => Some(format!("{}: {}", message, description)),
            (Some(message), None) => Some(message.clone()),
            (None, Some(description)) => Some(description.clone()),
            (None, None) => None,
        }
    }
}

impl OpenExchangeRatesAdapter {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client,
        }
    }

    fn latest_url(&self) -> String {
        format!("{}/latest.json", self.base_url)
    }

    async fn fetch_rates(&self, from: &str, to: &str) -> AppResult<RateTable> {
        let url = rate_table_url(&self.latest_url(), "app_id", &self.api_key, from, to)?;
        let body = fetch_body(&self.client, self.source(), url).await?;

        parse_rate_table::<OpenExchangeRatesError>(self.source(), &body)
    }
}

#[async_trait]
impl ExchangeRateAdapter for OpenExchangeRatesAdapter {
    fn source(&self) -> ProviderKind {
        ProviderKind::OpenExchangeRates
    }

    #[instrument(skip(self))]
    async fn get_exchange_rate(&self, from: &str, to: &str) -> AppResult<f64> {
        let table = self.fetch_rates(from, to).await?;
        Ok(table.cross_rate(from, to))
    }
}
