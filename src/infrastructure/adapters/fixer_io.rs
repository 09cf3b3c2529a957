//! fixer.io adapter
//!
//! `GET {base}/latest?access_key=<key>&symbols=<from>,<to>` answers with
//! `{"base": "EUR", "rates": {...}}`. Failures come back with HTTP 200 and
//! `{"success": false, "error": {...}}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::rate_provider::{fetch_body, parse_rate_table, rate_table_url, ExchangeRateAdapter, ProviderErrorBody};
use crate::domain::{ProviderKind, RateTable};
use crate::shared::error::AppResult;

/// Adapter for the Fixer API
pub struct FixerIoAdapter {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct FixerErrorDetail {
    #[serde(rename = "type")]
    kind: Option<String>,
    info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FixerError {
    #[serde(default = "default_success")]
    success: bool,
    error: Option<FixerErrorDetail>,
}

fn default_success() -> bool {
    true
}

impl ProviderErrorBody for FixerError {
    fn describe(&self) -> Option<String> {
        if self.success {
            return None;
        }
        let detail = self.error.as_ref()?;
        match (&detail.kind, &detail.info) {
            (Some(kind), Some(info)) => Some(format!("{}: {}", kind, info)),
            (Some(kind), None) => Some(kind.clone()),
            (None, Some(info)) => Some(info.clone()),
            (None, None) => None,
        }
    }
}

impl FixerIoAdapter {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>, client: Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client,
        }
    }

    fn latest_url(&self) -> String {
        format!("{}/latest", self.base_url)
    }

    async fn fetch_rates(&self, from: &str, to: &str) -> AppResult<RateTable> {
        let url = rate_table_url(&self.latest_url(), "access_key", &self.api_key, from, to)?;
        let body = fetch_body(&self.client, self.source(), url).await?;

        let table = parse_rate_table::<FixerError>(self.source(), &body)?;
        debug!(base = ?table.base, "Fixer rate table received");
        Ok(table)
    }
}

#[async_trait]
impl ExchangeRateAdapter for FixerIoAdapter {
    fn source(&self) -> ProviderKind {
        ProviderKind::FixerIo
    }

    #[instrument(skip(self))]
    async fn get_exchange_rate(&self, from: &str, to: &str) -> AppResult<f64> {
        let table = self.fetch_rates(from, to).await?;
        Ok(table.cross_rate(from, to))
    }
}
