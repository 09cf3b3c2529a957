//! Conversion service that selects and drives rate provider adapters

use reqwest::Client;
use std::sync::Arc;
use std::time::Instant;
use tracing::instrument;

use crate::{
    config::AppConfig,
    domain::{ConversionRequest, ConversionResult, ProviderKind},
    infrastructure::adapters::{
        build_http_client, ExchangeRateAdapter, FixerIoAdapter, MonitoringAdapter,
        OpenExchangeRatesAdapter,
    },
    shared::error::AppResult,
};

/// Conversion service that orchestrates a single provider round trip
pub struct ConversionService {
    config: Arc<AppConfig>,
    client: Client,
    monitoring: Arc<MonitoringAdapter>,
}

impl ConversionService {
    pub fn new(config: Arc<AppConfig>, monitoring: Arc<MonitoringAdapter>) -> AppResult<Self> {
        let client = build_http_client(&config.providers)?;

        Ok(Self {
            config,
            client,
            monitoring,
        })
    }

    /// Build a fresh adapter for one request, holding only that request's key
    pub fn adapter_for(&self, source: ProviderKind, api_key: &str) -> Box<dyn ExchangeRateAdapter> {
        let providers = &self.config.providers;
        match source {
            ProviderKind::OpenExchangeRates => Box::new(OpenExchangeRatesAdapter::new(
                api_key,
                providers.open_exchange_rates.base_url.as_str(),
                self.client.clone(),
            )),
            ProviderKind::FixerIo => Box::new(FixerIoAdapter::new(
                api_key,
                providers.fixer_io.base_url.as_str(),
                self.client.clone(),
            )),
        }
    }

    /// Convert the requested amount with exactly one provider call
    #[instrument(skip(self, request), fields(source = %request.source))]
    pub async fn convert(&self, request: &ConversionRequest) -> AppResult<ConversionResult> {
        let adapter = self.adapter_for(request.source, &request.api_key);

        let started = Instant::now();
        let outcome = adapter
            .convert_currency(request.amount, &request.from, &request.to)
            .await;
        self.monitoring
            .observe_provider_duration(request.source.as_str(), started.elapsed().as_secs_f64());

        let converted = outcome?;
        Ok(ConversionResult::new(request, converted))
    }
}
