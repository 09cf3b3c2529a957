use crate::{
    application::services::ConversionService,
    domain::{ConversionParams, ConversionResult, ProviderKind},
    infrastructure::adapters::{monitoring::UNKNOWN_SOURCE, MonitoringAdapter},
    shared::{error::AppResult, logging::LoggingUtils},
};
use std::sync::Arc;
use std::time::Instant;

/// Currency conversion use case
pub struct ConvertCurrencyUseCase {
    conversion_service: Arc<ConversionService>,
    monitoring: Arc<MonitoringAdapter>,
}

impl ConvertCurrencyUseCase {
    pub fn new(conversion_service: Arc<ConversionService>, monitoring: Arc<MonitoringAdapter>) -> Self {
        Self {
            conversion_service,
            monitoring,
        }
    }

    /// Validate the raw parameters and run the conversion.
    ///
    /// Every outcome, including rejected requests, is logged and counted.
    pub async fn execute(&self, request_id: &str, params: ConversionParams) -> AppResult<ConversionResult> {
        let started = Instant::now();
        let source_label = params
            .source
            .as_deref()
            .and_then(|source| source.parse::<ProviderKind>().ok())
            .map(|kind| kind.as_str())
            .unwrap_or(UNKNOWN_SOURCE);

        LoggingUtils::log_request(
            request_id,
            params.source.as_deref().unwrap_or_default(),
            params.from.as_deref().unwrap_or_default(),
            params.to.as_deref().unwrap_or_default(),
        );

        let result = match params.validate() {
            Ok(request) => self.conversion_service.convert(&request).await,
            Err(e) => Err(e),
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(conversion) => {
                self.monitoring.record_request(source_label, "success");
                LoggingUtils::log_success(request_id, source_label, conversion.converted_amount, duration_ms);
            }
            Err(e) => {
                self.monitoring.record_request(source_label, e.outcome());
                LoggingUtils::log_error(request_id, e, duration_ms);
            }
        }

        result
    }
}
