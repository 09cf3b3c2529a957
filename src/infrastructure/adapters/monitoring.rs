//! Monitoring adapter for metrics and observability
//!
//! This adapter owns the Prometheus registry exposed on `/metrics`.

use prometheus::{CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder};

use crate::shared::error::{AppError, AppResult};

/// Label used when the request named no known provider
pub const UNKNOWN_SOURCE: &str = "unknown";

/// Adapter for monitoring and metrics services
pub struct MonitoringAdapter {
    registry: Registry,
    requests_total: CounterVec,
    provider_duration: HistogramVec,
}

impl MonitoringAdapter {
    /// Create a new monitoring adapter with its own registry
    pub fn new() -> AppResult<Self> {
        let registry = Registry::new();

        let requests_total = CounterVec::new(
            Opts::new("exchange_requests_total", "Total number of exchange requests"),
            &["source", "outcome"],
        )
        .map_err(metrics_error)?;

        let provider_duration = HistogramVec::new(
            HistogramOpts::new(
                "provider_request_duration_seconds",
                "Time spent waiting on exchange-rate providers",
            ),
            &["source"],
        )
        .map_err(metrics_error)?;

        registry
            .register(Box::new(requests_total.clone()))
            .map_err(metrics_error)?;
        registry
            .register(Box::new(provider_duration.clone()))
            .map_err(metrics_error)?;

        Ok(Self {
            registry,
            requests_total,
            provider_duration,
        })
    }

    /// Count a finished exchange request
    pub fn record_request(&self, source: &str, outcome: &str) {
        self.requests_total.with_label_values(&[source, outcome]).inc();
    }

    /// Record how long one outbound provider call took
    pub fn observe_provider_duration(&self, source: &str, seconds: f64) {
        self.provider_duration.with_label_values(&[source]).observe(seconds);
    }

    /// Number of requests recorded for a label pair
    #[cfg(test)]
    pub fn request_count(&self, source: &str, outcome: &str) -> u64 {
        self.requests_total.with_label_values(&[source, outcome]).get() as u64
    }

    /// Get Prometheus metrics in text format
    pub fn get_prometheus_metrics(&self) -> AppResult<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .map_err(metrics_error)?;

        String::from_utf8(buffer).map_err(|e| AppError::Internal(format!("Metrics are not UTF-8: {}", e)))
    }
}

fn metrics_error(err: prometheus::Error) -> AppError {
    AppError::Internal(format!("Metrics error: {}", err))
}
