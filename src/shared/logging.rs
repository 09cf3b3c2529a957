//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::shared::error::{AppError, AppResult};
use tracing::{info, warn, Dispatch};
use tracing_subscriber::{fmt, fmt::MakeWriter, EnvFilter};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified level and format.
    ///
    /// `RUST_LOG` takes precedence over `level` when set.
    pub fn initialize(level: &str, format: &str) -> AppResult<()> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        tracing::dispatcher::set_global_default(Self::dispatch(filter, format, std::io::stdout))
            .map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Build the subscriber. A `format` of `"json"` emits one JSON object
    /// per event, anything else plain text.
    pub fn dispatch<W>(filter: EnvFilter, format: &str, writer: W) -> Dispatch
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_target(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        if format.eq_ignore_ascii_case("json") {
            Dispatch::new(builder.json().finish())
        } else {
            Dispatch::new(builder.finish())
        }
    }

    /// Log an inbound conversion request. The API key is never logged.
    pub fn log_request(request_id: &str, source: &str, from: &str, to: &str) {
        info!(
            request_id = %request_id,
            source = %source,
            from = %from,
            to = %to,
            "Processing exchange request"
        );
    }

    /// Log a successful response
    pub fn log_success(request_id: &str, source: &str, converted: f64, duration_ms: u64) {
        info!(
            request_id = %request_id,
            source = %source,
            converted = %converted,
            duration_ms = %duration_ms,
            "Exchange request completed"
        );
    }

    /// Log a rejected or failed request
    pub fn log_error(request_id: &str, error: &AppError, duration_ms: u64) {
        warn!(
            request_id = %request_id,
            outcome = error.outcome(),
            status = error.http_status_code().as_u16(),
            error = %error,
            duration_ms = %duration_ms,
            "Exchange request failed"
        );
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        format!("req_{}", uuid::Uuid::new_v4().simple())
    }
}
