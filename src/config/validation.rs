//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::app_config::{LoggingConfig, ProvidersConfig};
use crate::config::AppConfig;
use crate::shared::error::AppError;

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_providers_config(&config.providers)?;
        Self::validate_logging_config(&config.logging)?;

        Ok(())
    }

    fn validate_providers_config(providers: &ProvidersConfig) -> crate::Result<()> {
        Self::validate_provider_url("open_exchange_rates", &providers.open_exchange_rates.base_url)?;
        Self::validate_provider_url("fixer_io", &providers.fixer_io.base_url)?;

        if providers.timeout_seconds.is_none() {
            tracing::debug!("No outbound timeout configured - a stalled provider stalls its request");
        }

        Ok(())
    }

    /// Provider base URLs must be plain http(s) endpoints
    fn validate_provider_url(provider: &str, url: &str) -> crate::Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AppError::Validation(format!(
                "Base URL for {} must start with http:// or https://",
                provider
            )));
        }

        if url.ends_with('/') {
            return Err(AppError::Validation(format!(
                "Base URL for {} must not end with '/'",
                provider
            )));
        }

        Ok(())
    }

    fn validate_logging_config(logging: &LoggingConfig) -> crate::Result<()> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&logging.level.to_lowercase().as_str()) {
            return Err(AppError::Validation(format!("Invalid log level: {}", logging.level)));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&logging.format.to_lowercase().as_str()) {
            return Err(AppError::Validation(format!("Invalid log format: {}", logging.format)));
        }

        Ok(())
    }
}
