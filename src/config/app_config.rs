//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use validator::Validate;

use crate::shared::error::AppError;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,
}

/// Endpoint settings for a single rate provider
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProviderEndpointConfig {
    /// Base URL the provider's `latest` resource hangs off
    #[validate(url)]
    pub base_url: String,
}

/// Outbound provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProvidersConfig {
    #[validate(nested)]
    pub open_exchange_rates: ProviderEndpointConfig,

    #[validate(nested)]
    pub fixer_io: ProviderEndpointConfig,

    /// Outbound request timeout in seconds; unset means no timeout
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: Option<u64>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format (json, text)
    #[validate(length(min = 1))]
    pub format: String,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    #[validate(nested)]
    pub server: ServerConfig,

    /// Rate provider configuration
    #[validate(nested)]
    pub providers: ProvidersConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            open_exchange_rates: ProviderEndpointConfig {
                base_url: "https://openexchangerates.org/api".to_string(),
            },
            fixer_io: ProviderEndpointConfig {
                base_url: "http://data.fixer.io/api".to_string(),
            },
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        Self::load_from(None, std::env::var("PORT").ok())
    }

    /// Load configuration with an explicit environment.
    ///
    /// `environment` replaces the process environment for `EXCHANGER__*`
    /// lookups when given; `port` is the raw `PORT` value.
    pub fn load_from(environment: Option<config::Map<String, String>>, port: Option<String>) -> crate::Result<Self> {
        let mut config: AppConfig = config::Config::builder()
            .add_source(config::File::with_name("Exchanger").required(false))
            .add_source(
                config::Environment::with_prefix("EXCHANGER")
                    .separator("__")
                    .source(environment),
            )
            .build()?
            .try_deserialize()?;

        // PORT wins over everything else, as most hosting platforms expect
        if let Some(port) = port {
            config.server.port = port
                .parse()
                .map_err(|e| AppError::Config(format!("Invalid PORT value '{}': {}", port, e)))?;
        }

        config.validate_config()?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> crate::Result<()> {
        self.validate()
            .map_err(|e| AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        super::ConfigValidator::validate_config(self)
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
