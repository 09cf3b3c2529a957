//! Test suite for the Exchanger server
//!
//! - `common`: fake providers and request helpers
//! - `integration`: full route tree driven in-process against fake providers

pub mod common;
pub mod integration;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration pointing both providers at `provider_uri`
    pub fn test_config(provider_uri: &str) -> AppConfig {
        let mut config = AppConfig::default();

        config.server.bind_address = "127.0.0.1".parse().unwrap();
        config.providers.open_exchange_rates.base_url = format!("{}/oxr", provider_uri);
        config.providers.fixer_io.base_url = format!("{}/fixer", provider_uri);
        config.providers.timeout_seconds = Some(5);

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_points_at_fake_providers() {
        config::init();
        let test_config = config::test_config("http://127.0.0.1:9999");

        assert_eq!(test_config.providers.open_exchange_rates.base_url, "http://127.0.0.1:9999/oxr");
        assert_eq!(test_config.providers.fixer_io.base_url, "http://127.0.0.1:9999/fixer");
        assert!(test_config.validate_config().is_ok());
    }
}
