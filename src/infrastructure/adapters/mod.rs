//! Infrastructure adapters module
//!
//! This module contains adapters for external services and infrastructure concerns.

pub mod fixer_io;
pub mod monitoring;
pub mod open_exchange_rates;
pub mod rate_provider;

pub use fixer_io::FixerIoAdapter;
pub use monitoring::MonitoringAdapter;
pub use open_exchange_rates::OpenExchangeRatesAdapter;
pub use rate_provider::{build_http_client, ExchangeRateAdapter};
