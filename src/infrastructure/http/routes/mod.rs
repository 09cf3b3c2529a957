//! HTTP routes module
//!
//! This module contains all HTTP route configurations.

pub mod builder;
pub mod exchange;
pub mod health;
pub mod metrics;

pub use builder::RouteBuilder;
pub use exchange::ExchangeRoutes;
pub use health::HealthRoutes;
pub use metrics::MetricsRoutes;
