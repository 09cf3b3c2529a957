//! HTTP route handlers module
//!
//! This module contains separate route handlers for different endpoint types.

pub mod exchange;
pub mod health;
pub mod metrics;

pub use exchange::handle_exchange_request;
pub use health::handle_health_request;
pub use metrics::handle_metrics_request;
