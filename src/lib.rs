//! Exchanger - currency conversion over pluggable exchange-rate providers
//!
//! This library provides an HTTP API that converts an amount between two
//! currencies using a rate table fetched, per request, from the provider the
//! caller selects.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
