//! HTTP models - Infrastructure concerns
//!
//! This module contains models that are specific to the HTTP surface:
//! query string handling and per-request context.

use std::net::SocketAddr;

use crate::domain::ConversionParams;
use crate::shared::logging::LoggingUtils;

/// Query string of `GET /exchange`.
///
/// Kept as raw pairs so that a repeated parameter resolves to its first
/// occurrence instead of failing deserialization.
#[derive(Debug, Clone, Default)]
pub struct ExchangeQuery {
    pairs: Vec<(String, String)>,
}

impl ExchangeQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value supplied for `name`, if any
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn into_params(self) -> ConversionParams {
        let field = |name: &str| self.get(name).map(str::to_string);

        ConversionParams {
            source: field("source"),
            key: field("key"),
            amount: field("amount"),
            from: field("from"),
            to: field("to"),
        }
    }
}

/// HTTP request context for tracking and logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID
    pub request_id: String,

    /// Client address, when the transport exposes one
    pub client_ip: Option<String>,
}

impl RequestContext {
    pub fn new(remote: Option<SocketAddr>) -> Self {
        Self {
            request_id: LoggingUtils::generate_request_id(),
            client_ip: remote.map(|addr| addr.ip().to_string()),
        }
    }
}
