use serde::Serialize;
use serde_json::Value;

/// Status reported while the process is serving requests
pub const HEALTHY: &str = "healthy";

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: &'static str,
    /// Detailed health information
    pub details: Value,
}

impl HealthResponse {
    /// The process answers `/health` only while it is serving, so the
    /// report is always healthy.
    pub fn healthy(details: Value) -> Self {
        Self {
            status: HEALTHY,
            details,
        }
    }
}
