use crate::{
    domain::{HealthResponse, ProviderKind},
    shared::error::AppResult,
};
use serde_json::json;
use std::time::Instant;

/// Health check use case
pub struct HealthCheckUseCase {
    started: Instant,
}

impl HealthCheckUseCase {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Report process health. Providers are not contacted.
    pub async fn execute(&self) -> AppResult<HealthResponse> {
        let providers: Vec<&str> = ProviderKind::ALL.iter().map(|kind| kind.as_str()).collect();

        let details = json!({
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "version": env!("CARGO_PKG_VERSION"),
            "uptime": self.get_uptime(),
            "providers": providers,
        });

        Ok(HealthResponse::healthy(details))
    }

    fn get_uptime(&self) -> String {
        let seconds = self.started.elapsed().as_secs();
        let days = seconds / 86400;
        let hours = (seconds % 86400) / 3600;
        let minutes = (seconds % 3600) / 60;
        format!("{}d {}h {}m", days, hours, minutes)
    }
}

impl Default for HealthCheckUseCase {
    fn default() -> Self {
        Self::new()
    }
}
