//! HTTP server implementation
//!
//! Wires configuration, adapters and use cases into the warp route tree and
//! binds the listening socket.

use crate::{
    application::{
        services::ConversionService,
        use_cases::{ConvertCurrencyUseCase, HealthCheckUseCase},
    },
    config::AppConfig,
    infrastructure::{adapters::MonitoringAdapter, http::routes::RouteBuilder},
    shared::error::{AppError, AppResult},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server for the exchange API
pub struct HttpServer {
    config: AppConfig,
    convert_use_case: Arc<ConvertCurrencyUseCase>,
    health_use_case: Arc<HealthCheckUseCase>,
    monitoring: Arc<MonitoringAdapter>,
}

impl HttpServer {
    /// Create a new HTTP server instance
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let config_arc = Arc::new(config.clone());

        // Infrastructure layer
        let monitoring = Arc::new(MonitoringAdapter::new()?);

        // Application layer
        let conversion_service = Arc::new(ConversionService::new(config_arc, monitoring.clone())?);
        let convert_use_case = Arc::new(ConvertCurrencyUseCase::new(conversion_service, monitoring.clone()));
        let health_use_case = Arc::new(HealthCheckUseCase::new());

        Ok(Self {
            config,
            convert_use_case,
            health_use_case,
            monitoring,
        })
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Bind the configured address and serve until the process exits
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr: SocketAddr = self
            .config
            .server_address()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        let routes = self.create_routes();

        let (bound, server) = warp::serve(routes)
            .try_bind_ephemeral(addr)
            .map_err(|e| AppError::Http(format!("Failed to bind {}: {}", addr, e)))?;

        info!(address = %bound, "Exchanger server is started!");
        server.await;

        Ok(())
    }

    /// Create the application routes
    pub fn create_routes(&self) -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
        RouteBuilder::build_routes(
            self.convert_use_case.clone(),
            self.health_use_case.clone(),
            self.monitoring.clone(),
        )
    }
}
