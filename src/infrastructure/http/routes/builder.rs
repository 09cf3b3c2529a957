//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use crate::{
    application::use_cases::{ConvertCurrencyUseCase, HealthCheckUseCase},
    infrastructure::adapters::MonitoringAdapter,
    infrastructure::http::routes::{ExchangeRoutes, HealthRoutes, MetricsRoutes},
};
use std::sync::Arc;
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        convert_use_case: Arc<ConvertCurrencyUseCase>,
        health_use_case: Arc<HealthCheckUseCase>,
        monitoring: Arc<MonitoringAdapter>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let exchange_route = ExchangeRoutes::create_exchange_route(convert_use_case);
        let health_route = HealthRoutes::create_health_route(health_use_case);
        let metrics_route = MetricsRoutes::create_metrics_route(monitoring);

        exchange_route.or(health_route).or(metrics_route)
    }
}
