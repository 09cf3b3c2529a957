//! Metrics routes module
//!
//! This module contains the Prometheus route configuration.

use crate::{
    infrastructure::adapters::MonitoringAdapter,
    infrastructure::http::{handlers::handle_metrics_request, utils::with_shared},
};
use std::sync::Arc;
use warp::Filter;

/// Metrics routes configuration
pub struct MetricsRoutes;

impl MetricsRoutes {
    pub fn create_metrics_route(
        monitoring: Arc<MonitoringAdapter>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        warp::path("metrics")
            .and(warp::path::end())
            .and(warp::get())
            .and(with_shared(monitoring))
            .and_then(handle_metrics_request)
    }
}
