//! Metrics handler module
//!
//! Serves the Prometheus text exposition.

use crate::{
    infrastructure::{adapters::MonitoringAdapter, http::responses::ResponseFormatter},
};
use std::sync::Arc;
use warp::Reply;

/// Handle Prometheus metrics requests
pub async fn handle_metrics_request(
    monitoring: Arc<MonitoringAdapter>,
) -> Result<warp::reply::Response, warp::reject::Rejection> {
    match monitoring.get_prometheus_metrics() {
        Ok(metrics) => Ok(ResponseFormatter::metrics(metrics).into_response()),
        Err(e) => Ok(ResponseFormatter::from_app_error(&e).into_response()),
    }
}
