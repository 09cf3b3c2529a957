//! Health routes

use std::sync::Arc;
use warp::Filter;

use crate::application::use_cases::HealthCheckUseCase;
use crate::infrastructure::http::{handlers::handle_health_request, utils::with_shared};

pub struct HealthRoutes;

impl HealthRoutes {
    pub fn create_health_route(
        health_use_case: Arc<HealthCheckUseCase>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .and(with_shared(health_use_case))
            .and_then(handle_health_request)
    }
}
