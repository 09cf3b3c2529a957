//! Health check handler module

use crate::{
    application::use_cases::HealthCheckUseCase,
    infrastructure::http::responses::ResponseFormatter,
};
use std::sync::Arc;
use warp::Reply;

/// Handle health check requests
pub async fn handle_health_request(
    health_use_case: Arc<HealthCheckUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    match health_use_case.execute().await {
        Ok(health) => Ok(ResponseFormatter::health(&health)),
        Err(e) => Ok(ResponseFormatter::from_app_error(&e)),
    }
}
