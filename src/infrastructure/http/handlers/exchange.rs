//! Exchange handler module
//!
//! Handles `GET /exchange`, the currency conversion endpoint.

use crate::{
    application::use_cases::ConvertCurrencyUseCase,
    infrastructure::http::{
        models::{ExchangeQuery, RequestContext},
        responses::ResponseFormatter,
    },
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info_span, Instrument};
use warp::Reply;

/// Handle currency conversion requests
pub async fn handle_exchange_request(
    query: Vec<(String, String)>,
    remote: Option<SocketAddr>,
    use_case: Arc<ConvertCurrencyUseCase>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let context = RequestContext::new(remote);
    let span = info_span!(
        "exchange",
        request_id = %context.request_id,
        client_ip = context.client_ip.as_deref().unwrap_or("-"),
    );

    let params = ExchangeQuery::from_pairs(query).into_params();
    let reply = match use_case.execute(&context.request_id, params).instrument(span).await {
        Ok(result) => ResponseFormatter::conversion(&result),
        Err(e) => ResponseFormatter::from_app_error(&e),
    };

    Ok(warp::reply::with_header(reply, "X-Request-Id", context.request_id))
}
