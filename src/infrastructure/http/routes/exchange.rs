//! Exchange routes

use std::sync::Arc;
use warp::Filter;

use crate::application::use_cases::ConvertCurrencyUseCase;
use crate::infrastructure::http::{handlers::handle_exchange_request, utils::with_shared};

pub struct ExchangeRoutes;

impl ExchangeRoutes {
    /// `GET /exchange?source=&key=&amount=&from=&to=`
    pub fn create_exchange_route(
        use_case: Arc<ConvertCurrencyUseCase>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        warp::path("exchange")
            .and(warp::path::end())
            .and(warp::get())
            .and(warp::query::<Vec<(String, String)>>())
            .and(warp::addr::remote())
            .and(with_shared(use_case))
            .and_then(handle_exchange_request)
    }
}
