//! HTTP responses module
//!
//! This module contains HTTP response formatting and utilities.

use crate::{
    domain::{ConversionResult, HealthResponse},
    shared::error::AppError,
};
use warp::http::StatusCode;
use warp::reply::{Json, WithStatus};

/// Response formatter for HTTP responses
pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Format a successful conversion
    pub fn conversion(result: &ConversionResult) -> WithStatus<Json> {
        warp::reply::with_status(warp::reply::json(result), StatusCode::OK)
    }

    /// Format an application error as `{error, name?}` with its status code
    pub fn from_app_error(error: &AppError) -> WithStatus<Json> {
        warp::reply::with_status(
            warp::reply::json(&error.to_response_body()),
            error.http_status_code(),
        )
    }

    /// Format a health check response
    pub fn health(health: &HealthResponse) -> WithStatus<Json> {
        warp::reply::with_status(warp::reply::json(health), StatusCode::OK)
    }

    /// Format Prometheus text exposition
    pub fn metrics(body: String) -> impl warp::Reply {
        warp::reply::with_header(
            warp::reply::with_status(body, StatusCode::OK),
            "Content-Type",
            "text/plain; version=0.0.4; charset=utf-8",
        )
    }
}
