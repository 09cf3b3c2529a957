//! Error handling module
//!
//! This module provides centralized error handling for the application.

use serde_json::Value;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// The caller did not supply a provider API key
    #[error("API key is required!")]
    MissingCredential { name: String },

    /// The `source` selector names no known provider
    #[error("Invalid exchange rate source")]
    UnsupportedProvider { name: String },

    /// The amount could not be parsed as a decimal number
    #[error("Invalid amount")]
    InvalidAmount { name: String },

    /// Network, decoding or remote failure while talking to a provider
    #[error("{0}")]
    Provider(String),
}

impl AppError {
    pub fn missing_credential() -> Self {
        AppError::MissingCredential { name: "key".to_string() }
    }

    pub fn unsupported_provider() -> Self {
        AppError::UnsupportedProvider { name: "source".to_string() }
    }

    pub fn invalid_amount() -> Self {
        AppError::InvalidAmount { name: "amount".to_string() }
    }

    /// Name of the offending request field, for validation failures
    pub fn field_name(&self) -> Option<&str> {
        match self {
            AppError::MissingCredential { name }
            | AppError::UnsupportedProvider { name }
            | AppError::InvalidAmount { name } => Some(name),
            _ => None,
        }
    }

    /// Short label used for metrics and logs
    pub fn outcome(&self) -> &'static str {
        match self {
            AppError::MissingCredential { .. } => "missing_credential",
            AppError::UnsupportedProvider { .. } => "unsupported_provider",
            AppError::InvalidAmount { .. } => "invalid_amount",
            AppError::Provider(_) => "provider_error",
            _ => "internal_error",
        }
    }

    /// Convert to the JSON error body returned to clients
    pub fn to_response_body(&self) -> Value {
        match self.field_name() {
            Some(name) => serde_json::json!({
                "error": self.to_string(),
                "name": name,
            }),
            None => serde_json::json!({
                "error": self.to_string(),
            }),
        }
    }

    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::MissingCredential { .. } => warp::http::StatusCode::UNAUTHORIZED,
            AppError::UnsupportedProvider { .. } => warp::http::StatusCode::BAD_REQUEST,
            AppError::InvalidAmount { .. } => warp::http::StatusCode::BAD_REQUEST,
            AppError::Provider(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::Validation(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::Json(_) => warp::http::StatusCode::BAD_REQUEST,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}

// Outbound failures surface as provider errors. The URL carries the
// caller's API key and is stripped before the message reaches a client.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Provider(err.without_url().to_string())
    }
}
