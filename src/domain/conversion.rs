//! Conversion domain models
//!
//! Request, rate table and result types for a single currency conversion.
//! None of these outlive the request that produced them.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use crate::domain::provider::ProviderKind;
use crate::shared::error::{AppError, AppResult};

/// Untyped conversion parameters exactly as the caller supplied them
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConversionParams {
    pub source: Option<String>,
    pub key: Option<String>,
    pub amount: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl ConversionParams {
    /// Validate in a fixed order: key, then source, then amount.
    ///
    /// Currency codes are passed through untouched, empty when absent.
    pub fn validate(self) -> AppResult<ConversionRequest> {
        let api_key = match self.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(AppError::missing_credential()),
        };

        let source: ProviderKind = self.source.as_deref().unwrap_or_default().parse()?;

        let amount: f64 = self
            .amount
            .as_deref()
            .unwrap_or_default()
            .parse()
            .map_err(|_| AppError::invalid_amount())?;

        Ok(ConversionRequest {
            source,
            api_key,
            amount,
            from: self.from.unwrap_or_default(),
            to: self.to.unwrap_or_default(),
        })
    }
}

/// A validated conversion request
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub source: ProviderKind,
    pub api_key: String,
    pub amount: f64,
    pub from: String,
    pub to: String,
}

/// Rates reported by a provider, each relative to the provider's base currency
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RateTable {
    pub rates: HashMap<String, f64>,

    /// Base currency, when the provider reports one. Not used for cross rates.
    #[serde(default)]
    pub base: Option<String>,
}

impl RateTable {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates, base: None }
    }

    /// Rate for `code`, or `0.0` when the provider did not report it
    pub fn rate(&self, code: &str) -> f64 {
        match self.rates.get(code) {
            Some(rate) => *rate,
            None => {
                warn!(currency = %code, "Currency missing from provider rate table");
                0.0
            }
        }
    }

    /// Cross rate `rate[to] / rate[from]`.
    ///
    /// Missing codes read as zero, so the result is `0` when `to` is
    /// missing, infinite when only `from` is missing and NaN when both are.
    pub fn cross_rate(&self, from: &str, to: &str) -> f64 {
        self.rate(to) / self.rate(from)
    }
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionResult {
    pub source: ProviderKind,
    pub from: String,
    pub to: String,
    pub amount: f64,
    #[serde(rename = "converted")]
    pub converted_amount: f64,
}

impl ConversionResult {
    pub fn new(request: &ConversionRequest, converted_amount: f64) -> Self {
        Self {
            source: request.source,
            from: request.from.clone(),
            to: request.to.clone(),
            amount: request.amount,
            converted_amount,
        }
    }
}
