//! Provider selection
//!
//! The set of exchange-rate providers a request may select through its
//! `source` parameter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::AppError;

/// Known exchange-rate providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// openexchangerates.org
    OpenExchangeRates,
    /// fixer.io
    FixerIo,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::OpenExchangeRates, ProviderKind::FixerIo];

    /// Identifier used in the `source` query parameter and in responses
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenExchangeRates => "openexchangerates",
            ProviderKind::FixerIo => "fixerio",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = AppError;

    // Exact match only: "FixerIO" is not a known source
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(AppError::unsupported_provider)
    }
}
