//! Domain layer - Core conversion models
//!
//! This module contains the conversion models and provider selection rules
//! that are independent of infrastructure concerns like HTTP.

pub mod conversion;
pub mod health;
pub mod provider;

pub use conversion::{ConversionParams, ConversionRequest, ConversionResult, RateTable};
pub use health::HealthResponse;
pub use provider::ProviderKind;
