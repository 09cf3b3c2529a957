//! Use cases - one per externally visible operation

pub mod convert_currency;
pub mod health_check;

pub use convert_currency::ConvertCurrencyUseCase;
pub use health_check::HealthCheckUseCase;
