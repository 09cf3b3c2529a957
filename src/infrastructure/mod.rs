//! Infrastructure layer - External concerns
//!
//! This module contains the outbound provider adapters, monitoring and the
//! HTTP server.

pub mod adapters;
pub mod http;
