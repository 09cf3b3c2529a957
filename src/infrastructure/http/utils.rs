//! HTTP utilities module
//!
//! Dependency injection helpers shared by the route definitions.

use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

/// Inject a shared component into a route
pub fn with_shared<T>(value: Arc<T>) -> impl Filter<Extract = (Arc<T>,), Error = Infallible> + Clone
where
    T: Send + Sync + ?Sized + 'static,
{
    warp::any().map(move || value.clone())
}
