//! HTTP adapters - REST API implementations.
//!
//! Each area of the API has its own module; [`app_router`] assembles them
//! behind the shared middleware stack.

pub mod catalog;
pub mod health;
pub mod quotes;

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

// Re-export key types for convenience
pub use catalog::catalog_routes;
pub use health::health_routes;
pub use quotes::{quote_routes, ErrorResponse, QuoteApiError, QuoteAppState};

/// Builds the full router with tracing, timeout and CORS layers.
pub fn app_router(state: QuoteAppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(health_routes(state.clone()))
        .merge(catalog_routes(state.clone()))
        .merge(quote_routes(state))
        .layer(cors_layer(&server.cors_origins))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

/// No configured origins means same-origin only.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .expose_headers([axum::http::header::CONTENT_DISPOSITION])
}
