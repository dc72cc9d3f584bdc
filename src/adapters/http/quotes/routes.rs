//! HTTP routes for quote endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    calculate_budget, calculate_pricing, generate_client_proposal, generate_internal_breakdown,
    get_quote, QuoteAppState,
};

/// Creates the quote router with all routes.
pub fn quote_routes(state: QuoteAppState) -> Router {
    Router::new()
        .route("/api/quotes/budget", post(calculate_budget))
        .route("/api/quotes/pricing", post(calculate_pricing))
        .route("/api/quotes/:quote_id", get(get_quote))
        .route(
            "/api/quotes/:quote_id/documents/client",
            post(generate_client_proposal),
        )
        .route(
            "/api/quotes/:quote_id/documents/internal",
            post(generate_internal_breakdown),
        )
        .with_state(state)
}
