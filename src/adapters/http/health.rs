//! Liveness endpoint.

use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use super::quotes::QuoteAppState;

#[derive(Debug, Clone, Serialize)]
pub struct HealthView {
    pub status: &'static str,
    pub version: &'static str,
    /// Whether Pandoc answered; HTML and Markdown exports work regardless.
    pub pdf_export_available: bool,
}

/// GET /health
pub async fn health(State(state): State<QuoteAppState>) -> Json<HealthView> {
    Json(HealthView {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        pdf_export_available: state.exporter.is_available().await,
    })
}

pub fn health_routes(state: QuoteAppState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}
