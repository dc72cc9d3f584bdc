//! HTTP endpoint exposing the service catalog.

use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;
use serde::Serialize;

use crate::domain::catalog::ServiceArea;

use super::quotes::QuoteAppState;

/// Areas in catalog order, each with its services.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub areas: Vec<ServiceArea>,
}

/// GET /api/catalog
pub async fn get_catalog(State(state): State<QuoteAppState>) -> Json<CatalogView> {
    Json(CatalogView {
        areas: state.catalog.all_areas().to_vec(),
    })
}

/// Creates the catalog router.
pub fn catalog_routes(state: QuoteAppState) -> Router {
    Router::new()
        .route("/api/catalog", get(get_catalog))
        .with_state(state)
}
