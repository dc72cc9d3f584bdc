//! Quote HTTP adapter module.
//!
//! Provides REST API endpoints for both calculators and the documents
//! generated from their quotes.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{QuoteApiError, QuoteAppState};
pub use routes::quote_routes;
