//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `document` - Markdown templates, HTML rendering and Pandoc PDF export
//! - `http` - Axum REST API
//! - `quote_log` - CSV quote log (and an in-memory one for tests)
//! - `quote_store` - In-memory quote workspace

pub mod document;
pub mod http;
pub mod quote_log;
pub mod quote_store;

pub use document::{ProposalTexts, PulldownExportService, TemplateDocumentGenerator};
pub use quote_log::{CsvQuoteLog, InMemoryQuoteLog};
pub use quote_store::InMemoryQuoteStore;
