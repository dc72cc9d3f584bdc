//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuoteStore` - Transient storage of calculated quotes
//! - `QuoteLog` - Append-only log of quotes sent to clients
//! - `QuoteDocumentGenerator` - Markdown rendering of proposals and breakdowns
//! - `DocumentExportService` - Markdown to PDF/HTML conversion

mod document_export_service;
mod quote_document_generator;
mod quote_log;
mod quote_store;

pub use document_export_service::{
    DocumentExportService, ExportError, ExportFormat, ExportedDocument,
};
pub use quote_document_generator::{DocumentError, QuoteDocumentGenerator};
pub use quote_log::{QuoteLog, QuoteLogError};
pub use quote_store::{QuoteStore, QuoteStoreError};
