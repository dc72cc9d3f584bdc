//! Document adapters - Rendering and exporting quote documents.
//!
//! - `TemplateDocumentGenerator` - Renders proposals and internal memos as markdown
//! - `PulldownExportService` - Converts markdown to HTML (pulldown-cmark) or PDF (Pandoc)

mod pulldown_export_service;
mod template_generator;

pub use pulldown_export_service::PulldownExportService;
pub use template_generator::{ProposalTexts, TemplateDocumentGenerator};
