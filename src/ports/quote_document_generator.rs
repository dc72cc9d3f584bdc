//! Quote Document Generator Port - Markdown rendering of quote documents.

use thiserror::Error;

use crate::domain::foundation::Timestamp;
use crate::domain::quote::{DocumentKind, ProposalDetails, Quote};

/// Port for rendering a calculated quote as markdown.
///
/// # Contract
///
/// Implementations must:
/// - Show only the selected price on the client proposal
/// - Keep every calculation input and intermediate value on the internal breakdown
/// - Format money as Brazilian reais
pub trait QuoteDocumentGenerator: Send + Sync {
    /// Client-facing proposal.
    fn client_proposal(
        &self,
        quote: &Quote,
        details: &ProposalDetails,
    ) -> Result<String, DocumentError>;

    /// Internal calculation memo, stamped with `generated_at`.
    fn internal_breakdown(
        &self,
        quote: &Quote,
        details: &ProposalDetails,
        generated_at: Timestamp,
    ) -> Result<String, DocumentError>;

    /// Render the document of the given kind.
    fn render(
        &self,
        kind: DocumentKind,
        quote: &Quote,
        details: &ProposalDetails,
        generated_at: Timestamp,
    ) -> Result<String, DocumentError> {
        match kind {
            DocumentKind::ClientProposal => self.client_proposal(quote, details),
            DocumentKind::InternalBreakdown => {
                self.internal_breakdown(quote, details, generated_at)
            }
        }
    }
}

/// Errors that can occur while rendering a quote document.
#[derive(Debug, Clone, Error)]
pub enum DocumentError {
    #[error("Template rendering failed: {0}")]
    Render(String),
}

impl From<std::fmt::Error> for DocumentError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}
