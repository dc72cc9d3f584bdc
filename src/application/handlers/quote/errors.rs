//! Errors shared by the quote handlers.

use crate::domain::foundation::{DomainError, ErrorCode, InputErrors, QuoteId};
use crate::domain::quote::{DocumentKind, CALCULATION_REQUIRED_MESSAGE};
use crate::ports::{DocumentError, ExportError, QuoteLogError, QuoteStoreError};

/// Error type for the calculation handlers.
#[derive(Debug)]
pub enum CalculateQuoteError {
    /// One or more inputs failed validation.
    Invalid(InputErrors),
    /// The quote could not be stored.
    Storage(QuoteStoreError),
}

impl CalculateQuoteError {
    /// User-facing messages, one per problem.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CalculateQuoteError::Invalid(errors) => errors.messages(),
            CalculateQuoteError::Storage(err) => vec![err.to_string()],
        }
    }
}

impl std::fmt::Display for CalculateQuoteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculateQuoteError::Invalid(errors) => write!(f, "{}", errors),
            CalculateQuoteError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CalculateQuoteError {}

impl From<InputErrors> for CalculateQuoteError {
    fn from(errors: InputErrors) -> Self {
        CalculateQuoteError::Invalid(errors)
    }
}

impl From<QuoteStoreError> for CalculateQuoteError {
    fn from(err: QuoteStoreError) -> Self {
        CalculateQuoteError::Storage(err)
    }
}

/// Error type for reading quotes and generating their documents.
#[derive(Debug)]
pub enum GenerateDocumentError {
    /// No calculation exists under the id.
    QuoteNotFound(QuoteId),
    /// Markdown rendering failed.
    Render(DocumentKind, DocumentError),
    /// Conversion to the requested format failed.
    Export(DocumentKind, ExportError),
    /// The document was produced but the quote could not be logged.
    Log(QuoteLogError),
    Storage(QuoteStoreError),
}

impl std::fmt::Display for GenerateDocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateDocumentError::QuoteNotFound(_) => write!(f, "{}", CALCULATION_REQUIRED_MESSAGE),
            GenerateDocumentError::Render(_, err) => write!(f, "{}", err),
            GenerateDocumentError::Export(_, err) => write!(f, "{}", err),
            GenerateDocumentError::Log(err) => write!(f, "{}", err),
            GenerateDocumentError::Storage(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for GenerateDocumentError {}

impl From<QuoteLogError> for GenerateDocumentError {
    fn from(err: QuoteLogError) -> Self {
        GenerateDocumentError::Log(err)
    }
}

impl From<QuoteStoreError> for GenerateDocumentError {
    fn from(err: QuoteStoreError) -> Self {
        GenerateDocumentError::Storage(err)
    }
}

impl From<GenerateDocumentError> for DomainError {
    fn from(err: GenerateDocumentError) -> Self {
        match &err {
            GenerateDocumentError::QuoteNotFound(id) => {
                DomainError::new(ErrorCode::CalculationRequired, err.to_string())
                    .with_detail("quote_id", id.to_string())
            }
            GenerateDocumentError::Render(kind, _) | GenerateDocumentError::Export(kind, _) => {
                DomainError::new(
                    ErrorCode::DocumentGenerationFailed,
                    format!("{}: {}", failure_prefix(*kind), err),
                )
                .with_detail("kind", kind.to_string())
            }
            GenerateDocumentError::Log(_) | GenerateDocumentError::Storage(_) => {
                DomainError::new(ErrorCode::StorageError, err.to_string())
            }
        }
    }
}

/// Message shown when a document of this kind cannot be produced.
fn failure_prefix(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::ClientProposal => "Erro ao gerar PDF",
        DocumentKind::InternalBreakdown => "Erro ao gerar PDF Interno",
    }
}
