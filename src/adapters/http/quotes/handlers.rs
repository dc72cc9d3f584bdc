//! HTTP handlers for quote endpoints.
//!
//! These handlers connect Axum routes to the quote application handlers.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::{error, warn};

use crate::application::handlers::{
    CalculateBudgetHandler, CalculatePricingHandler, CalculateQuoteError, GenerateDocumentCommand,
    GenerateDocumentError, GenerateDocumentHandler, GetQuoteHandler,
};
use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::{DomainError, ErrorCode, QuoteId};
use crate::domain::pricing::{CompanySize, MarginEngine, MultiplierEngine};
use crate::domain::quote::{DocumentKind, DEFAULT_PROPOSER};
use crate::ports::{
    DocumentExportService, ExportFormat, ExportedDocument, QuoteDocumentGenerator, QuoteLog,
    QuoteStore,
};

use super::dto::{BudgetRequest, DocumentRequest, ErrorResponse, PricingRequest, QuoteView};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Quote API error that implements IntoResponse.
#[derive(Debug)]
pub enum QuoteApiError {
    /// Input failed validation; every message is reported.
    Validation(Vec<String>),
    BadRequest(String),
    Domain(DomainError),
}

impl QuoteApiError {
    fn status(&self) -> StatusCode {
        match self {
            QuoteApiError::Validation(_) | QuoteApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            QuoteApiError::Domain(err) => match err.code {
                ErrorCode::ValidationFailed | ErrorCode::EmptyField | ErrorCode::OutOfRange => {
                    StatusCode::BAD_REQUEST
                }
                ErrorCode::QuoteNotFound
                | ErrorCode::CatalogEntryNotFound
                | ErrorCode::CalculationRequired => StatusCode::NOT_FOUND,
                ErrorCode::DocumentGenerationFailed => StatusCode::BAD_GATEWAY,
                ErrorCode::StorageError | ErrorCode::InternalError => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        }
    }
}

impl IntoResponse for QuoteApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            QuoteApiError::Validation(messages) => {
                ErrorResponse::new(ErrorCode::ValidationFailed, messages.join(" "))
                    .with_details(json!({ "errors": messages }))
            }
            QuoteApiError::BadRequest(message) => ErrorResponse::bad_request(message),
            QuoteApiError::Domain(err) => {
                if status.is_server_error() {
                    error!(code = %err.code, message = %err.message, "Quote request failed");
                }
                let response = ErrorResponse::new(err.code, err.message);
                if err.details.is_empty() {
                    response
                } else {
                    response.with_details(json!(err.details))
                }
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<CalculateQuoteError> for QuoteApiError {
    fn from(err: CalculateQuoteError) -> Self {
        match err {
            CalculateQuoteError::Invalid(errors) => QuoteApiError::Validation(errors.messages()),
            CalculateQuoteError::Storage(e) => {
                QuoteApiError::Domain(DomainError::new(ErrorCode::StorageError, e.to_string()))
            }
        }
    }
}

impl From<GenerateDocumentError> for QuoteApiError {
    fn from(err: GenerateDocumentError) -> Self {
        QuoteApiError::Domain(err.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing quote dependencies.
#[derive(Clone)]
pub struct QuoteAppState {
    pub catalog: Arc<ServiceCatalog>,
    pub margin_engine: MarginEngine,
    pub multiplier_engine: MultiplierEngine,
    pub quote_store: Arc<dyn QuoteStore>,
    pub generator: Arc<dyn QuoteDocumentGenerator>,
    pub exporter: Arc<dyn DocumentExportService>,
    pub quote_log: Arc<dyn QuoteLog>,
    pub default_proposer: String,
}

impl QuoteAppState {
    pub fn new(
        catalog: Arc<ServiceCatalog>,
        margin_engine: MarginEngine,
        multiplier_engine: MultiplierEngine,
        quote_store: Arc<dyn QuoteStore>,
        generator: Arc<dyn QuoteDocumentGenerator>,
        exporter: Arc<dyn DocumentExportService>,
        quote_log: Arc<dyn QuoteLog>,
    ) -> Self {
        Self {
            catalog,
            margin_engine,
            multiplier_engine,
            quote_store,
            generator,
            exporter,
            quote_log,
            default_proposer: DEFAULT_PROPOSER.to_string(),
        }
    }

    pub fn with_default_proposer(mut self, proposer: impl Into<String>) -> Self {
        self.default_proposer = proposer.into();
        self
    }

    pub fn calculate_budget_handler(&self) -> CalculateBudgetHandler {
        CalculateBudgetHandler::new(self.margin_engine.clone(), self.quote_store.clone())
    }

    pub fn calculate_pricing_handler(&self) -> CalculatePricingHandler {
        CalculatePricingHandler::new(
            self.catalog.clone(),
            self.multiplier_engine.clone(),
            self.quote_store.clone(),
        )
    }

    pub fn get_quote_handler(&self) -> GetQuoteHandler {
        GetQuoteHandler::new(self.quote_store.clone())
    }

    pub fn generate_document_handler(&self) -> GenerateDocumentHandler {
        GenerateDocumentHandler::new(
            self.quote_store.clone(),
            self.generator.clone(),
            self.exporter.clone(),
            self.quote_log.clone(),
        )
        .with_default_proposer(self.default_proposer.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/quotes/budget
pub async fn calculate_budget(
    State(state): State<QuoteAppState>,
    Json(request): Json<BudgetRequest>,
) -> Result<(StatusCode, Json<QuoteView>), QuoteApiError> {
    let result = state
        .calculate_budget_handler()
        .handle(request.into_command())
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(QuoteView::new(&result.quote, result.warnings)),
    ))
}

/// POST /api/quotes/pricing
pub async fn calculate_pricing(
    State(state): State<QuoteAppState>,
    Json(request): Json<PricingRequest>,
) -> Result<(StatusCode, Json<QuoteView>), QuoteApiError> {
    let company_size = request
        .company_size
        .parse::<CompanySize>()
        .map_err(|e| QuoteApiError::Validation(vec![e.to_string()]))?;

    let result = state
        .calculate_pricing_handler()
        .handle(request.into_command(company_size))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(QuoteView::new(&result.quote, result.warnings)),
    ))
}

/// GET /api/quotes/:quote_id
pub async fn get_quote(
    State(state): State<QuoteAppState>,
    Path(quote_id): Path<String>,
) -> Result<Json<QuoteView>, QuoteApiError> {
    let quote_id = parse_quote_id(&quote_id)?;
    let quote = state.get_quote_handler().handle(quote_id).await?;
    Ok(Json(QuoteView::new(&quote, Vec::new())))
}

/// POST /api/quotes/:quote_id/documents/client
///
/// Returns the proposal file and records the quote in the log.
pub async fn generate_client_proposal(
    State(state): State<QuoteAppState>,
    Path(quote_id): Path<String>,
    Json(request): Json<DocumentRequest>,
) -> Result<Response, QuoteApiError> {
    generate_document(state, &quote_id, DocumentKind::ClientProposal, request).await
}

/// POST /api/quotes/:quote_id/documents/internal
pub async fn generate_internal_breakdown(
    State(state): State<QuoteAppState>,
    Path(quote_id): Path<String>,
    Json(request): Json<DocumentRequest>,
) -> Result<Response, QuoteApiError> {
    generate_document(state, &quote_id, DocumentKind::InternalBreakdown, request).await
}

async fn generate_document(
    state: QuoteAppState,
    quote_id: &str,
    kind: DocumentKind,
    request: DocumentRequest,
) -> Result<Response, QuoteApiError> {
    let quote_id = parse_quote_id(quote_id)?;
    let format = match request.format.as_deref() {
        Some(format) => format
            .parse::<ExportFormat>()
            .map_err(|e| QuoteApiError::BadRequest(e.to_string()))?,
        None => ExportFormat::default(),
    };

    let cmd = GenerateDocumentCommand {
        quote_id,
        kind,
        details: request.details,
        format,
    };
    let document = state.generate_document_handler().handle(cmd).await?;

    Ok(document_response(document))
}

fn document_response(document: ExportedDocument) -> Response {
    let disposition = document.content_disposition();
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response()
}

fn parse_quote_id(raw: &str) -> Result<QuoteId, QuoteApiError> {
    raw.parse().map_err(|_| {
        warn!(quote_id = raw, "Malformed quote id");
        QuoteApiError::BadRequest("Invalid quote ID format".to_string())
    })
}
