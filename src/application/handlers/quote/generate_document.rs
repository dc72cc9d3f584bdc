//! GenerateDocumentHandler - Renders, exports and logs quote documents.
//!
//! Client proposals are appended to the quote log once exported; internal
//! breakdowns are never logged.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::foundation::{QuoteId, Timestamp};
use crate::domain::quote::{DocumentKind, ProposalDetails, QuoteLogEntry, DEFAULT_PROPOSER};
use crate::ports::{
    DocumentExportService, ExportFormat, ExportedDocument, QuoteDocumentGenerator, QuoteLog,
    QuoteStore,
};

use super::errors::GenerateDocumentError;

/// Command to produce one document for a stored quote.
#[derive(Debug, Clone)]
pub struct GenerateDocumentCommand {
    pub quote_id: QuoteId,
    pub kind: DocumentKind,
    pub details: ProposalDetails,
    pub format: ExportFormat,
}

/// Handler for quote documents.
///
/// # Dependencies
///
/// - `QuoteStore`: the calculation to document
/// - `QuoteDocumentGenerator`: markdown rendering
/// - `DocumentExportService`: conversion to the requested format
/// - `QuoteLog`: record of client proposals
pub struct GenerateDocumentHandler {
    quote_store: Arc<dyn QuoteStore>,
    generator: Arc<dyn QuoteDocumentGenerator>,
    exporter: Arc<dyn DocumentExportService>,
    quote_log: Arc<dyn QuoteLog>,
    default_proposer: String,
}

impl GenerateDocumentHandler {
    pub fn new(
        quote_store: Arc<dyn QuoteStore>,
        generator: Arc<dyn QuoteDocumentGenerator>,
        exporter: Arc<dyn DocumentExportService>,
        quote_log: Arc<dyn QuoteLog>,
    ) -> Self {
        Self {
            quote_store,
            generator,
            exporter,
            quote_log,
            default_proposer: DEFAULT_PROPOSER.to_string(),
        }
    }

    /// Proposer used when the command leaves it blank.
    pub fn with_default_proposer(mut self, proposer: impl Into<String>) -> Self {
        self.default_proposer = proposer.into();
        self
    }

    pub async fn handle(
        &self,
        cmd: GenerateDocumentCommand,
    ) -> Result<ExportedDocument, GenerateDocumentError> {
        let quote = self
            .quote_store
            .find_by_id(&cmd.quote_id)
            .await?
            .ok_or(GenerateDocumentError::QuoteNotFound(cmd.quote_id))?;

        let mut details = cmd.details;
        if details.proposer.trim().is_empty() {
            details.proposer = self.default_proposer.clone();
        }

        let now = Timestamp::now();
        let markdown = self
            .generator
            .render(cmd.kind, &quote, &details, now)
            .map_err(|e| GenerateDocumentError::Render(cmd.kind, e))?;
        let filename = cmd
            .kind
            .filename(&details.client, now, cmd.format.extension());

        let document = self
            .exporter
            .export(markdown, cmd.format, filename)
            .await
            .map_err(|e| {
                warn!(quote_id = %cmd.quote_id, kind = %cmd.kind, error = %e, "Document export failed");
                GenerateDocumentError::Export(cmd.kind, e)
            })?;

        if cmd.kind == DocumentKind::ClientProposal {
            let entry = QuoteLogEntry::from_quote(&quote, &details, now);
            self.quote_log.append(&entry).await?;
        }

        info!(
            quote_id = %cmd.quote_id,
            kind = %cmd.kind,
            format = %cmd.format,
            filename = %document.filename,
            bytes = document.content.len(),
            "Document generated"
        );

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::document::TemplateDocumentGenerator;
    use crate::adapters::quote_log::InMemoryQuoteLog;
    use crate::adapters::quote_store::InMemoryQuoteStore;
    use crate::domain::pricing::{compute_budget, BudgetInputs, MarginPolicy, PriceTier};
    use crate::domain::quote::{Quote, QuoteCalculation};
    use crate::ports::ExportError;
    use async_trait::async_trait;

    // ───────────────────────────────────────────────────────────────
    // Mock implementations
    // ───────────────────────────────────────────────────────────────

    struct MockExporter {
        fail: bool,
    }

    #[async_trait]
    impl DocumentExportService for MockExporter {
        async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
            if self.fail {
                return Err(ExportError::pdf_failed("xelatex not found"));
            }
            Ok(format!("%PDF {}", markdown.len()).into_bytes())
        }

        async fn to_html(&self, markdown: &str) -> Result<String, ExportError> {
            Ok(format!("<html>{}</html>", markdown))
        }

        async fn is_available(&self) -> bool {
            !self.fail
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Test helpers
    // ───────────────────────────────────────────────────────────────

    struct Fixture {
        store: Arc<InMemoryQuoteStore>,
        log: InMemoryQuoteLog,
        handler: GenerateDocumentHandler,
    }

    fn fixture(fail_export: bool) -> Fixture {
        let store = Arc::new(InMemoryQuoteStore::new());
        let log = InMemoryQuoteLog::new();
        let handler = GenerateDocumentHandler::new(
            store.clone(),
            Arc::new(TemplateDocumentGenerator::default()),
            Arc::new(MockExporter { fail: fail_export }),
            Arc::new(log.clone()),
        );
        Fixture {
            store,
            log,
            handler,
        }
    }

    async fn stored_quote(store: &InMemoryQuoteStore) -> Quote {
        let result = compute_budget(
            &MarginPolicy::default(),
            &BudgetInputs {
                hours_per_day: 2.0,
                work_days: 5.0,
                people_count: 3.0,
                hourly_rate: 20.0,
                overhead_cost: 200.0,
                surcharge_percent: 0.05,
            },
        );
        let quote = Quote::new(QuoteCalculation::Margin { result }, PriceTier::Negotiation);
        store.save(&quote).await.unwrap();
        quote
    }

    fn command(quote_id: QuoteId, kind: DocumentKind, format: ExportFormat) -> GenerateDocumentCommand {
        GenerateDocumentCommand {
            quote_id,
            kind,
            details: ProposalDetails {
                client: "ACME Ltda".to_string(),
                ..Default::default()
            },
            format,
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn client_proposal_is_exported_and_logged() {
        let f = fixture(false);
        let quote = stored_quote(&f.store).await;

        let doc = f
            .handler
            .handle(command(quote.id(), DocumentKind::ClientProposal, ExportFormat::Pdf))
            .await
            .unwrap();

        assert!(doc.filename.starts_with("Orcamento_ACME_Ltda_"));
        assert!(doc.filename.ends_with(".pdf"));
        assert_eq!(doc.content_type, "application/pdf");

        let entries = f.log.entries().await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].client, "ACME Ltda");
        assert_eq!(entries[0].price_tier, "Preço de negociação");
        assert!((entries[0].final_price - 960.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn internal_breakdown_is_not_logged() {
        let f = fixture(false);
        let quote = stored_quote(&f.store).await;

        let doc = f
            .handler
            .handle(command(quote.id(), DocumentKind::InternalBreakdown, ExportFormat::Markdown))
            .await
            .unwrap();

        let text = String::from_utf8(doc.content).unwrap();
        assert!(text.starts_with("# DOCUMENTO INTERNO"));
        assert!(doc.filename.starts_with("Interno_ACME_Ltda_"));
        assert!(f.log.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_quote_requires_calculation() {
        let f = fixture(false);

        let err = f
            .handler
            .handle(command(QuoteId::new(), DocumentKind::ClientProposal, ExportFormat::Pdf))
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateDocumentError::QuoteNotFound(_)));
        assert!(f.log.is_empty().await);
    }

    #[tokio::test]
    async fn export_failure_skips_log() {
        let f = fixture(true);
        let quote = stored_quote(&f.store).await;

        let err = f
            .handler
            .handle(command(quote.id(), DocumentKind::ClientProposal, ExportFormat::Pdf))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateDocumentError::Export(DocumentKind::ClientProposal, _)
        ));
        assert!(f.log.is_empty().await);
    }

    #[tokio::test]
    async fn internal_export_failure_is_tagged_with_its_kind() {
        let f = fixture(true);
        let quote = stored_quote(&f.store).await;

        let err = f
            .handler
            .handle(command(quote.id(), DocumentKind::InternalBreakdown, ExportFormat::Pdf))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateDocumentError::Export(DocumentKind::InternalBreakdown, _)
        ));
        let domain: crate::domain::foundation::DomainError = err.into();
        assert!(domain.message.starts_with("Erro ao gerar PDF Interno: "));
    }

    #[tokio::test]
    async fn blank_proposer_falls_back_to_configured_default() {
        let f = fixture(false);
        let handler = f.handler.with_default_proposer("Equipe Consilius");
        let quote = stored_quote(&f.store).await;
        let mut cmd = command(quote.id(), DocumentKind::ClientProposal, ExportFormat::Html);
        cmd.details.proposer = "  ".to_string();

        handler.handle(cmd).await.unwrap();

        assert_eq!(f.log.entries().await[0].proposer, "Equipe Consilius");
    }
}
