//! Document Export Service Port - Converts rendered quote markdown into
//! the artifact handed to the user.
//!
//! Markdown passes through untouched, HTML is rendered in-process, and PDF
//! is produced by an external converter.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Port for turning quote markdown into a downloadable artifact.
///
/// # Contract
///
/// Implementations must:
/// - Return a complete, standalone document for each format
/// - Keep Portuguese text (accents, `R$`) intact
/// - Report converter failures as `ExportError`, never panic
#[async_trait]
pub trait DocumentExportService: Send + Sync {
    /// Convert markdown to PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if the converter is missing, fails, or times out.
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError>;

    /// Convert markdown to a full HTML page.
    async fn to_html(&self, markdown: &str) -> Result<String, ExportError>;

    /// Whether PDF conversion is currently possible.
    async fn is_available(&self) -> bool;

    /// Convert markdown into `format` and wrap it with its filename.
    async fn export(
        &self,
        markdown: String,
        format: ExportFormat,
        filename: String,
    ) -> Result<ExportedDocument, ExportError> {
        let content = match format {
            ExportFormat::Markdown => markdown.into_bytes(),
            ExportFormat::Html => self.to_html(&markdown).await?.into_bytes(),
            ExportFormat::Pdf => self.to_pdf(&markdown).await?,
        };
        Ok(ExportedDocument::new(content, format, filename))
    }
}

/// Output formats for quote documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Markdown,
    #[default]
    Pdf,
    Html,
}

impl ExportFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "text/markdown; charset=utf-8",
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "pdf" => Ok(ExportFormat::Pdf),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// A generated document: bytes, name, and MIME type.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub content: Vec<u8>,
    pub content_type: String,
    pub filename: String,
    pub format: ExportFormat,
}

impl ExportedDocument {
    pub fn new(content: Vec<u8>, format: ExportFormat, filename: impl Into<String>) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: filename.into(),
            format,
        }
    }

    /// `Content-Disposition` header value for downloading this document.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename.replace('"', ""))
    }
}

/// Errors that can occur while exporting a document.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// The external PDF converter could not be started.
    #[error("Export service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("PDF conversion failed: {0}")]
    PdfConversionFailed(String),

    #[error("HTML conversion failed: {0}")]
    HtmlConversionFailed(String),

    #[error("Conversion timed out after {0} seconds")]
    Timeout(u64),

    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    pub fn service_unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfConversionFailed(reason.into())
    }

    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct UppercaseExport;

    #[async_trait]
    impl DocumentExportService for UppercaseExport {
        async fn to_pdf(&self, _markdown: &str) -> Result<Vec<u8>, ExportError> {
            Err(ExportError::service_unavailable("pandoc not installed"))
        }

        async fn to_html(&self, markdown: &str) -> Result<String, ExportError> {
            Ok(markdown.to_uppercase())
        }

        async fn is_available(&self) -> bool {
            false
        }
    }

    #[test]
    fn format_parses_aliases_case_insensitively() {
        assert_eq!("PDF".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("md".parse::<ExportFormat>().unwrap(), ExportFormat::Markdown);
        assert_eq!(" htm ".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert!(matches!(
            "docx".parse::<ExportFormat>(),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn format_defaults_to_pdf() {
        assert_eq!(ExportFormat::default(), ExportFormat::Pdf);
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
    }

    #[test]
    fn content_disposition_quotes_filename() {
        let doc = ExportedDocument::new(vec![], ExportFormat::Pdf, "Orcamento_ACME_20260301.pdf");
        assert_eq!(
            doc.content_disposition(),
            "attachment; filename=\"Orcamento_ACME_20260301.pdf\""
        );
    }

    #[tokio::test]
    async fn export_passes_markdown_through() {
        let doc = UppercaseExport
            .export("# Escopo".to_string(), ExportFormat::Markdown, "a.md".to_string())
            .await
            .unwrap();
        assert_eq!(doc.content, b"# Escopo");
        assert_eq!(doc.content_type, "text/markdown; charset=utf-8");
    }

    #[tokio::test]
    async fn export_dispatches_to_html() {
        let doc = UppercaseExport
            .export("escopo".to_string(), ExportFormat::Html, "a.html".to_string())
            .await
            .unwrap();
        assert_eq!(doc.content, b"ESCOPO");
        assert_eq!(doc.filename, "a.html");
    }

    #[tokio::test]
    async fn export_surfaces_pdf_errors() {
        let result = UppercaseExport
            .export("x".to_string(), ExportFormat::Pdf, "a.pdf".to_string())
            .await;
        assert!(matches!(result, Err(ExportError::ServiceUnavailable(_))));
    }

    #[test]
    fn document_export_service_is_object_safe() {
        fn check<T: DocumentExportService + ?Sized>() {}
        check::<dyn DocumentExportService>();
    }
}
