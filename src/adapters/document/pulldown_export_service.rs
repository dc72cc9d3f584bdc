//! Quote export adapter: pulldown-cmark for HTML, Pandoc for PDF.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use pulldown_cmark::{html, Options, Parser};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::ports::{DocumentExportService, ExportError};

const DEFAULT_TITLE: &str = "Orçamento";

/// Exports quote markdown to HTML in-process and to PDF through Pandoc.
///
/// HTML conversion never needs external tools. PDF conversion spawns
/// `pandoc` and fails with `ServiceUnavailable` when it cannot be started.
#[derive(Debug, Clone)]
pub struct PulldownExportService {
    pandoc_path: String,
    pdf_engine: String,
    pdf_timeout_secs: u64,
}

impl Default for PulldownExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownExportService {
    pub fn new() -> Self {
        Self {
            pandoc_path: "pandoc".to_string(),
            pdf_engine: "xelatex".to_string(),
            pdf_timeout_secs: 30,
        }
    }

    pub fn with_pandoc_path(mut self, path: impl Into<String>) -> Self {
        self.pandoc_path = path.into();
        self
    }

    /// LaTeX engine Pandoc renders PDFs with. Must handle UTF-8 input.
    pub fn with_pdf_engine(mut self, engine: impl Into<String>) -> Self {
        self.pdf_engine = engine.into();
        self
    }

    pub fn with_pdf_timeout(mut self, timeout_secs: u64) -> Self {
        self.pdf_timeout_secs = timeout_secs;
        self
    }

    fn wrap_html(&self, body: &str, title: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
    <article class="quote-document">
{body}
    </article>
</body>
</html>"#,
            title = html_escape(title),
            css = QUOTE_CSS,
            body = body
        )
    }

    /// First level-one heading, or a generic title.
    fn extract_title(markdown: &str) -> String {
        markdown
            .lines()
            .find_map(|line| line.trim().strip_prefix("# "))
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string())
    }

    async fn pandoc_available(&self) -> bool {
        Command::new(&self.pandoc_path)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl DocumentExportService for PulldownExportService {
    async fn to_pdf(&self, markdown: &str) -> Result<Vec<u8>, ExportError> {
        let mut child = Command::new(&self.pandoc_path)
            .args(["-f", "markdown", "-t", "pdf"])
            .arg(format!("--pdf-engine={}", self.pdf_engine))
            .args(["-V", "geometry:margin=2cm", "-V", "lang=pt-BR", "-o", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                warn!(pandoc = %self.pandoc_path, error = %e, "Pandoc could not be started");
                ExportError::service_unavailable(format!(
                    "Pandoc could not be started ({}): {}",
                    self.pandoc_path, e
                ))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(markdown.as_bytes())
                .await
                .map_err(|e| ExportError::io_error(format!("writing to Pandoc: {}", e)))?;
        }

        let output = tokio::time::timeout(
            Duration::from_secs(self.pdf_timeout_secs),
            child.wait_with_output(),
        )
        .await
        .map_err(|_| ExportError::Timeout(self.pdf_timeout_secs))?
        .map_err(|e| ExportError::pdf_failed(format!("Pandoc execution failed: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExportError::pdf_failed(stderr.trim().to_string()));
        }

        debug!(bytes = output.stdout.len(), "PDF rendered");
        Ok(output.stdout)
    }

    async fn to_html(&self, markdown: &str) -> Result<String, ExportError> {
        let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES);
        let mut body = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut body, parser);

        Ok(self.wrap_html(&body, &Self::extract_title(markdown)))
    }

    async fn is_available(&self) -> bool {
        self.pandoc_available().await
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const QUOTE_CSS: &str = r#"
body {
    font-family: 'Helvetica Neue', Arial, sans-serif;
    font-size: 15px;
    line-height: 1.5;
    color: #1f2937;
    max-width: 820px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    color: #1e3a8a;
    border-bottom: 2px solid #1e3a8a;
    padding-bottom: 0.4rem;
}

h2 {
    color: #1e3a8a;
    margin-top: 1.6em;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin: 1em 0;
}

th, td {
    padding: 0.4rem 0.6rem;
    border: 1px solid #d1d5db;
    text-align: left;
}

th {
    background-color: #f3f4f6;
}

em {
    color: #6b7280;
}

hr {
    border: none;
    border-top: 1px solid #d1d5db;
    margin: 2em 0;
}

@media print {
    body {
        padding: 0;
    }

    table {
        page-break-inside: avoid;
    }
}
"#;
