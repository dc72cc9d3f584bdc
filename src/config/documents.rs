//! Document generation configuration

use serde::Deserialize;

use crate::adapters::document::ProposalTexts;
use crate::domain::quote::{CLIENT_FOOTER, DEFAULT_PROPOSER, INDICATIVE_VALUE_NOTICE};

use super::error::ValidationError;

/// PDF converter settings and the fixed wording of client proposals
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DocumentsConfig {
    /// Pandoc executable, looked up on PATH unless absolute
    #[serde(default = "default_pandoc_path")]
    pub pandoc_path: String,

    /// LaTeX engine Pandoc uses for PDFs
    #[serde(default = "default_pdf_engine")]
    pub pdf_engine: String,

    /// PDF conversion timeout in seconds
    #[serde(default = "default_pdf_timeout")]
    pub pdf_timeout_secs: u64,

    /// Proposer used when a request leaves it blank
    #[serde(default = "default_proposer")]
    pub default_proposer: String,

    #[serde(default = "default_client_footer")]
    pub client_footer: String,

    #[serde(default = "default_indicative_notice")]
    pub indicative_notice: String,
}

impl DocumentsConfig {
    pub fn proposal_texts(&self) -> ProposalTexts {
        ProposalTexts {
            indicative_notice: self.indicative_notice.clone(),
            client_footer: self.client_footer.clone(),
        }
    }

    /// Validate document configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.pandoc_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("documents.pandoc_path"));
        }
        if self.pdf_timeout_secs == 0 || self.pdf_timeout_secs > 300 {
            return Err(ValidationError::InvalidPdfTimeout);
        }
        Ok(())
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            pandoc_path: default_pandoc_path(),
            pdf_engine: default_pdf_engine(),
            pdf_timeout_secs: default_pdf_timeout(),
            default_proposer: default_proposer(),
            client_footer: default_client_footer(),
            indicative_notice: default_indicative_notice(),
        }
    }
}

fn default_pandoc_path() -> String {
    "pandoc".to_string()
}

fn default_pdf_engine() -> String {
    "xelatex".to_string()
}

fn default_pdf_timeout() -> u64 {
    30
}

fn default_proposer() -> String {
    DEFAULT_PROPOSER.to_string()
}

fn default_client_footer() -> String {
    CLIENT_FOOTER.to_string()
}

fn default_indicative_notice() -> String {
    INDICATIVE_VALUE_NOTICE.to_string()
}
