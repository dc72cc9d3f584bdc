//! Document kinds, file naming, and the fixed notices printed on quotes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Timestamp;

/// Shown when a document is requested before any calculation exists.
pub const CALCULATION_REQUIRED_MESSAGE: &str =
    "É necessário gerar um cálculo na aba 'Calculadora' antes de criar o orçamento.";

/// Warning attached to a cost-plus calculation without overhead.
pub const MISSING_OVERHEAD_WARNING: &str = "Custo operacional não preenchido. Assumindo R$ 0,00.";

/// Printed under the price on the client proposal.
pub const INDICATIVE_VALUE_NOTICE: &str = "Valor indicativo — sujeito a negociação.";

/// Closing line of the client proposal.
pub const CLIENT_FOOTER: &str =
    "Consilius Business - Contato: contato@consilius.com.br - Telefone: (XX) XXXX-XXXX";

/// The two documents a quote can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Client-facing proposal with the final price only.
    ClientProposal,
    /// Internal cost breakdown; never sent to the client.
    InternalBreakdown,
}

impl DocumentKind {
    fn file_prefix(&self) -> &'static str {
        match self {
            DocumentKind::ClientProposal => "Orcamento",
            DocumentKind::InternalBreakdown => "Interno",
        }
    }

    fn client_fallback(&self) -> &'static str {
        match self {
            DocumentKind::ClientProposal => "Cliente",
            DocumentKind::InternalBreakdown => "Interno",
        }
    }

    /// File name for this document, e.g. `Orcamento_ACME_Ltda_20260301.pdf`.
    ///
    /// Spaces and slashes in the client name become underscores; a blank
    /// client falls back to a fixed placeholder.
    pub fn filename(&self, client: &str, at: Timestamp, extension: &str) -> String {
        let client = client.trim();
        let client = if client.is_empty() {
            self.client_fallback().to_string()
        } else {
            client
                .chars()
                .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
                .collect()
        };
        format!(
            "{}_{}_{}.{}",
            self.file_prefix(),
            client,
            at.to_date_stamp(),
            extension
        )
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::ClientProposal => write!(f, "client_proposal"),
            DocumentKind::InternalBreakdown => write!(f, "internal_breakdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn march_first() -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap())
    }

    #[test]
    fn client_filename_sanitizes_name() {
        let name = DocumentKind::ClientProposal.filename("ACME Ltda / Filial", march_first(), "pdf");
        assert_eq!(name, "Orcamento_ACME_Ltda___Filial_20260301.pdf");
    }

    #[test]
    fn client_filename_falls_back_when_blank() {
        let name = DocumentKind::ClientProposal.filename("  ", march_first(), "pdf");
        assert_eq!(name, "Orcamento_Cliente_20260301.pdf");
    }

    #[test]
    fn internal_filename_uses_internal_prefix() {
        let name = DocumentKind::InternalBreakdown.filename("", march_first(), "html");
        assert_eq!(name, "Interno_Interno_20260301.html");

        let name = DocumentKind::InternalBreakdown.filename("ACME", march_first(), "pdf");
        assert_eq!(name, "Interno_ACME_20260301.pdf");
    }
}
