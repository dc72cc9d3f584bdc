//! Free-text proposal fields supplied when a quote becomes a document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Proposer used when none is given.
pub const DEFAULT_PROPOSER: &str = "Consilius Business";

/// Payment methods a client may be offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOption {
    Boleto,
    Pix,
    Transfer,
    CardInstallments,
}

impl PaymentOption {
    pub const ALL: [PaymentOption; 4] = [
        PaymentOption::Boleto,
        PaymentOption::Pix,
        PaymentOption::Transfer,
        PaymentOption::CardInstallments,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentOption::Boleto => "Boleto",
            PaymentOption::Pix => "Pix",
            PaymentOption::Transfer => "Transferência",
            PaymentOption::CardInstallments => "Cartão (parcela)",
        }
    }
}

impl fmt::Display for PaymentOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Proposal text that accompanies the numbers in both documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProposalDetails {
    #[serde(default = "default_proposer")]
    pub proposer: String,
    /// Client name and/or CNPJ.
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub project_summary: String,
    #[serde(default)]
    pub technical_proposal: String,
    /// Stages, deliverables and deadlines, one per line.
    #[serde(default)]
    pub scope: String,
    /// One team member per line.
    #[serde(default)]
    pub team: String,
    #[serde(default)]
    pub payment_modality: String,
    #[serde(default = "default_payment_options")]
    pub payment_options: Vec<PaymentOption>,
}

impl ProposalDetails {
    /// Non-blank scope lines, trimmed.
    pub fn scope_items(&self) -> Vec<&str> {
        non_blank_lines(&self.scope)
    }

    /// Non-blank team lines, trimmed.
    pub fn team_members(&self) -> Vec<&str> {
        non_blank_lines(&self.team)
    }

    /// Comma-separated payment options, or "Não informada" when none were chosen.
    pub fn payment_options_text(&self) -> String {
        if self.payment_options.is_empty() {
            "Não informada".to_string()
        } else {
            self.payment_options
                .iter()
                .map(PaymentOption::label)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl Default for ProposalDetails {
    fn default() -> Self {
        Self {
            proposer: default_proposer(),
            client: String::new(),
            title: String::new(),
            project_summary: String::new(),
            technical_proposal: String::new(),
            scope: String::new(),
            team: String::new(),
            payment_modality: String::new(),
            payment_options: default_payment_options(),
        }
    }
}

fn default_proposer() -> String {
    DEFAULT_PROPOSER.to_string()
}

fn default_payment_options() -> Vec<PaymentOption> {
    vec![PaymentOption::Pix]
}

fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
