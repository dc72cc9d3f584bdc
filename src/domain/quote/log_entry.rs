//! One row of the quote log.

use serde::{Deserialize, Serialize};

use super::aggregate::{Quote, QuoteCalculation};
use super::proposal::ProposalDetails;
use crate::domain::foundation::Timestamp;

/// Column headers of the quote log, in order.
pub const QUOTE_LOG_HEADERS: [&str; 11] = [
    "Timestamp",
    "Proponente",
    "Contratante",
    "Tipo de Preço",
    "Preço Final",
    "Custo Base",
    "Margem Aplicada",
    "Total Horas",
    "Custo Trabalho",
    "Custo Operacional",
    "Slider Acréscimo",
];

/// A finalized quote as recorded in the log.
///
/// Field order matches [`QUOTE_LOG_HEADERS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLogEntry {
    pub timestamp: String,
    pub proposer: String,
    pub client: String,
    pub price_tier: String,
    pub final_price: f64,
    pub base_cost: f64,
    pub applied_margin: f64,
    pub total_hours: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
    pub surcharge: f64,
}

impl QuoteLogEntry {
    /// Builds the log row for a quote sent to a client.
    ///
    /// Multiplier quotes have no base cost or surcharge of their own: the
    /// base project value stands in for the base cost and the surcharge is 0.
    pub fn from_quote(quote: &Quote, details: &ProposalDetails, at: Timestamp) -> Self {
        let (base_cost, total_hours, labor_cost, overhead_cost, surcharge) =
            match quote.calculation() {
                QuoteCalculation::Margin { result } => (
                    result.base_cost,
                    result.total_hours,
                    result.labor_cost,
                    result.overhead_cost,
                    result.surcharge_applied,
                ),
                QuoteCalculation::Multiplier { result, .. } => (
                    result.base_project_value,
                    result.inputs.total_project_hours,
                    result.labor_value(),
                    result.inputs.overhead_cost,
                    0.0,
                ),
            };

        Self {
            timestamp: at.to_log_string(),
            proposer: details.proposer.clone(),
            client: details.client.clone(),
            price_tier: quote.selected_tier().label().to_string(),
            final_price: quote.selected_price(),
            base_cost,
            applied_margin: quote.applied_margin(),
            total_hours,
            labor_cost,
            overhead_cost,
            surcharge,
        }
    }
}
