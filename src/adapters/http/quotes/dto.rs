//! Data Transfer Objects for quote HTTP endpoints.
//!
//! Request bodies keep the shape of the calculator forms: price types and
//! company sizes arrive as the labels a user picked, and are resolved here.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{CalculateBudgetCommand, CalculatePricingCommand};
use crate::domain::foundation::{format_currency, format_percent, ErrorCode, Timestamp};
use crate::domain::pricing::{normalize_price_label, CompanySize, EngineKind, PriceTier, TierValues};
use crate::domain::quote::{ProposalDetails, Quote, QuoteCalculation};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for the cost-plus calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetRequest {
    pub hours_per_day: f64,
    pub work_days: f64,
    pub people_count: f64,
    pub hourly_rate: f64,
    /// Left out or null when the proposer did not fill it in.
    #[serde(default)]
    pub overhead_cost: Option<f64>,
    #[serde(default)]
    pub surcharge_percent: f64,
    /// Free-text price type, e.g. "Preço Médio".
    #[serde(default)]
    pub price_type: Option<String>,
}

impl BudgetRequest {
    pub fn into_command(self) -> CalculateBudgetCommand {
        CalculateBudgetCommand {
            hours_per_day: self.hours_per_day,
            work_days: self.work_days,
            people_count: self.people_count,
            hourly_rate: self.hourly_rate,
            overhead_cost: self.overhead_cost,
            surcharge_percent: self.surcharge_percent,
            price_tier: resolve_tier(self.price_type.as_deref()),
        }
    }
}

/// Request body for the rate-card calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingRequest {
    pub area: String,
    pub service: String,
    pub hours_per_day: f64,
    pub total_project_hours: f64,
    pub total_team_size: f64,
    pub allocated_team_size: f64,
    /// "Pequena", "Média", "Grande" or the English keys.
    pub company_size: String,
    #[serde(default)]
    pub reduction_percent: f64,
    #[serde(default)]
    pub overhead_cost: f64,
    #[serde(default)]
    pub price_type: Option<String>,
}

impl PricingRequest {
    pub fn into_command(self, company_size: CompanySize) -> CalculatePricingCommand {
        CalculatePricingCommand {
            area: self.area,
            service: self.service,
            hours_per_day: self.hours_per_day,
            total_project_hours: self.total_project_hours,
            total_team_size: self.total_team_size,
            allocated_team_size: self.allocated_team_size,
            company_size,
            reduction_percent: self.reduction_percent,
            overhead_cost: self.overhead_cost,
            price_tier: resolve_tier(self.price_type.as_deref()),
        }
    }
}

/// Request body for both document endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentRequest {
    #[serde(flatten)]
    pub details: ProposalDetails,
    /// "pdf" (default), "html" or "markdown".
    #[serde(default)]
    pub format: Option<String>,
}

fn resolve_tier(label: Option<&str>) -> PriceTier {
    label.map(normalize_price_label).unwrap_or_default()
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// A calculated quote as shown in the calculator.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteView {
    pub quote_id: String,
    pub engine: EngineKind,
    pub created_at: Timestamp,
    pub selected_tier: PriceTier,
    pub selected_tier_label: String,
    pub selected_price: f64,
    /// e.g. "R$ 1.234,50"
    pub selected_price_formatted: String,
    /// e.g. "25.0%"
    pub applied_margin_formatted: String,
    /// Every tier price, formatted.
    pub prices_formatted: TierValues<String>,
    pub calculation: QuoteCalculation,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl QuoteView {
    pub fn new(quote: &Quote, warnings: Vec<String>) -> Self {
        let prices = match quote.calculation() {
            QuoteCalculation::Margin { result } => result.prices,
            QuoteCalculation::Multiplier { result, .. } => result.scenarios,
        };

        Self {
            quote_id: quote.id().to_string(),
            engine: quote.calculation().engine(),
            created_at: quote.created_at(),
            selected_tier: quote.selected_tier(),
            selected_tier_label: quote.selected_tier().label().to_string(),
            selected_price: quote.selected_price(),
            selected_price_formatted: format_currency(quote.selected_price()),
            applied_margin_formatted: format_percent(quote.applied_margin()),
            prices_formatted: prices.map(|price| format_currency(*price)),
            calculation: quote.calculation().clone(),
            warnings,
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
