//! CalculateBudgetHandler - Runs the cost-plus engine and keeps the quote.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::pricing::{BudgetInputs, MarginEngine, PriceTier, PricingEngine};
use crate::domain::quote::{Quote, QuoteCalculation, MISSING_OVERHEAD_WARNING};
use crate::ports::QuoteStore;

use super::errors::CalculateQuoteError;

/// Command to price a project with the cost-plus engine.
#[derive(Debug, Clone)]
pub struct CalculateBudgetCommand {
    pub hours_per_day: f64,
    pub work_days: f64,
    pub people_count: f64,
    pub hourly_rate: f64,
    /// `None` when the proposer left the field blank.
    pub overhead_cost: Option<f64>,
    pub surcharge_percent: f64,
    pub price_tier: PriceTier,
}

/// A stored quote plus non-blocking notices about its inputs.
#[derive(Debug, Clone)]
pub struct CalculateQuoteResult {
    pub quote: Quote,
    pub warnings: Vec<String>,
}

/// Handler for cost-plus calculations.
///
/// # Dependencies
///
/// - `MarginEngine`: computes the three tier prices
/// - `QuoteStore`: keeps the quote for document generation
pub struct CalculateBudgetHandler {
    engine: MarginEngine,
    quote_store: Arc<dyn QuoteStore>,
}

impl CalculateBudgetHandler {
    pub fn new(engine: MarginEngine, quote_store: Arc<dyn QuoteStore>) -> Self {
        Self {
            engine,
            quote_store,
        }
    }

    pub async fn handle(
        &self,
        cmd: CalculateBudgetCommand,
    ) -> Result<CalculateQuoteResult, CalculateQuoteError> {
        let mut warnings = Vec::new();
        let overhead_cost = match cmd.overhead_cost {
            Some(cost) if cost != 0.0 => cost,
            _ => {
                warnings.push(MISSING_OVERHEAD_WARNING.to_string());
                0.0
            }
        };

        let inputs = BudgetInputs {
            hours_per_day: cmd.hours_per_day,
            work_days: cmd.work_days,
            people_count: cmd.people_count,
            hourly_rate: cmd.hourly_rate,
            overhead_cost,
            surcharge_percent: cmd.surcharge_percent,
        };

        if let Err(errors) = inputs.validate(self.engine.policy()) {
            warn!(errors = %errors, "Budget inputs rejected");
            return Err(errors.into());
        }

        let result = self.engine.compute(&inputs);
        let quote = Quote::new(QuoteCalculation::Margin { result }, cmd.price_tier);
        self.quote_store.save(&quote).await?;

        info!(
            quote_id = %quote.id(),
            engine = %self.engine.kind(),
            tier = quote.selected_tier().key(),
            base_cost = result.base_cost,
            price = quote.selected_price(),
            "Budget calculated"
        );

        Ok(CalculateQuoteResult { quote, warnings })
    }
}
