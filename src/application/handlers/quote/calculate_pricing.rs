//! CalculatePricingHandler - Prices a catalog service with the rate-card engine.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::catalog::ServiceCatalog;
use crate::domain::foundation::{InputErrors, ValidationError};
use crate::domain::pricing::{
    CompanySize, MultiplierEngine, PriceTier, PricingEngine, PricingInputs,
};
use crate::domain::quote::{Quote, QuoteCalculation};
use crate::ports::QuoteStore;

use super::calculate_budget::CalculateQuoteResult;
use super::errors::CalculateQuoteError;

/// Command to price a catalog service with the rate-card engine.
#[derive(Debug, Clone)]
pub struct CalculatePricingCommand {
    pub area: String,
    pub service: String,
    pub hours_per_day: f64,
    pub total_project_hours: f64,
    pub total_team_size: f64,
    pub allocated_team_size: f64,
    pub company_size: CompanySize,
    /// Discount on a 0-100 scale.
    pub reduction_percent: f64,
    pub overhead_cost: f64,
    pub price_tier: PriceTier,
}

/// Handler for rate-card calculations.
///
/// # Dependencies
///
/// - `ServiceCatalog`: base hourly rate and complexity multiplier
/// - `MultiplierEngine`: company size and price type multipliers, computation
/// - `QuoteStore`: keeps the quote for document generation
pub struct CalculatePricingHandler {
    catalog: Arc<ServiceCatalog>,
    engine: MultiplierEngine,
    quote_store: Arc<dyn QuoteStore>,
}

impl CalculatePricingHandler {
    pub fn new(
        catalog: Arc<ServiceCatalog>,
        engine: MultiplierEngine,
        quote_store: Arc<dyn QuoteStore>,
    ) -> Self {
        Self {
            catalog,
            engine,
            quote_store,
        }
    }

    pub async fn handle(
        &self,
        cmd: CalculatePricingCommand,
    ) -> Result<CalculateQuoteResult, CalculateQuoteError> {
        let params = self
            .catalog
            .pricing_params(&cmd.area, &cmd.service)
            .ok_or_else(|| {
                warn!(area = %cmd.area, service = %cmd.service, "Unknown catalog entry");
                InputErrors::from(ValidationError::constraint(
                    "service",
                    format!(
                        "Serviço '{}' não encontrado na área '{}'.",
                        cmd.service, cmd.area
                    ),
                ))
            })?;

        let policy = self.engine.policy();
        let inputs = PricingInputs {
            base_hourly_rate: params.base_hourly_rate,
            service_complexity_multiplier: params.complexity_multiplier,
            hours_per_day: cmd.hours_per_day,
            total_project_hours: cmd.total_project_hours,
            total_team_size: cmd.total_team_size,
            allocated_team_size: cmd.allocated_team_size,
            company_size_multiplier: policy.company_size_multiplier(cmd.company_size),
            reduction_percent: cmd.reduction_percent,
            overhead_cost: cmd.overhead_cost,
            price_type_multiplier: policy.price_type_multiplier(cmd.price_tier),
        };

        if let Err(errors) = inputs.validate() {
            warn!(errors = %errors, "Pricing inputs rejected");
            return Err(errors.into());
        }

        let result = self.engine.compute(&inputs);
        let quote = Quote::new(
            QuoteCalculation::Multiplier {
                area: cmd.area,
                service: cmd.service,
                company_size: cmd.company_size,
                result,
            },
            cmd.price_tier,
        );
        self.quote_store.save(&quote).await?;

        info!(
            quote_id = %quote.id(),
            engine = %self.engine.kind(),
            tier = quote.selected_tier().key(),
            base_project_value = result.base_project_value,
            price = quote.selected_price(),
            "Pricing calculated"
        );

        Ok(CalculateQuoteResult {
            quote,
            warnings: Vec::new(),
        })
    }
}
