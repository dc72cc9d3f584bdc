//! Margin-based (cost-plus) pricing engine.
//!
//! hours × days × people → labor cost → base cost (labor + overhead) →
//! one price per tier, each marked up by the tier's margin rate.

use serde::{Deserialize, Serialize};

use super::engine::{EngineKind, PricingEngine};
use super::policy::MarginPolicy;
use super::tier::{PriceTier, TierValues};

/// Operational inputs of the cost-plus engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetInputs {
    pub hours_per_day: f64,
    pub work_days: f64,
    pub people_count: f64,
    pub hourly_rate: f64,
    #[serde(default)]
    pub overhead_cost: f64,
    /// Extra negotiation markup as a fraction (0.05 = 5%).
    #[serde(default)]
    pub surcharge_percent: f64,
}

/// Everything the cost-plus engine computes for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BudgetResult {
    pub total_hours: f64,
    pub labor_cost: f64,
    pub overhead_cost: f64,
    pub base_cost: f64,
    pub surcharge_applied: f64,
    pub prices: TierValues<f64>,
    /// Absolute markup over base cost.
    pub markups: TierValues<f64>,
    /// `(price - base_cost) / price`, 0 when the price is not positive.
    pub net_margins: TierValues<f64>,
    /// Base cost per worked hour, 0 when no hours are worked.
    pub effective_hourly_cost: f64,
    pub inputs: BudgetInputs,
}

impl BudgetResult {
    pub fn price(&self, tier: PriceTier) -> f64 {
        *self.prices.get(tier)
    }

    pub fn net_margin(&self, tier: PriceTier) -> f64 {
        *self.net_margins.get(tier)
    }
}

/// Computes the three cost-plus prices.
///
/// Divide-by-zero cases (zero price, zero hours) silently yield 0.
pub fn compute_budget(policy: &MarginPolicy, inputs: &BudgetInputs) -> BudgetResult {
    let total_hours = inputs.hours_per_day * inputs.work_days * inputs.people_count;
    let labor_cost = total_hours * inputs.hourly_rate;
    let base_cost = labor_cost + inputs.overhead_cost;

    let prices = TierValues::from_fn(|tier| {
        base_cost * (1.0 + policy.margin_rate(tier, inputs.surcharge_percent))
    });
    let markups = prices.map(|price| price - base_cost);
    let net_margins = TierValues::from_fn(|tier| {
        let price = *prices.get(tier);
        if price > 0.0 {
            *markups.get(tier) / price
        } else {
            0.0
        }
    });

    let effective_hourly_cost = if total_hours > 0.0 {
        base_cost / total_hours
    } else {
        0.0
    };

    BudgetResult {
        total_hours,
        labor_cost,
        overhead_cost: inputs.overhead_cost,
        base_cost,
        surcharge_applied: inputs.surcharge_percent,
        prices,
        markups,
        net_margins,
        effective_hourly_cost,
        inputs: *inputs,
    }
}

/// Cost-plus strategy bound to a margin policy.
#[derive(Debug, Clone, Default)]
pub struct MarginEngine {
    policy: MarginPolicy,
}

impl MarginEngine {
    pub fn new(policy: MarginPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MarginPolicy {
        &self.policy
    }
}

impl PricingEngine for MarginEngine {
    type Input = BudgetInputs;
    type Output = BudgetResult;

    fn kind(&self) -> EngineKind {
        EngineKind::Margin
    }

    fn compute(&self, input: &BudgetInputs) -> BudgetResult {
        compute_budget(&self.policy, input)
    }
}
