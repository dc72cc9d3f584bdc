//! Multiplier-based (rate-card) pricing engine.
//!
//! The catalog hourly rate is adjusted by service complexity, then
//! compounded by project hours, client size, team allocation and discount
//! into a base project value. Three fixed scenarios and one selected final
//! price are derived from it.

use serde::{Deserialize, Serialize};

use super::engine::{EngineKind, PricingEngine};
use super::policy::{
    MultiplierPolicy, SCENARIO_MULTIPLIERS, TEAM_INDEX_MAX, TEAM_INDEX_MIN, TEAM_INDEX_WEIGHT,
};
use super::tier::{PriceTier, TierValues};

/// Inputs of the rate-card engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    pub base_hourly_rate: f64,
    pub service_complexity_multiplier: f64,
    pub hours_per_day: f64,
    pub total_project_hours: f64,
    pub total_team_size: f64,
    pub allocated_team_size: f64,
    pub company_size_multiplier: f64,
    /// Discount on a 0-100 scale.
    pub reduction_percent: f64,
    pub overhead_cost: f64,
    pub price_type_multiplier: f64,
}

/// Everything the rate-card engine computes for one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub adjusted_hourly_rate: f64,
    pub project_days: f64,
    pub team_index: f64,
    pub reduction_multiplier: f64,
    pub base_project_value: f64,
    /// Base project value × {0.80, 1.00, 1.20}.
    pub scenarios: TierValues<f64>,
    pub final_price: f64,
    pub net_profit: f64,
    /// Net profit over final price on a 0-100 scale, 0 when the price is not positive.
    pub net_margin_percent: f64,
    pub inputs: PricingInputs,
}

impl PricingResult {
    pub fn scenario(&self, tier: PriceTier) -> f64 {
        *self.scenarios.get(tier)
    }

    /// Labor value before company size, team and discount adjustments.
    pub fn labor_value(&self) -> f64 {
        self.adjusted_hourly_rate * self.inputs.total_project_hours
    }
}

/// `clamp(1 + 0.15 × allocated / total, 1.00, 1.15)`.
///
/// A non-positive team total yields the neutral index 1.0. The result stays
/// inside the bounds for every input, NaN included.
pub fn team_index(allocated_team_size: f64, total_team_size: f64) -> f64 {
    let raw = if total_team_size > 0.0 {
        1.0 + TEAM_INDEX_WEIGHT * (allocated_team_size / total_team_size)
    } else {
        1.0
    };
    // f64::min/max discard NaN operands, unlike f64::clamp.
    TEAM_INDEX_MIN.max(TEAM_INDEX_MAX.min(raw))
}

/// Computes the rate-card project value, scenarios and profit.
pub fn compute_pricing(inputs: &PricingInputs) -> PricingResult {
    let adjusted_hourly_rate = inputs.base_hourly_rate * inputs.service_complexity_multiplier;

    let project_days = if inputs.hours_per_day > 0.0 {
        inputs.total_project_hours / inputs.hours_per_day
    } else {
        0.0
    };

    let team_index = team_index(inputs.allocated_team_size, inputs.total_team_size);
    let reduction_multiplier = 1.0 - inputs.reduction_percent / 100.0;

    let base_project_value = adjusted_hourly_rate
        * inputs.total_project_hours
        * inputs.company_size_multiplier
        * team_index
        * reduction_multiplier;

    let scenarios = SCENARIO_MULTIPLIERS.map(|multiplier| base_project_value * multiplier);
    let final_price = base_project_value * inputs.price_type_multiplier;
    let net_profit = final_price - inputs.overhead_cost;
    let net_margin_percent = if final_price > 0.0 {
        net_profit / final_price * 100.0
    } else {
        0.0
    };

    PricingResult {
        adjusted_hourly_rate,
        project_days,
        team_index,
        reduction_multiplier,
        base_project_value,
        scenarios,
        final_price,
        net_profit,
        net_margin_percent,
        inputs: *inputs,
    }
}

/// Rate-card strategy bound to its multiplier tables.
///
/// The tables are consulted when turning client size and price tier
/// selections into inputs; the computation itself only sees numbers.
#[derive(Debug, Clone, Default)]
pub struct MultiplierEngine {
    policy: MultiplierPolicy,
}

impl MultiplierEngine {
    pub fn new(policy: MultiplierPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MultiplierPolicy {
        &self.policy
    }
}

impl PricingEngine for MultiplierEngine {
    type Input = PricingInputs;
    type Output = PricingResult;

    fn kind(&self) -> EngineKind {
        EngineKind::Multiplier
    }

    fn compute(&self, input: &PricingInputs) -> PricingResult {
        compute_pricing(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn reference_inputs() -> PricingInputs {
        PricingInputs {
            base_hourly_rate: 50.0,
            service_complexity_multiplier: 1.0,
            hours_per_day: 1.0,
            total_project_hours: 30.0,
            total_team_size: 5.0,
            allocated_team_size: 3.0,
            company_size_multiplier: 1.0,
            reduction_percent: 50.0,
            overhead_cost: 0.0,
            price_type_multiplier: 1.2,
        }
    }

    #[test]
    fn reference_scenario_produces_expected_values() {
        let result = compute_pricing(&reference_inputs());

        assert_eq!(result.adjusted_hourly_rate, 50.0);
        assert!((result.team_index - 1.09).abs() < EPS);
        assert_eq!(result.reduction_multiplier, 0.5);
        assert!((result.base_project_value - 817.5).abs() < EPS);
        assert!((result.final_price - 981.0).abs() < EPS);
        assert!((result.net_margin_percent - 100.0).abs() < EPS);
        assert_eq!(result.project_days, 30.0);
    }

    #[test]
    fn scenarios_ignore_price_type() {
        let low = compute_pricing(&PricingInputs {
            price_type_multiplier: 0.8,
            ..reference_inputs()
        });
        let high = compute_pricing(&reference_inputs());

        assert_eq!(low.scenarios, high.scenarios);
        assert!((high.scenario(PriceTier::Minimum) - 654.0).abs() < EPS);
        assert!((high.scenario(PriceTier::Average) - 817.5).abs() < EPS);
        assert!((high.scenario(PriceTier::Negotiation) - 981.0).abs() < EPS);
        assert!(low.final_price < high.final_price);
    }

    #[test]
    fn overhead_reduces_profit_and_margin() {
        let result = compute_pricing(&PricingInputs {
            overhead_cost: 490.5,
            ..reference_inputs()
        });
        assert!((result.net_profit - 490.5).abs() < EPS);
        assert!((result.net_margin_percent - 50.0).abs() < EPS);
    }

    #[test]
    fn zero_hours_per_day_yields_zero_days() {
        let result = compute_pricing(&PricingInputs {
            hours_per_day: 0.0,
            ..reference_inputs()
        });
        assert_eq!(result.project_days, 0.0);
    }

    #[test]
    fn zero_final_price_yields_zero_margin() {
        let result = compute_pricing(&PricingInputs {
            reduction_percent: 100.0,
            overhead_cost: 100.0,
            ..reference_inputs()
        });
        assert_eq!(result.final_price, 0.0);
        assert_eq!(result.net_profit, -100.0);
        assert_eq!(result.net_margin_percent, 0.0);
    }

    #[test]
    fn team_index_clamps_to_bounds() {
        assert_eq!(team_index(0.0, 5.0), 1.0);
        assert_eq!(team_index(10.0, 5.0), 1.15);
        assert_eq!(team_index(5.0, 5.0), 1.15);
        assert_eq!(team_index(-5.0, 5.0), 1.0);
    }

    #[test]
    fn team_index_neutral_without_team() {
        assert_eq!(team_index(3.0, 0.0), 1.0);
        assert_eq!(team_index(3.0, -1.0), 1.0);
    }

    #[test]
    fn team_index_stays_bounded_for_nan() {
        let index = team_index(f64::NAN, 5.0);
        assert!((TEAM_INDEX_MIN..=TEAM_INDEX_MAX).contains(&index));
    }

    #[test]
    fn labor_value_is_rate_times_hours() {
        let result = compute_pricing(&PricingInputs {
            service_complexity_multiplier: 1.5,
            ..reference_inputs()
        });
        assert!((result.labor_value() - 75.0 * 30.0).abs() < EPS);
    }

    #[test]
    fn engine_computes_same_as_function() {
        let engine = MultiplierEngine::default();
        assert_eq!(engine.kind(), EngineKind::Multiplier);
        assert_eq!(engine.compute(&reference_inputs()), compute_pricing(&reference_inputs()));
    }

    proptest! {
        #[test]
        fn team_index_is_always_bounded(allocated in -1e9f64..1e9, total in -1e9f64..1e9) {
            let index = team_index(allocated, total);
            prop_assert!(index >= TEAM_INDEX_MIN && index <= TEAM_INDEX_MAX);
        }

        #[test]
        fn computation_is_idempotent(
            rate in 0.0f64..500.0,
            hours in 1.0f64..2_000.0,
            allocated in 1u32..30,
            total in 1u32..30,
            reduction in 0.0f64..=100.0,
        ) {
            let inputs = PricingInputs {
                base_hourly_rate: rate,
                total_project_hours: hours,
                allocated_team_size: f64::from(allocated),
                total_team_size: f64::from(total),
                reduction_percent: reduction,
                ..reference_inputs()
            };
            let first = compute_pricing(&inputs);
            let second = compute_pricing(&inputs);
            prop_assert_eq!(first.base_project_value.to_bits(), second.base_project_value.to_bits());
            prop_assert_eq!(first.final_price.to_bits(), second.final_price.to_bits());
            prop_assert_eq!(first.net_margin_percent.to_bits(), second.net_margin_percent.to_bits());
        }
    }
}
