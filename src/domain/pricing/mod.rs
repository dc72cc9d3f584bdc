//! Pricing Module - Pure pricing engines.
//!
//! Two coexisting strategies turn project inputs into tiered prices:
//!
//! - `MarginEngine` - cost-plus: base cost marked up per tier
//! - `MultiplierEngine` - rate-card: hourly rate compounded by multipliers
//!
//! Both implement `PricingEngine`, are stateless, and take their policy
//! (margin rates, multiplier tables) as immutable configuration. Input
//! validation is a separate explicit step (`BudgetInputs::validate`,
//! `PricingInputs::validate`).

mod engine;
mod margin;
mod multiplier;
mod policy;
mod tier;
mod validation;

pub use engine::{EngineKind, PricingEngine};
pub use margin::{compute_budget, BudgetInputs, BudgetResult, MarginEngine};
pub use multiplier::{compute_pricing, team_index, MultiplierEngine, PricingInputs, PricingResult};
pub use policy::{
    CompanySize, CompanySizeMultipliers, MarginPolicy, MultiplierPolicy, SCENARIO_MULTIPLIERS,
    TEAM_INDEX_MAX, TEAM_INDEX_MIN, TEAM_INDEX_WEIGHT,
};
pub use tier::{normalize_price_label, PriceTier, TierValues};
