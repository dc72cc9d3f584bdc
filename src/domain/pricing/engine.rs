//! The pricing engine capability shared by both formula strategies.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pure pricing strategy.
///
/// Implementations hold only immutable policy, never per-call state, so a
/// single engine can be shared across any number of concurrent callers.
///
/// # Contract
///
/// - `compute` is total and deterministic: identical inputs always yield
///   bit-identical outputs.
/// - `compute` performs no validation. Out-of-contract inputs produce
///   well-defined but meaningless numbers; callers run the explicit
///   `validate` pre-check on the input type first.
pub trait PricingEngine: Send + Sync {
    type Input;
    type Output;

    /// Which strategy this is.
    fn kind(&self) -> EngineKind;

    fn compute(&self, input: &Self::Input) -> Self::Output;
}

/// The two coexisting pricing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Cost-plus: base cost marked up per tier.
    Margin,
    /// Rate-card: hourly rate compounded by business multipliers.
    Multiplier,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Margin => write!(f, "margin"),
            EngineKind::Multiplier => write!(f, "multiplier"),
        }
    }
}
