//! Immutable pricing policies passed to the engines at call time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::tier::{fold_label, PriceTier, TierValues};
use crate::domain::foundation::ValidationError;

/// Weight of the allocation ratio in the team index.
pub const TEAM_INDEX_WEIGHT: f64 = 0.15;

/// Lower clamp bound of the team index.
pub const TEAM_INDEX_MIN: f64 = 1.00;

/// Upper clamp bound of the team index.
pub const TEAM_INDEX_MAX: f64 = 1.15;

/// Scenario multipliers applied to the base project value.
///
/// Fixed business rule, independent of the price type chosen for the
/// final price.
pub const SCENARIO_MULTIPLIERS: TierValues<f64> = TierValues::new(0.80, 1.00, 1.20);

/// Margin rates for the cost-plus engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginPolicy {
    /// Markup over base cost per tier (0.10 = 10%).
    pub margins: TierValues<f64>,
    /// Smallest surcharge accepted on top of the negotiation margin.
    pub surcharge_min: f64,
    /// Largest surcharge accepted on top of the negotiation margin.
    pub surcharge_max: f64,
}

impl MarginPolicy {
    /// Effective margin rate of a tier; negotiation also carries the surcharge.
    pub fn margin_rate(&self, tier: PriceTier, surcharge: f64) -> f64 {
        match tier {
            PriceTier::Negotiation => self.margins.negotiation + surcharge,
            other => *self.margins.get(other),
        }
    }
}

impl Default for MarginPolicy {
    fn default() -> Self {
        Self {
            margins: TierValues::new(0.00, 0.10, 0.15),
            surcharge_min: 0.0,
            surcharge_max: 0.15,
        }
    }
}

/// Size of the client company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    #[default]
    Small,
    Medium,
    Large,
}

impl CompanySize {
    pub const ALL: [CompanySize; 3] = [CompanySize::Small, CompanySize::Medium, CompanySize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            CompanySize::Small => "Pequena",
            CompanySize::Medium => "Média",
            CompanySize::Large => "Grande",
        }
    }
}

impl fmt::Display for CompanySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CompanySize {
    type Err = ValidationError;

    /// Accepts the English keys and the Portuguese labels, accents optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_label(s.trim()).as_str() {
            "small" | "pequena" => Ok(CompanySize::Small),
            "medium" | "media" => Ok(CompanySize::Medium),
            "large" | "grande" => Ok(CompanySize::Large),
            _ => Err(ValidationError::constraint(
                "company_size",
                format!("Porte de empresa desconhecido: '{}'.", s),
            )),
        }
    }
}

/// Multiplier per client company size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompanySizeMultipliers {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl CompanySizeMultipliers {
    pub fn get(&self, size: CompanySize) -> f64 {
        match size {
            CompanySize::Small => self.small,
            CompanySize::Medium => self.medium,
            CompanySize::Large => self.large,
        }
    }
}

impl Default for CompanySizeMultipliers {
    fn default() -> Self {
        Self {
            small: 1.0,
            medium: 1.1,
            large: 1.2,
        }
    }
}

/// Multiplier tables for the rate-card engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierPolicy {
    pub company_size: CompanySizeMultipliers,
    /// Multiplier turning the base project value into the final price.
    pub price_type: TierValues<f64>,
}

impl MultiplierPolicy {
    pub fn company_size_multiplier(&self, size: CompanySize) -> f64 {
        self.company_size.get(size)
    }

    pub fn price_type_multiplier(&self, tier: PriceTier) -> f64 {
        *self.price_type.get(tier)
    }
}

impl Default for MultiplierPolicy {
    fn default() -> Self {
        Self {
            company_size: CompanySizeMultipliers::default(),
            price_type: TierValues::new(0.8, 1.0, 1.2),
        }
    }
}
