//! Pricing policy configuration

use serde::Deserialize;

use crate::domain::pricing::{CompanySizeMultipliers, MarginPolicy, MultiplierPolicy, TierValues};

use super::error::ValidationError;

/// Margin rates and multiplier tables used by both engines.
///
/// Every field defaults to the standard business values, so only the
/// overridden ones need to be set (e.g. `CONSILIUS__PRICING__AVERAGE_MARGIN=0.12`).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PricingConfig {
    #[serde(default = "default_minimum_margin")]
    pub minimum_margin: f64,

    #[serde(default = "default_average_margin")]
    pub average_margin: f64,

    #[serde(default = "default_negotiation_margin")]
    pub negotiation_margin: f64,

    /// Lower bound of the negotiation surcharge slider
    #[serde(default = "default_surcharge_min")]
    pub surcharge_min: f64,

    /// Upper bound of the negotiation surcharge slider
    #[serde(default = "default_surcharge_max")]
    pub surcharge_max: f64,

    #[serde(default = "default_small_company_multiplier")]
    pub small_company_multiplier: f64,

    #[serde(default = "default_medium_company_multiplier")]
    pub medium_company_multiplier: f64,

    #[serde(default = "default_large_company_multiplier")]
    pub large_company_multiplier: f64,

    #[serde(default = "default_minimum_price_multiplier")]
    pub minimum_price_multiplier: f64,

    #[serde(default = "default_average_price_multiplier")]
    pub average_price_multiplier: f64,

    #[serde(default = "default_negotiation_price_multiplier")]
    pub negotiation_price_multiplier: f64,
}

impl PricingConfig {
    /// Policy for the cost-plus engine
    pub fn margin_policy(&self) -> MarginPolicy {
        MarginPolicy {
            margins: TierValues::new(
                self.minimum_margin,
                self.average_margin,
                self.negotiation_margin,
            ),
            surcharge_min: self.surcharge_min,
            surcharge_max: self.surcharge_max,
        }
    }

    /// Policy for the rate-card engine
    pub fn multiplier_policy(&self) -> MultiplierPolicy {
        MultiplierPolicy {
            company_size: CompanySizeMultipliers {
                small: self.small_company_multiplier,
                medium: self.medium_company_multiplier,
                large: self.large_company_multiplier,
            },
            price_type: TierValues::new(
                self.minimum_price_multiplier,
                self.average_price_multiplier,
                self.negotiation_price_multiplier,
            ),
        }
    }

    /// Validate pricing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let margins = [
            ("minimum_margin", self.minimum_margin),
            ("average_margin", self.average_margin),
            ("negotiation_margin", self.negotiation_margin),
        ];
        for (name, value) in margins {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidMargin(name));
            }
        }

        let bounds_ok = self.surcharge_min.is_finite()
            && self.surcharge_max.is_finite()
            && self.surcharge_min >= 0.0
            && self.surcharge_min <= self.surcharge_max;
        if !bounds_ok {
            return Err(ValidationError::InvalidSurchargeBounds);
        }

        let multipliers = [
            ("small_company_multiplier", self.small_company_multiplier),
            ("medium_company_multiplier", self.medium_company_multiplier),
            ("large_company_multiplier", self.large_company_multiplier),
            ("minimum_price_multiplier", self.minimum_price_multiplier),
            ("average_price_multiplier", self.average_price_multiplier),
            ("negotiation_price_multiplier", self.negotiation_price_multiplier),
        ];
        for (name, value) in multipliers {
            if !value.is_finite() || value <= 0.0 {
                return Err(ValidationError::InvalidMultiplier(name));
            }
        }
        Ok(())
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            minimum_margin: default_minimum_margin(),
            average_margin: default_average_margin(),
            negotiation_margin: default_negotiation_margin(),
            surcharge_min: default_surcharge_min(),
            surcharge_max: default_surcharge_max(),
            small_company_multiplier: default_small_company_multiplier(),
            medium_company_multiplier: default_medium_company_multiplier(),
            large_company_multiplier: default_large_company_multiplier(),
            minimum_price_multiplier: default_minimum_price_multiplier(),
            average_price_multiplier: default_average_price_multiplier(),
            negotiation_price_multiplier: default_negotiation_price_multiplier(),
        }
    }
}

fn default_minimum_margin() -> f64 {
    0.00
}

fn default_average_margin() -> f64 {
    0.10
}

fn default_negotiation_margin() -> f64 {
    0.15
}

fn default_surcharge_min() -> f64 {
    0.0
}

fn default_surcharge_max() -> f64 {
    0.15
}

fn default_small_company_multiplier() -> f64 {
    1.0
}

fn default_medium_company_multiplier() -> f64 {
    1.1
}

fn default_large_company_multiplier() -> f64 {
    1.2
}

fn default_minimum_price_multiplier() -> f64 {
    0.8
}

fn default_average_price_multiplier() -> f64 {
    1.0
}

fn default_negotiation_price_multiplier() -> f64 {
    1.2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_domain_policies() {
        let config = PricingConfig::default();
        assert_eq!(config.margin_policy(), MarginPolicy::default());
        assert_eq!(config.multiplier_policy(), MultiplierPolicy::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn overrides_flow_into_policies() {
        let config = PricingConfig {
            average_margin: 0.12,
            large_company_multiplier: 1.3,
            ..Default::default()
        };
        assert_eq!(config.margin_policy().margins.average, 0.12);
        assert_eq!(config.multiplier_policy().company_size.large, 1.3);
    }

    #[test]
    fn negative_margin_is_rejected() {
        let config = PricingConfig {
            negotiation_margin: -0.1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidMargin("negotiation_margin"))
        );
    }

    #[test]
    fn inverted_surcharge_bounds_are_rejected() {
        let config = PricingConfig {
            surcharge_min: 0.2,
            surcharge_max: 0.1,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSurchargeBounds));
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        let config = PricingConfig {
            medium_company_multiplier: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidMultiplier("medium_company_multiplier"))
        );
    }
}
