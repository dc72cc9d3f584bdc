//! A calculated quote held transiently between calculation and documents.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{QuoteId, Timestamp};
use crate::domain::pricing::{BudgetResult, CompanySize, EngineKind, PriceTier, PricingResult};

/// The engine output a quote was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "engine", rename_all = "snake_case")]
pub enum QuoteCalculation {
    Margin {
        result: BudgetResult,
    },
    Multiplier {
        area: String,
        service: String,
        company_size: CompanySize,
        result: PricingResult,
    },
}

impl QuoteCalculation {
    pub fn engine(&self) -> EngineKind {
        match self {
            QuoteCalculation::Margin { .. } => EngineKind::Margin,
            QuoteCalculation::Multiplier { .. } => EngineKind::Multiplier,
        }
    }
}

/// One calculation plus the price tier the proposer selected.
///
/// Quotes have no lifecycle: a re-calculation produces a new quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    id: QuoteId,
    created_at: Timestamp,
    selected_tier: PriceTier,
    calculation: QuoteCalculation,
}

impl Quote {
    pub fn new(calculation: QuoteCalculation, selected_tier: PriceTier) -> Self {
        Self {
            id: QuoteId::new(),
            created_at: Timestamp::now(),
            selected_tier,
            calculation,
        }
    }

    pub fn id(&self) -> QuoteId {
        self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn selected_tier(&self) -> PriceTier {
        self.selected_tier
    }

    pub fn calculation(&self) -> &QuoteCalculation {
        &self.calculation
    }

    /// The price offered to the client.
    ///
    /// Margin quotes use the selected tier's price; multiplier quotes use the
    /// final price, which already carries the selected price type.
    pub fn selected_price(&self) -> f64 {
        match &self.calculation {
            QuoteCalculation::Margin { result } => result.price(self.selected_tier),
            QuoteCalculation::Multiplier { result, .. } => result.final_price,
        }
    }

    /// Net margin of the selected price as a ratio (0.25 = 25%).
    pub fn applied_margin(&self) -> f64 {
        match &self.calculation {
            QuoteCalculation::Margin { result } => result.net_margin(self.selected_tier),
            QuoteCalculation::Multiplier { result, .. } => result.net_margin_percent / 100.0,
        }
    }
}
