//! Price tiers and per-tier value tables.

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// One of the three scenario prices offered to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    Minimum,
    Average,
    #[default]
    Negotiation,
}

impl PriceTier {
    /// All tiers in ascending price order.
    pub const ALL: [PriceTier; 3] = [PriceTier::Minimum, PriceTier::Average, PriceTier::Negotiation];

    /// Canonical label shown in forms and documents.
    pub fn label(&self) -> &'static str {
        match self {
            PriceTier::Minimum => "Preço mínimo",
            PriceTier::Average => "Preço médio",
            PriceTier::Negotiation => "Preço de negociação",
        }
    }

    /// Short label used in result tables.
    pub fn short_label(&self) -> &'static str {
        match self {
            PriceTier::Minimum => "Mínimo",
            PriceTier::Average => "Médio",
            PriceTier::Negotiation => "Negociação",
        }
    }

    /// Stable machine key.
    pub fn key(&self) -> &'static str {
        match self {
            PriceTier::Minimum => "minimum",
            PriceTier::Average => "average",
            PriceTier::Negotiation => "negotiation",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Maps a free-form, possibly accented label to a tier.
///
/// The label is accent-stripped and lowercased, then matched by substring:
/// `"minim"` is the minimum tier, `"medi"` the average tier, and anything
/// else falls back to negotiation.
pub fn normalize_price_label(text: &str) -> PriceTier {
    let folded = fold_label(text);
    if folded.contains("minim") {
        PriceTier::Minimum
    } else if folded.contains("medi") {
        PriceTier::Average
    } else {
        PriceTier::Negotiation
    }
}

/// Lowercases and strips diacritics (`"Média"` -> `"media"`).
pub(crate) fn fold_label(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// One value per price tier.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TierValues<T> {
    pub minimum: T,
    pub average: T,
    pub negotiation: T,
}

impl<T> TierValues<T> {
    pub const fn new(minimum: T, average: T, negotiation: T) -> Self {
        Self {
            minimum,
            average,
            negotiation,
        }
    }

    /// Builds a table by evaluating `f` once per tier.
    pub fn from_fn(mut f: impl FnMut(PriceTier) -> T) -> Self {
        Self {
            minimum: f(PriceTier::Minimum),
            average: f(PriceTier::Average),
            negotiation: f(PriceTier::Negotiation),
        }
    }

    pub fn get(&self, tier: PriceTier) -> &T {
        match tier {
            PriceTier::Minimum => &self.minimum,
            PriceTier::Average => &self.average,
            PriceTier::Negotiation => &self.negotiation,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> TierValues<U> {
        TierValues {
            minimum: f(&self.minimum),
            average: f(&self.average),
            negotiation: f(&self.negotiation),
        }
    }
}
