//! Price tier definitions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency of a paid tier, inferred from the tier code suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Eur,
    Usd,
    Gbp,
}

impl Currency {
    /// Returns the display symbol for this currency.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Eur => "€",
            Currency::Usd => "$",
            Currency::Gbp => "£",
        }
    }

    /// Formats an amount in minor units (cents/pence) as a display string.
    pub fn format_amount(&self, amount: u32) -> String {
        format!("{}{}.{:02}", self.symbol(), amount / 100, amount % 100)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Eur => write!(f, "EUR"),
            Currency::Usd => write!(f, "USD"),
            Currency::Gbp => write!(f, "GBP"),
        }
    }
}

/// A catalog entry: a named price classification attached to content.
///
/// The `code` is the unique key stored on content records. `amount` is in
/// minor units; exactly one catalog entry has `amount == 0` (the canonical
/// free tier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    /// Unique key used on content records.
    pub code: String,

    /// Human-readable label, e.g. "€9.90".
    pub label: String,

    /// Price in minor units (cents/pence). Zero means free.
    pub amount: u32,

    /// Currency inferred from the code suffix.
    pub currency: Currency,
}

impl PriceTier {
    /// Creates a free tier entry.
    pub(crate) fn free(code: &str) -> Self {
        Self {
            code: code.to_string(),
            label: "Free".to_string(),
            amount: 0,
            currency: Currency::Eur,
        }
    }

    /// Creates a paid tier entry with a label derived from the amount.
    pub(crate) fn paid(code: &str, amount: u32, currency: Currency) -> Self {
        Self {
            code: code.to_string(),
            label: currency.format_amount(amount),
            amount,
            currency,
        }
    }

    /// Returns true if this tier carries no price.
    pub fn is_free(&self) -> bool {
        self.amount == 0
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.label)
    }
}
