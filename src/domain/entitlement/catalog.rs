//! The fixed, ordered tier catalog and fail-open lookups.
//!
//! Lookups deliberately never fail. Content records may carry codes that
//! predate the current catalog; resolving them to the free tier keeps the
//! record viewable instead of breaking rendering.

use once_cell::sync::Lazy;

use super::{Currency, PriceTier};

/// Code of the canonical free tier.
pub const FREE_TIER_CODE: &str = "free";

static CATALOG: Lazy<Vec<PriceTier>> = Lazy::new(|| {
    vec![
        PriceTier::free(FREE_TIER_CODE),
        PriceTier::paid("basic_eur", 990, Currency::Eur),
        PriceTier::paid("plus_eur", 1990, Currency::Eur),
        PriceTier::paid("basic_usd", 1190, Currency::Usd),
        PriceTier::paid("plus_usd", 2390, Currency::Usd),
        PriceTier::paid("basic_gbp", 890, Currency::Gbp),
    ]
});

/// Returns the full catalog in display order.
pub fn tier_catalog() -> &'static [PriceTier] {
    &CATALOG
}

/// Returns the canonical free tier.
pub fn free_tier() -> &'static PriceTier {
    // The free tier is always the first catalog entry.
    &CATALOG[0]
}

/// Resolves a tier code to its catalog entry.
///
/// Unknown codes fall open to the free tier: an unrecognized tier must
/// never block content display.
pub fn lookup_tier(code: &str) -> &'static PriceTier {
    CATALOG
        .iter()
        .find(|tier| tier.code == code)
        .unwrap_or_else(free_tier)
}

/// Returns the display label for a tier code, with the free-tier fallback.
pub fn label(code: &str) -> &'static str {
    &lookup_tier(code).label
}

/// Returns the amount in minor units for a tier code, with the free-tier
/// fallback.
pub fn amount(code: &str) -> u32 {
    lookup_tier(code).amount
}

/// Returns true if the tier code resolves to a free tier.
pub fn is_free(code: &str) -> bool {
    amount(code) == 0
}
