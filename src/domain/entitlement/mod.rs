//! Content entitlement: price tiers and the fail-open tier catalog.
//!
//! Every published content item (profile, album, video) carries a tier
//! code. Lookups never fail: an unrecognized code resolves to the free
//! tier so a malformed or legacy record stays viewable.

mod catalog;
mod tier;

pub use catalog::{amount, free_tier, is_free, label, lookup_tier, tier_catalog, FREE_TIER_CODE};
pub use tier::{Currency, PriceTier};
