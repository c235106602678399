//! Catalog resolution and availability lookups.
//!
//! Both degrade to "not found" on any failure; the error is logged and
//! never surfaced to the caller.

use crate::api::{CatalogItem, Marketplace};
use crate::models::{Availability, Condition, PartIdentity};

/// Resolve a free-text description to the first catalog search result
pub fn resolve_part<M: Marketplace + ?Sized>(marketplace: &M, description: &str) -> Option<PartIdentity> {
    let items = match marketplace.search_items(description) {
        Ok(items) => items,
        Err(e) => {
            log::warn!("Catalog search failed for '{}': {}", description, e);
            return None;
        }
    };

    match items.into_iter().next() {
        Some(CatalogItem {
            no: Some(number),
            item_type: Some(item_type),
        }) if !number.is_empty() && !item_type.is_empty() => {
            log::debug!("Resolved '{}' to {} {}", description, item_type, number);
            Some(PartIdentity { number, item_type })
        }
        Some(_) => {
            log::warn!("First catalog match for '{}' has no number or type", description);
            None
        }
        None => {
            log::info!("No catalog match for '{}'", description);
            None
        }
    }
}

/// Fetch stock figures for one item/condition, both counts absent on failure
pub fn fetch_availability<M: Marketplace + ?Sized>(
    marketplace: &M,
    part: &PartIdentity,
    condition: Condition,
) -> Availability {
    match marketplace.stock_summary(part, condition) {
        Ok(summary) => Availability {
            total_quantity: Some(summary.total_quantity),
            total_lots: Some(summary.total_lots),
        },
        Err(e) => {
            log::warn!(
                "Price guide lookup failed for {} {} ({}): {}",
                part.item_type,
                part.number,
                condition.code(),
                e
            );
            Availability::unavailable()
        }
    }
}
