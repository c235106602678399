//! Marks the scarcest ranked parts as featured in the user's store.

use crate::api::Marketplace;
use crate::models::{ResultRecord, StoreLot};
use crate::ranking::RankedResults;

/// Outcome of one featuring pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FeatureReport {
    /// Ranked records looked at (at most the limit)
    pub considered: usize,
    /// Records for which a store lot was found
    pub matched: usize,
    /// Lots whose update call succeeded
    pub updated: usize,
}

/// First store lot with the record's item number and condition
pub fn find_lot<'a>(inventory: &'a [StoreLot], record: &ResultRecord) -> Option<&'a StoreLot> {
    inventory
        .iter()
        .find(|lot| lot.item_number == record.part_number && lot.condition == record.condition)
}

/// Feature the store lots matching the `limit` scarcest results.
///
/// The store inventory is fetched once. Each record updates at most one lot
/// (the first match). Failed updates are logged and not counted; nothing is
/// rolled back. If the inventory cannot be fetched no lot is updated.
pub fn feature_scarcest<M: Marketplace + ?Sized>(
    marketplace: &M,
    results: &RankedResults,
    limit: usize,
) -> FeatureReport {
    let candidates = results.top(limit);
    let mut report = FeatureReport {
        considered: candidates.len(),
        ..FeatureReport::default()
    };

    if candidates.is_empty() {
        log::info!("No ranked parts to feature");
        return report;
    }

    let inventory = match marketplace.store_inventory() {
        Ok(inventory) => inventory,
        Err(e) => {
            log::warn!("Failed to fetch store inventory: {}", e);
            return report;
        }
    };

    for record in candidates {
        let Some(lot) = find_lot(&inventory, record) else {
            log::debug!(
                "No store lot for {} ({})",
                record.part_number,
                record.condition.code()
            );
            continue;
        };
        report.matched += 1;

        match marketplace.mark_featured(lot.inventory_id) {
            Ok(()) => {
                log::info!(
                    "Featured lot {} ({} {})",
                    lot.inventory_id,
                    record.part_number,
                    record.condition
                );
                report.updated += 1;
            }
            Err(e) => log::warn!("Failed to feature lot {}: {}", lot.inventory_id, e),
        }
    }

    log::info!(
        "Featured {} of {} scarcest parts ({} had a matching lot)",
        report.updated,
        report.considered,
        report.matched
    );
    report
}
