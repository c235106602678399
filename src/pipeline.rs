//! Inventory reconciliation: dedup, resolve, fetch availability, rank.

use std::collections::HashSet;
use std::time::Duration;

use crate::api::Marketplace;
use crate::cache::ResponseCache;
use crate::config::PipelineSettings;
use crate::lookup::{fetch_availability, resolve_part};
use crate::models::{Availability, Condition, InventoryRow, PartIdentity, ResultRecord};
use crate::progress::Progress;
use crate::ranking::RankedResults;

/// Counters for one pipeline run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Rows with a description, i.e. rows that went through the loop
    pub rows: usize,
    /// Rows dropped for lacking a description
    pub blank: usize,
    /// Rows whose (description, color, condition) was already processed
    pub duplicates: usize,
    /// Unique rows the catalog could not resolve
    pub unresolved: usize,
    /// Records emitted
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    pub results: RankedResults,
    pub summary: RunSummary,
}

/// Sequential, throttled reconciliation of inventory rows against the
/// marketplace catalog and price guide.
pub struct Pipeline<M: Marketplace> {
    marketplace: M,
    throttle: Duration,
    cache: ResponseCache,
}

impl<M: Marketplace> Pipeline<M> {
    pub fn new(marketplace: M, settings: &PipelineSettings) -> Self {
        Self::with_throttle(marketplace, settings.throttle())
    }

    pub fn with_throttle(marketplace: M, throttle: Duration) -> Self {
        Self {
            marketplace,
            throttle,
            cache: ResponseCache::new(),
        }
    }

    pub fn marketplace(&self) -> &M {
        &self.marketplace
    }

    /// Process `rows` in order and return the ranked results.
    ///
    /// Remote failures never abort the run: unresolved rows are dropped and
    /// failed availability lookups yield `N/A` counts.
    pub fn run(&mut self, input: &[InventoryRow], progress: &mut dyn Progress) -> RunOutput {
        self.cache.clear();

        let rows: Vec<&InventoryRow> = input
            .iter()
            .filter(|row| !row.description.trim().is_empty())
            .collect();

        let mut summary = RunSummary {
            rows: rows.len(),
            blank: input.len() - rows.len(),
            ..RunSummary::default()
        };
        if summary.blank > 0 {
            log::info!("Ignoring {} rows without a description", summary.blank);
        }

        let mut seen = HashSet::new();
        let mut records = Vec::new();

        progress.begin(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            if !seen.insert(row.dedup_key()) {
                log::debug!("Skipping duplicate row {}: {}", row.source_index, row.description);
                summary.duplicates += 1;
            } else {
                match self.process(row) {
                    Some(record) => records.push(record),
                    None => summary.unresolved += 1,
                }
            }
            progress.item_done(idx + 1);
        }
        progress.finish();

        summary.records = records.len();
        log::info!(
            "Run complete: {} records ({} duplicates, {} unresolved)",
            summary.records,
            summary.duplicates,
            summary.unresolved
        );

        RunOutput {
            results: RankedResults::new(records),
            summary,
        }
    }

    fn process(&mut self, row: &InventoryRow) -> Option<ResultRecord> {
        let part = self.resolve(&row.description)?;
        let availability = self.availability(&part, row.condition);
        Some(ResultRecord::new(row, &part, availability))
    }

    fn resolve(&mut self, description: &str) -> Option<PartIdentity> {
        if let Some(cached) = self.cache.part(description) {
            log::debug!("Cache hit for '{}'", description);
            return cached.clone();
        }

        let part = resolve_part(&self.marketplace, description);
        self.pause();
        self.cache.insert_part(description, part.clone());
        part
    }

    fn availability(&mut self, part: &PartIdentity, condition: Condition) -> Availability {
        if let Some(cached) = self.cache.availability(part, condition) {
            log::debug!("Cache hit for {} {} ({})", part.item_type, part.number, condition.code());
            return cached;
        }

        let availability = fetch_availability(&self.marketplace, part, condition);
        self.pause();
        self.cache.insert_availability(part, condition, availability);
        availability
    }

    fn pause(&self) {
        if !self.throttle.is_zero() {
            std::thread::sleep(self.throttle);
        }
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
