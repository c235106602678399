//! In-memory marketplace used by unit tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use reqwest::StatusCode;

use crate::api::{CatalogItem, Marketplace, StockSummary};
use crate::error::{ApiError, ApiResult};
use crate::models::{Condition, PartIdentity, StoreLot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    Search(String),
    Stock(String, Condition),
    Inventory,
    Feature(u64),
}

/// Answers from canned data and records every call.
///
/// Unknown descriptions yield an empty search result; unknown stock lookups
/// and anything marked as failing return an HTTP 500 error.
#[derive(Default)]
pub(crate) struct FakeMarketplace {
    catalog: HashMap<String, Option<Vec<CatalogItem>>>,
    stock: HashMap<(String, Condition), StockSummary>,
    inventory: Option<Vec<StoreLot>>,
    failing_updates: HashSet<u64>,
    calls: RefCell<Vec<Call>>,
}

fn server_error() -> ApiError {
    ApiError::HttpStatus(StatusCode::INTERNAL_SERVER_ERROR)
}

impl FakeMarketplace {
    pub fn with_part(mut self, description: &str, number: &str, item_type: &str) -> Self {
        self.catalog.insert(
            description.to_string(),
            Some(vec![CatalogItem {
                no: Some(number.to_string()),
                item_type: Some(item_type.to_string()),
            }]),
        );
        self
    }

    pub fn with_search_results(mut self, description: &str, items: Vec<CatalogItem>) -> Self {
        self.catalog.insert(description.to_string(), Some(items));
        self
    }

    pub fn with_failed_search(mut self, description: &str) -> Self {
        self.catalog.insert(description.to_string(), None);
        self
    }

    pub fn with_stock(mut self, number: &str, condition: Condition, quantity: u32, lots: u32) -> Self {
        self.stock.insert(
            (number.to_string(), condition),
            StockSummary {
                total_quantity: quantity,
                total_lots: lots,
            },
        );
        self
    }

    pub fn with_inventory(mut self, lots: Vec<StoreLot>) -> Self {
        self.inventory = Some(lots);
        self
    }

    pub fn with_failed_inventory(mut self) -> Self {
        self.inventory = None;
        self
    }

    pub fn with_failing_update(mut self, inventory_id: u64) -> Self {
        self.failing_updates.insert(inventory_id);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn search_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Search(_)))
            .count()
    }

    pub fn stock_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::Stock(..)))
            .count()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Marketplace for FakeMarketplace {
    fn search_items(&self, query: &str) -> ApiResult<Vec<CatalogItem>> {
        self.record(Call::Search(query.to_string()));
        match self.catalog.get(query) {
            Some(Some(items)) => Ok(items.clone()),
            Some(None) => Err(server_error()),
            None => Ok(Vec::new()),
        }
    }

    fn stock_summary(&self, part: &PartIdentity, condition: Condition) -> ApiResult<StockSummary> {
        self.record(Call::Stock(part.number.clone(), condition));
        self.stock
            .get(&(part.number.clone(), condition))
            .copied()
            .ok_or_else(server_error)
    }

    fn store_inventory(&self) -> ApiResult<Vec<StoreLot>> {
        self.record(Call::Inventory);
        self.inventory.clone().ok_or_else(server_error)
    }

    fn mark_featured(&self, inventory_id: u64) -> ApiResult<()> {
        self.record(Call::Feature(inventory_id));
        if self.failing_updates.contains(&inventory_id) {
            Err(server_error())
        } else {
            Ok(())
        }
    }
}
