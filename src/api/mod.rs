//! API client for the BrickLink marketplace

pub mod auth;
pub mod bricklink;

use serde::Deserialize;

use crate::error::ApiResult;
use crate::models::{Condition, PartIdentity, StoreLot};

pub use auth::{Credentials, OAuthSigner};
pub use bricklink::BrickLinkClient;

/// One candidate returned by the catalog search
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CatalogItem {
    #[serde(default)]
    pub no: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
}

/// Stock summary from the price guide (`guide_type=stock`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub total_quantity: u32,
    pub total_lots: u32,
}

/// The marketplace calls the pipeline and the store updater depend on.
///
/// `BrickLinkClient` talks to the real API; tests substitute in-memory fakes.
pub trait Marketplace {
    /// Free-text catalog search, candidates in the order returned
    fn search_items(&self, query: &str) -> ApiResult<Vec<CatalogItem>>;

    /// Stock figures across all current listings of one item/condition
    fn stock_summary(&self, part: &PartIdentity, condition: Condition) -> ApiResult<StockSummary>;

    /// Every lot in the user's store, in one unpaginated call
    fn store_inventory(&self) -> ApiResult<Vec<StoreLot>>;

    /// Set `is_featured` on one store lot
    fn mark_featured(&self, inventory_id: u64) -> ApiResult<()>;
}
