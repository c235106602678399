//! Rarest Parts - ranks a BrickLink inventory by scarcity
//!
//! Reads an inventory CSV, resolves every part against the BrickLink catalog,
//! looks up how many lots are for sale, and ranks parts by fewest sellers.
//! Optionally marks the scarcest parts as featured in the user's store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod featuring;
pub mod formatters;
pub mod io;
pub mod lookup;
pub mod models;
pub mod pipeline;
pub mod progress;
pub mod ranking;

#[cfg(test)]
mod test_support;

// Re-export commonly used items
pub use api::{BrickLinkClient, Credentials, Marketplace};
pub use config::Config;
pub use error::{ApiError, ApiResult};
pub use featuring::{feature_scarcest, FeatureReport};
pub use formatters::{format_feature_report, format_results_table, format_run_summary};
pub use io::{read_inventory, write_results};
pub use models::{Condition, InventoryRow, ResultRecord};
pub use pipeline::{Pipeline, RunOutput, RunSummary};
pub use progress::{LogProgress, NullProgress, Progress};
pub use ranking::RankedResults;
