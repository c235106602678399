use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::auth::{Credentials, OAuthSigner};
use super::{CatalogItem, Marketplace, StockSummary};
use crate::config::ApiSettings;
use crate::error::{ApiError, ApiResult};
use crate::models::{Condition, PartIdentity, StoreLot};

/// Response wrapper used by every BrickLink endpoint
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    meta: Option<Meta>,
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    code: Option<u16>,
    message: Option<String>,
    description: Option<String>,
}

impl<T> Envelope<T> {
    /// The payload, or an error if `meta.code` reports a failure
    fn into_data(self) -> ApiResult<Option<T>> {
        if let Some(meta) = self.meta {
            if let Some(code) = meta.code.filter(|c| *c != 200) {
                return Err(ApiError::ApiResponse {
                    code: code.to_string(),
                    details: meta
                        .description
                        .or(meta.message)
                        .unwrap_or_default(),
                });
            }
        }
        Ok(self.data)
    }
}

/// Price guide payload; BrickLink sends `null` for counts it has no data on
#[derive(Debug, Deserialize)]
struct PriceGuide {
    #[serde(default)]
    total_quantity: Option<u32>,
    #[serde(default)]
    total_lots: Option<u32>,
}

impl From<PriceGuide> for StockSummary {
    fn from(guide: PriceGuide) -> Self {
        StockSummary {
            total_quantity: guide.total_quantity.unwrap_or(0),
            total_lots: guide.total_lots.unwrap_or(0),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InventoryLot {
    inventory_id: u64,
    item: InventoryItem,
    new_or_used: String,
}

#[derive(Debug, Deserialize)]
struct InventoryItem {
    no: String,
}

impl From<InventoryLot> for StoreLot {
    fn from(lot: InventoryLot) -> Self {
        StoreLot {
            inventory_id: lot.inventory_id,
            item_number: lot.item.no,
            condition: Condition::from_code(&lot.new_or_used),
        }
    }
}

/// Blocking, OAuth-signed BrickLink API client
pub struct BrickLinkClient {
    client: Client,
    signer: OAuthSigner,
    search_url: String,
    api_base_url: String,
}

impl BrickLinkClient {
    /// Creates a client for the endpoints in `settings`
    pub fn new(credentials: Credentials, settings: &ApiSettings) -> ApiResult<Self> {
        log::info!("Creating BrickLink API client");
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent("rarest_parts/1.0")
            .build()?;

        Ok(Self {
            client,
            signer: OAuthSigner::new(credentials),
            search_url: settings.search_url.trim_end_matches('/').to_string(),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> ApiResult<Option<T>> {
        log::debug!("GET {} {:?}", url, query);

        let auth = self.signer.authorization_header("GET", url, query);
        let response = self
            .client
            .get(url)
            .query(query)
            .header(AUTHORIZATION, auth)
            .send()?;

        Self::parse(response)
    }

    fn parse<T: DeserializeOwned>(response: reqwest::blocking::Response) -> ApiResult<Option<T>> {
        if response.status() != StatusCode::OK {
            return Err(ApiError::HttpStatus(response.status()));
        }

        // Error responses carry `"data": {}` whatever the endpoint, so the
        // payload is only typed once `meta` has been checked
        let body = response.text()?;
        let envelope: Envelope<serde_json::Value> = serde_json::from_str(&body)?;
        match envelope.into_data()? {
            Some(data) => Ok(Some(serde_json::from_value(data)?)),
            None => Ok(None),
        }
    }
}

impl Marketplace for BrickLinkClient {
    fn search_items(&self, query: &str) -> ApiResult<Vec<CatalogItem>> {
        let items: Option<Vec<CatalogItem>> = self.get(&self.search_url, &[("query", query)])?;
        Ok(items.unwrap_or_default())
    }

    fn stock_summary(&self, part: &PartIdentity, condition: Condition) -> ApiResult<StockSummary> {
        let url = format!(
            "{}/items/{}/{}/price",
            self.api_base_url,
            urlencoding::encode(&part.item_type),
            urlencoding::encode(&part.number)
        );
        let guide: Option<PriceGuide> = self.get(
            &url,
            &[("guide_type", "stock"), ("new_or_used", condition.code())],
        )?;
        Ok(guide.map(StockSummary::from).unwrap_or_default())
    }

    fn store_inventory(&self) -> ApiResult<Vec<StoreLot>> {
        let url = format!("{}/inventories", self.api_base_url);
        let lots: Option<Vec<InventoryLot>> = self.get(&url, &[])?;
        let lots: Vec<StoreLot> = lots
            .unwrap_or_default()
            .into_iter()
            .map(StoreLot::from)
            .collect();

        log::info!("Fetched {} lots from store inventory", lots.len());
        Ok(lots)
    }

    fn mark_featured(&self, inventory_id: u64) -> ApiResult<()> {
        let url = format!("{}/inventories/{}", self.api_base_url, inventory_id);
        log::debug!("PUT {}", url);

        let auth = self.signer.authorization_header("PUT", &url, &[]);
        let response = self
            .client
            .put(&url)
            .header(AUTHORIZATION, auth)
            .json(&serde_json::json!({ "is_featured": true }))
            .send()?;

        Self::parse::<serde_json::Value>(response)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "bricklink_tests.rs"]
mod tests;
