//! Configuration loaded once at startup and passed explicitly to the client
//! and pipeline.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::Credentials;
use crate::error::{ApiError, ApiResult};

pub const ENV_CONSUMER_KEY: &str = "BRICKLINK_CONSUMER_KEY";
pub const ENV_CONSUMER_SECRET: &str = "BRICKLINK_CONSUMER_SECRET";
pub const ENV_TOKEN_VALUE: &str = "BRICKLINK_TOKEN_VALUE";
pub const ENV_TOKEN_SECRET: &str = "BRICKLINK_TOKEN_SECRET";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub credentials: Credentials,
    pub api: ApiSettings,
    pub pipeline: PipelineSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ApiSettings {
    /// Catalog search endpoint (queried with `?query=`)
    pub search_url: String,
    /// Base of the store API (`/items/...`, `/inventories`)
    pub api_base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            search_url: "https://www.bricklink.com/v1/search/data".to_string(),
            api_base_url: "https://api.bricklink.com/api/store/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PipelineSettings {
    /// Pause after every outbound call
    pub throttle_ms: u64,
    /// How many of the scarcest parts the store updater considers
    pub feature_limit: usize,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            throttle_ms: 1000,
            feature_limit: 10,
        }
    }
}

impl PipelineSettings {
    pub fn throttle(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }
}

impl Config {
    /// Default config path: ~/.config/rarest_parts/config.toml
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rarest_parts")
            .join("config.toml")
    }

    /// Parse a TOML document
    pub fn from_toml(contents: &str) -> ApiResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> ApiResult<Self> {
        if !path.exists() {
            log::warn!("Config file not found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        log::info!("Loading config from: {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Override credentials with any `BRICKLINK_*` variables that are set
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub(crate) fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let creds = &mut self.credentials;
        for (name, slot) in [
            (ENV_CONSUMER_KEY, &mut creds.consumer_key),
            (ENV_CONSUMER_SECRET, &mut creds.consumer_secret),
            (ENV_TOKEN_VALUE, &mut creds.token_value),
            (ENV_TOKEN_SECRET, &mut creds.token_secret),
        ] {
            if let Some(value) = lookup(name).filter(|v| !v.trim().is_empty()) {
                log::debug!("Using {} from environment", name);
                *slot = value;
            }
        }
    }

    /// All four credentials must be present before any network call
    pub fn validate(&self) -> ApiResult<()> {
        let missing = self.credentials.missing();
        if !missing.is_empty() {
            return Err(ApiError::Config(format!(
                "missing credentials: {}",
                missing.join(", ")
            )));
        }
        if self.api.search_url.trim().is_empty() || self.api.api_base_url.trim().is_empty() {
            return Err(ApiError::Config("API endpoints must not be empty".to_string()));
        }
        Ok(())
    }
}
