//! Catalog client configuration models.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, FavoriteSyncPolicy};

/// Top-level configuration loaded from an optional TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogClientConfig {
    /// Catalog service connection settings.
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Favorite synchronization settings.
    #[serde(default)]
    pub favorites: FavoritesConfig,
}

impl CatalogClientConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.gateway.validate()
    }
}

/// Catalog service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Base URL under which `prices`, `locations`, ... are served.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Total attempts per request. `1` disables retries.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::InvalidUrl {
                url: self.api_url.to_string(),
                reason: "scheme must be http or https".to_string(),
            });
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::InvalidUrl {
                url: self.api_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.max_attempts == 0 {
            return Err(AppError::config_error("max_attempts must be greater than 0"));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::config_error("retry_delay_ms must be greater than 0"));
        }
        Ok(())
    }
}

/// Favorite synchronization settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FavoritesConfig {
    #[serde(default)]
    pub policy: FavoriteSyncPolicy,
}

fn default_api_url() -> Url {
    Url::parse("http://localhost:8001/api").expect("Default API URL must be valid")
}

fn default_timeout() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    500
}
