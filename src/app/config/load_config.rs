//! Client configuration loading.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::config;
use crate::domain::{AppError, CatalogClientConfig};

/// Environment variable overriding the catalog base URL.
pub const API_URL_ENV: &str = "POLYPRICE_API_URL";

/// Resolve the client configuration.
///
/// Sources in increasing precedence: built-in defaults, the TOML file at
/// `path` (which must exist when given), [`API_URL_ENV`], `api_url_override`.
pub fn load_config(
    path: Option<&Path>,
    api_url_override: Option<&str>,
) -> Result<CatalogClientConfig, AppError> {
    let mut config = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigFileMissing(path.display().to_string()));
            }
            let content = fs::read_to_string(path)?;
            debug!(path = %path.display(), "loaded config file");
            config::parse_config_content(&content)?
        }
        None => CatalogClientConfig::default(),
    };

    if let Some(raw) = env::var(API_URL_ENV).ok().filter(|value| !value.trim().is_empty()) {
        config.gateway.api_url = config::parse_api_url(&raw)?;
    }

    if let Some(raw) = api_url_override {
        config.gateway.api_url = config::parse_api_url(raw)?;
    }

    config.validate()?;
    Ok(config)
}
