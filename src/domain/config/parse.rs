//! Pure parse/validate for client configuration (`polyprice.toml`).

use url::Url;

use crate::domain::{AppError, CatalogClientConfig};

/// Parse and validate client configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<CatalogClientConfig, AppError> {
    let config: CatalogClientConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Parse a catalog base URL given on the command line or in the environment.
pub fn parse_api_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw.trim())
        .map_err(|e| AppError::InvalidUrl { url: raw.to_string(), reason: e.to_string() })
}
