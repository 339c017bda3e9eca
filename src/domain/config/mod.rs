pub mod client_config;
pub mod parse;

pub use client_config::{CatalogClientConfig, FavoritesConfig, GatewayConfig};
pub use parse::{parse_api_url, parse_config_content};
