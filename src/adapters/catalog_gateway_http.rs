//! Catalog service client implementation using reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{AppError, GatewayConfig, PriceHistory, PriceRecord};
use crate::ports::{CatalogGateway, ServiceStatus};

const DEFAULT_STATUS_MESSAGE: &str = "Catalog API request failed";

/// HTTP transport for the catalog service.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by a dedicated retry wrapper adapter.
#[derive(Debug, Clone)]
pub struct HttpCatalogGateway {
    api_url: Url,
    client: Client,
}

impl HttpCatalogGateway {
    /// Create a new HTTP client from gateway configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, AppError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::gateway(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self { api_url: config.api_url.clone(), client })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Append path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidUrl {
                url: self.api_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn service_root(&self) -> Url {
        let mut url = self.api_url.clone();
        url.set_path("/");
        url.set_query(None);
        url
    }

    async fn send(&self, method: Method, url: Url) -> Result<String, AppError> {
        debug!(%method, %url, "catalog request");

        let response = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(describe_transport_error)?;

        let status = response.status();
        let body_text = response.text().await.map_err(|e| {
            AppError::gateway(format!("Failed to read response body: {}", e), None)
        })?;

        if status.is_success() {
            return Ok(body_text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::gateway(message, Some(status.as_u16())))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, what: &str) -> Result<T, AppError> {
        let body = self.send(Method::GET, url).await?;
        serde_json::from_str(&body)
            .map_err(|e| AppError::Decode { what: what.to_string(), details: e.to_string() })
    }
}

#[derive(Debug, Deserialize)]
struct LocationsResponse {
    locations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct PolymerTypesResponse {
    polymer_types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct FavoritesResponse {
    favorites: Vec<String>,
}

fn describe_transport_error(error: reqwest::Error) -> AppError {
    let message = if error.is_timeout() {
        format!("HTTP request timed out: {}", error)
    } else if error.is_connect() {
        format!("HTTP connection failed: {}", error)
    } else {
        format!("HTTP request failed: {}", error)
    };
    AppError::gateway(message, None)
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(detail) = parsed.get("detail").and_then(|detail| detail.as_str()) {
        return Some(detail.to_string());
    }

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn list_prices(&self) -> Result<Vec<PriceRecord>, AppError> {
        let url = self.endpoint(&["prices"])?;
        self.get_json(url, "price list").await
    }

    async fn list_locations(&self) -> Result<Vec<String>, AppError> {
        let url = self.endpoint(&["locations"])?;
        let response: LocationsResponse = self.get_json(url, "location list").await?;
        Ok(response.locations)
    }

    async fn list_polymer_types(&self) -> Result<Vec<String>, AppError> {
        let url = self.endpoint(&["polymer-types"])?;
        let response: PolymerTypesResponse = self.get_json(url, "polymer type list").await?;
        Ok(response.polymer_types)
    }

    async fn list_favorites(&self) -> Result<Vec<String>, AppError> {
        let url = self.endpoint(&["favorites"])?;
        let response: FavoritesResponse = self.get_json(url, "favorites").await?;
        Ok(response.favorites)
    }

    async fn add_favorite(&self, product: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["favorites", product])?;
        self.send(Method::POST, url).await.map(|_| ())
    }

    async fn remove_favorite(&self, product: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["favorites", product])?;
        self.send(Method::DELETE, url).await.map(|_| ())
    }

    async fn service_status(&self) -> Result<ServiceStatus, AppError> {
        self.get_json(self.service_root(), "service status").await
    }

    async fn price_history(&self, product: &str) -> Result<PriceHistory, AppError> {
        let url = self.endpoint(&["price-history", product])?;
        self.get_json(url, "price history").await
    }
}
