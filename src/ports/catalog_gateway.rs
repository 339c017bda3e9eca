//! Catalog service port definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, PriceHistory, PriceRecord};

/// Response from the service root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
    pub status: String,
}

/// Port for catalog and favorites operations.
///
/// Every call may fail. Implementations perform one logical request per
/// call; retry is layered on by [`crate::adapters::RetryingCatalogGateway`].
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch the full price list, in service order.
    async fn list_prices(&self) -> Result<Vec<PriceRecord>, AppError>;

    async fn list_locations(&self) -> Result<Vec<String>, AppError>;

    async fn list_polymer_types(&self) -> Result<Vec<String>, AppError>;

    /// Fetch favorited product names.
    async fn list_favorites(&self) -> Result<Vec<String>, AppError>;

    async fn add_favorite(&self, product: &str) -> Result<(), AppError>;

    async fn remove_favorite(&self, product: &str) -> Result<(), AppError>;

    async fn service_status(&self) -> Result<ServiceStatus, AppError>;

    async fn price_history(&self, product: &str) -> Result<PriceHistory, AppError>;
}

#[async_trait]
impl<G: CatalogGateway + ?Sized> CatalogGateway for Box<G> {
    async fn list_prices(&self) -> Result<Vec<PriceRecord>, AppError> {
        (**self).list_prices().await
    }

    async fn list_locations(&self) -> Result<Vec<String>, AppError> {
        (**self).list_locations().await
    }

    async fn list_polymer_types(&self) -> Result<Vec<String>, AppError> {
        (**self).list_polymer_types().await
    }

    async fn list_favorites(&self) -> Result<Vec<String>, AppError> {
        (**self).list_favorites().await
    }

    async fn add_favorite(&self, product: &str) -> Result<(), AppError> {
        (**self).add_favorite(product).await
    }

    async fn remove_favorite(&self, product: &str) -> Result<(), AppError> {
        (**self).remove_favorite(product).await
    }

    async fn service_status(&self) -> Result<ServiceStatus, AppError> {
        (**self).service_status().await
    }

    async fn price_history(&self, product: &str) -> Result<PriceHistory, AppError> {
        (**self).price_history(product).await
    }
}
