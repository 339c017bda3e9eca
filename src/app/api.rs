//! API facade for the application.
//!
//! Glues configuration, gateway construction and session activation into the
//! entry points used by the CLI and by library consumers.

use tracing::debug;

use crate::adapters::{HttpCatalogGateway, RetryPolicy, RetryingCatalogGateway};
use crate::app::CatalogSession;
use crate::domain::{AppError, CatalogClientConfig, GatewayConfig, PriceHistory};
use crate::ports::{CatalogGateway, ServiceStatus};

pub use crate::app::config::{API_URL_ENV, load_config};

/// Session over the HTTP gateway, as produced by [`open_session`].
pub type HttpSession = CatalogSession<Box<dyn CatalogGateway>>;

/// Build the HTTP gateway, wrapped with retries when more than one attempt is allowed.
pub fn connect(config: &GatewayConfig) -> Result<Box<dyn CatalogGateway>, AppError> {
    let http = HttpCatalogGateway::new(config)?;
    debug!(api_url = %http.api_url(), "catalog gateway ready");
    let policy = RetryPolicy::from_config(config);
    if policy.max_attempts() > 1 {
        debug!(max_attempts = policy.max_attempts(), "catalog retries enabled");
        return Ok(Box::new(RetryingCatalogGateway::new(Box::new(http), policy)));
    }
    Ok(Box::new(http))
}

/// Create a session without loading anything.
pub fn session(config: &CatalogClientConfig) -> Result<HttpSession, AppError> {
    let gateway = connect(&config.gateway)?;
    Ok(CatalogSession::with_policy(gateway, config.favorites.policy))
}

/// Create a session and run the initial concurrent load.
///
/// Load failures do not fail this call; they leave the affected slice empty.
pub async fn open_session(config: &CatalogClientConfig) -> Result<HttpSession, AppError> {
    let mut session = session(config)?;
    session.activate().await;
    Ok(session)
}

pub async fn service_status(config: &CatalogClientConfig) -> Result<ServiceStatus, AppError> {
    connect(&config.gateway)?.service_status().await
}

pub async fn price_history(
    config: &CatalogClientConfig,
    product: &str,
) -> Result<PriceHistory, AppError> {
    connect(&config.gateway)?.price_history(product).await
}
