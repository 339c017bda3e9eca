//! Retry wrapper for catalog reads.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::{AppError, GatewayConfig, PriceHistory, PriceRecord};
use crate::ports::{CatalogGateway, ServiceStatus};

const MAX_DELAY_MS: u64 = 30_000;

#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay_ms: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &GatewayConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            base_delay_ms: config.retry_delay_ms.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Doubles per failed attempt, capped at 30s.
    fn delay_after(&self, failed_attempt: u32) -> Duration {
        let exponent = failed_attempt.saturating_sub(1).min(10);
        let delay_ms = self.base_delay_ms.saturating_mul(1_u64 << exponent).min(MAX_DELAY_MS);
        Duration::from_millis(delay_ms)
    }
}

/// Decorates a gateway with bounded retries for transient read failures.
///
/// Favorite add/remove calls pass straight through: one toggle is one request.
pub struct RetryingCatalogGateway {
    inner: Box<dyn CatalogGateway>,
    policy: RetryPolicy,
}

impl RetryingCatalogGateway {
    pub fn new(inner: Box<dyn CatalogGateway>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    async fn with_retry<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let mut attempt = 1;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(error) if is_transient(&error) && attempt < self.policy.max_attempts => {
                    let delay = self.policy.delay_after(attempt);
                    warn!(
                        operation,
                        attempt,
                        max_attempts = self.policy.max_attempts,
                        %error,
                        "catalog read failed; retrying in {} ms",
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(error) => return Err(error),
            }
        }
    }
}

#[async_trait]
impl CatalogGateway for RetryingCatalogGateway {
    async fn list_prices(&self) -> Result<Vec<PriceRecord>, AppError> {
        self.with_retry("list_prices", || self.inner.list_prices()).await
    }

    async fn list_locations(&self) -> Result<Vec<String>, AppError> {
        self.with_retry("list_locations", || self.inner.list_locations()).await
    }

    async fn list_polymer_types(&self) -> Result<Vec<String>, AppError> {
        self.with_retry("list_polymer_types", || self.inner.list_polymer_types()).await
    }

    async fn list_favorites(&self) -> Result<Vec<String>, AppError> {
        self.with_retry("list_favorites", || self.inner.list_favorites()).await
    }

    async fn add_favorite(&self, product: &str) -> Result<(), AppError> {
        self.inner.add_favorite(product).await
    }

    async fn remove_favorite(&self, product: &str) -> Result<(), AppError> {
        self.inner.remove_favorite(product).await
    }

    async fn service_status(&self) -> Result<ServiceStatus, AppError> {
        self.with_retry("service_status", || self.inner.service_status()).await
    }

    async fn price_history(&self, product: &str) -> Result<PriceHistory, AppError> {
        self.with_retry("price_history", || self.inner.price_history(product)).await
    }
}

/// 408, 429 and 5xx answers, or transport failures that never got an answer.
fn is_transient(error: &AppError) -> bool {
    match error {
        AppError::Gateway { status: Some(code), .. } => {
            *code == 408 || *code == 429 || *code >= 500
        }
        AppError::Gateway { message, status: None } => {
            message.contains("timed out") || message.contains("connection failed")
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeCatalogGateway, FavoriteCall, price};

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy { max_attempts, base_delay_ms: 1 }
    }

    fn server_error() -> AppError {
        AppError::gateway("server error", Some(500))
    }

    #[tokio::test]
    async fn retries_transient_failures_and_succeeds() {
        let inner = FakeCatalogGateway::new();
        inner.queue_prices(Err(server_error()));
        inner.queue_prices(Err(AppError::gateway("rate limited", Some(429))));
        inner.queue_prices(Ok(vec![price("1", "HD GPBM", "Delhi")]));
        let gateway = RetryingCatalogGateway::new(Box::new(inner.clone()), policy(3));

        let prices = gateway.list_prices().await.unwrap();
        assert_eq!(prices.len(), 1);
        assert_eq!(inner.call_count("list_prices"), 3);
    }

    #[tokio::test]
    async fn does_not_retry_on_client_error() {
        let inner = FakeCatalogGateway::new();
        inner.queue_prices(Err(AppError::gateway("not found", Some(404))));
        let gateway = RetryingCatalogGateway::new(Box::new(inner.clone()), policy(3));

        let err = gateway.list_prices().await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(inner.call_count("list_prices"), 1);
    }

    #[tokio::test]
    async fn stops_after_max_attempts() {
        let inner = FakeCatalogGateway::new();
        for _ in 0..3 {
            inner.queue_prices(Err(server_error()));
        }
        let gateway = RetryingCatalogGateway::new(Box::new(inner.clone()), policy(3));

        assert!(gateway.list_prices().await.is_err());
        assert_eq!(inner.call_count("list_prices"), 3);
    }

    #[tokio::test]
    async fn favorite_mutations_are_sent_once() {
        let inner = FakeCatalogGateway::new();
        inner.fail_favorite_calls();
        let gateway = RetryingCatalogGateway::new(Box::new(inner.clone()), policy(3));

        assert!(gateway.add_favorite("LD GP").await.is_err());
        assert!(gateway.remove_favorite("HD GPBM").await.is_err());
        assert_eq!(
            inner.favorite_calls(),
            vec![
                FavoriteCall::Add("LD GP".to_string()),
                FavoriteCall::Remove("HD GPBM".to_string()),
            ]
        );
    }

    #[test]
    fn transport_failures_are_transient() {
        assert!(is_transient(&AppError::gateway("HTTP request timed out: deadline", None)));
        assert!(is_transient(&AppError::gateway("HTTP connection failed: refused", None)));
        assert!(!is_transient(&AppError::gateway("Failed to read response body: eof", None)));
        assert!(!is_transient(&AppError::gateway("bad request", Some(400))));
        assert!(!is_transient(&AppError::Decode {
            what: "prices".to_string(),
            details: "eof".to_string()
        }));
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy { max_attempts: 20, base_delay_ms: 500 };
        assert_eq!(policy.delay_after(1), Duration::from_millis(500));
        assert_eq!(policy.delay_after(2), Duration::from_millis(1000));
        assert_eq!(policy.delay_after(3), Duration::from_millis(2000));
        assert_eq!(policy.delay_after(12), Duration::from_millis(MAX_DELAY_MS));
    }
}
