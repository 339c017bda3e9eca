use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{AppError, PriceHistory, PriceRecord};
use crate::ports::{CatalogGateway, ServiceStatus};

/// A favorite call observed by the fake, in issue order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteCall {
    Add(String),
    Remove(String),
}

#[derive(Default)]
struct FakeState {
    prices: Option<Vec<PriceRecord>>,
    queued_prices: VecDeque<Result<Vec<PriceRecord>, AppError>>,
    locations: Option<Vec<String>>,
    polymer_types: Option<Vec<String>>,
    favorites: Option<Vec<String>>,
    favorite_calls_fail: bool,
    delays: HashMap<&'static str, Duration>,
    calls: Vec<&'static str>,
    favorite_calls: Vec<FavoriteCall>,
}

/// Scriptable in-memory gateway.
///
/// A slice set to `None` answers with a 503 gateway error. Queued price
/// responses take precedence over the standing one.
#[derive(Clone, Default)]
pub struct FakeCatalogGateway {
    state: Arc<Mutex<FakeState>>,
}

impl FakeCatalogGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway answering every list call successfully.
    pub fn serving(prices: Vec<PriceRecord>, favorites: &[&str]) -> Self {
        let fake = Self::new();
        fake.set_prices(Some(prices));
        fake.set_locations(Some(vec!["Mumbai".to_string(), "Delhi".to_string()]));
        fake.set_polymer_types(Some(vec!["HD".to_string(), "PP".to_string()]));
        fake.set_favorites(Some(favorites.iter().map(|f| f.to_string()).collect()));
        fake
    }

    pub fn set_prices(&self, prices: Option<Vec<PriceRecord>>) {
        self.lock().prices = prices;
    }

    pub fn queue_prices(&self, response: Result<Vec<PriceRecord>, AppError>) {
        self.lock().queued_prices.push_back(response);
    }

    pub fn set_locations(&self, locations: Option<Vec<String>>) {
        self.lock().locations = locations;
    }

    pub fn set_polymer_types(&self, polymer_types: Option<Vec<String>>) {
        self.lock().polymer_types = polymer_types;
    }

    pub fn set_favorites(&self, favorites: Option<Vec<String>>) {
        self.lock().favorites = favorites;
    }

    pub fn fail_favorite_calls(&self) {
        self.lock().favorite_calls_fail = true;
    }

    pub fn succeed_favorite_calls(&self) {
        self.lock().favorite_calls_fail = false;
    }

    /// Delay the response of `operation` (e.g. `"list_prices"`).
    pub fn delay(&self, operation: &'static str, delay: Duration) {
        self.lock().delays.insert(operation, delay);
    }

    pub fn call_count(&self, operation: &str) -> usize {
        self.lock().calls.iter().filter(|&&call| call == operation).count()
    }

    pub fn favorite_calls(&self) -> Vec<FavoriteCall> {
        self.lock().favorite_calls.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        self.state.lock().expect("fake gateway lock poisoned")
    }

    async fn enter(&self, operation: &'static str) {
        let delay = {
            let mut state = self.lock();
            state.calls.push(operation);
            state.delays.get(operation).copied()
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn unavailable(what: &str) -> AppError {
        AppError::gateway(format!("{} unavailable", what), Some(503))
    }
}

#[async_trait]
impl CatalogGateway for FakeCatalogGateway {
    async fn list_prices(&self) -> Result<Vec<PriceRecord>, AppError> {
        self.enter("list_prices").await;
        let mut state = self.lock();
        if let Some(queued) = state.queued_prices.pop_front() {
            return queued;
        }
        state.prices.clone().ok_or_else(|| Self::unavailable("prices"))
    }

    async fn list_locations(&self) -> Result<Vec<String>, AppError> {
        self.enter("list_locations").await;
        self.lock().locations.clone().ok_or_else(|| Self::unavailable("locations"))
    }

    async fn list_polymer_types(&self) -> Result<Vec<String>, AppError> {
        self.enter("list_polymer_types").await;
        self.lock().polymer_types.clone().ok_or_else(|| Self::unavailable("polymer types"))
    }

    async fn list_favorites(&self) -> Result<Vec<String>, AppError> {
        self.enter("list_favorites").await;
        self.lock().favorites.clone().ok_or_else(|| Self::unavailable("favorites"))
    }

    async fn add_favorite(&self, product: &str) -> Result<(), AppError> {
        self.enter("add_favorite").await;
        let mut state = self.lock();
        state.favorite_calls.push(FavoriteCall::Add(product.to_string()));
        if state.favorite_calls_fail {
            return Err(Self::unavailable("favorites"));
        }
        Ok(())
    }

    async fn remove_favorite(&self, product: &str) -> Result<(), AppError> {
        self.enter("remove_favorite").await;
        let mut state = self.lock();
        state.favorite_calls.push(FavoriteCall::Remove(product.to_string()));
        if state.favorite_calls_fail {
            return Err(Self::unavailable("favorites"));
        }
        Ok(())
    }

    async fn service_status(&self) -> Result<ServiceStatus, AppError> {
        self.enter("service_status").await;
        Ok(ServiceStatus {
            message: "Polymer Pricing API".to_string(),
            status: "active".to_string(),
        })
    }

    async fn price_history(&self, product: &str) -> Result<PriceHistory, AppError> {
        self.enter("price_history").await;
        Ok(PriceHistory { product: product.to_string(), history: Vec::new() })
    }
}
