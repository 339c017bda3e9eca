//! Explicitly owned browsing session.
//!
//! The session owns the gateway, the catalog store, the filter criteria and
//! the derived view. Every mutating call re-derives the view before it
//! returns, so `view()` is never stale.
//!
//! Remote work is started from `&self` and yields `'static` futures over a
//! shared gateway handle. Settled results are applied with `&mut self`, so
//! the view stays readable and criteria stay editable while calls are in
//! flight.

use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tracing::info;

use crate::app::favorite_sync::{FavoriteOutcome, FavoriteSync};
use crate::app::store::{CatalogLoad, CatalogSlice, CatalogStore};
use crate::domain::{
    CatalogSnapshot, FavoriteState, FavoriteSyncPolicy, FavoriteToggle, FilterCriteria,
    FilteredView,
};
use crate::ports::CatalogGateway;

pub struct CatalogSession<G: CatalogGateway> {
    gateway: Arc<G>,
    store: CatalogStore,
    criteria: FilterCriteria,
    favorites: FavoriteSync,
    view: FilteredView,
}

impl<G: CatalogGateway + 'static> CatalogSession<G> {
    pub fn new(gateway: G) -> Self {
        Self::with_policy(gateway, FavoriteSyncPolicy::default())
    }

    pub fn with_policy(gateway: G, policy: FavoriteSyncPolicy) -> Self {
        Self {
            gateway: Arc::new(gateway),
            store: CatalogStore::new(),
            criteria: FilterCriteria::default(),
            favorites: FavoriteSync::new(policy),
            view: FilteredView::default(),
        }
    }

    /// Issue all four loads at once. Nothing is applied until the caller
    /// hands each settled load to [`CatalogSession::apply_load`].
    pub fn start_loads(&self) -> FuturesUnordered<BoxFuture<'static, CatalogLoad>> {
        CatalogSlice::ALL.into_iter().map(|slice| self.start_load(slice)).collect()
    }

    pub fn start_load(&self, slice: CatalogSlice) -> BoxFuture<'static, CatalogLoad> {
        let gateway = Arc::clone(&self.gateway);
        async move { CatalogLoad::fetch(gateway.as_ref(), slice).await }.boxed()
    }

    /// Apply one settled load and re-derive the view.
    pub fn apply_load(&mut self, load: CatalogLoad) -> bool {
        let replaced = self.store.apply(load);
        self.recompute();
        replaced
    }

    /// Start every load and apply each as it settles.
    ///
    /// Returns the slices in completion order with whether each was replaced.
    pub async fn activate(&mut self) -> Vec<(CatalogSlice, bool)> {
        let mut pending = self.start_loads();

        let mut settled = Vec::with_capacity(CatalogSlice::ALL.len());
        while let Some(load) = pending.next().await {
            let slice = load.slice();
            settled.push((slice, self.apply_load(load)));
        }

        info!(
            prices = self.store.snapshot().prices().len(),
            favorites = self.store.snapshot().favorites().len(),
            "catalog session activated"
        );
        settled
    }

    pub async fn reload_prices(&mut self) -> bool {
        let replaced = self.store.load_prices(self.gateway.as_ref()).await;
        self.recompute();
        replaced
    }

    pub async fn reload_locations(&mut self) -> bool {
        let replaced = self.store.load_locations(self.gateway.as_ref()).await;
        self.recompute();
        replaced
    }

    pub async fn reload_polymer_types(&mut self) -> bool {
        let replaced = self.store.load_polymer_types(self.gateway.as_ref()).await;
        self.recompute();
        replaced
    }

    pub async fn reload_favorites(&mut self) -> bool {
        let replaced = self.store.load_favorites(self.gateway.as_ref()).await;
        self.recompute();
        replaced
    }

    /// Issue the remote add/remove for `product` based on its current state.
    /// The local set is untouched until [`CatalogSession::finish_toggle`].
    pub fn start_toggle(&self, product: &str) -> BoxFuture<'static, FavoriteOutcome> {
        let gateway = Arc::clone(&self.gateway);
        let product = product.to_string();
        let current = FavoriteState::from_membership(self.snapshot().is_favorite(&product));
        async move { FavoriteSync::send(gateway.as_ref(), product, current).await }.boxed()
    }

    pub fn finish_toggle(&mut self, outcome: FavoriteOutcome) -> FavoriteToggle {
        let toggle = self.favorites.commit(&mut self.store, outcome);
        self.recompute();
        toggle
    }

    pub async fn toggle_favorite(&mut self, product: &str) -> FavoriteToggle {
        let outcome = self.start_toggle(product).await;
        self.finish_toggle(outcome)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
        self.recompute();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.criteria.location = location.into();
        self.recompute();
    }

    pub fn set_polymer_type_prefix(&mut self, prefix: impl Into<String>) {
        self.criteria.polymer_type_prefix = prefix.into();
        self.recompute();
    }

    pub fn set_favorites_only(&mut self, favorites_only: bool) {
        self.criteria.favorites_only = favorites_only;
        self.recompute();
    }

    pub fn toggle_favorites_only(&mut self) {
        self.set_favorites_only(!self.criteria.favorites_only);
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.recompute();
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        self.store.snapshot()
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn gateway(&self) -> &G {
        self.gateway.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    fn recompute(&mut self) {
        self.view = FilteredView::project(self.store.snapshot(), &self.criteria);
    }
}
