//! Favorite add/remove protocol against the catalog service.

use tracing::{info, warn};

use crate::app::store::CatalogStore;
use crate::domain::{AppError, FavoriteState, FavoriteSyncPolicy, FavoriteToggle};
use crate::ports::CatalogGateway;

/// Flips a product's favorite status locally and remotely.
///
/// A toggle is split in two: [`FavoriteSync::send`] issues exactly one remote
/// call and borrows nothing but the gateway, and [`FavoriteSync::commit`]
/// applies the settled call to the store. Repeated toggles are neither
/// coalesced nor debounced. Whether a failed call still changes the local
/// set is decided by the [`FavoriteSyncPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FavoriteSync {
    policy: FavoriteSyncPolicy,
}

/// A settled remote add/remove, not yet applied to the store.
#[derive(Debug)]
pub struct FavoriteOutcome {
    pub product: String,
    /// Local state when the call was issued.
    pub issued_from: FavoriteState,
    pub result: Result<(), AppError>,
}

impl FavoriteSync {
    pub fn new(policy: FavoriteSyncPolicy) -> Self {
        Self { policy }
    }

    /// Remove the product if `issued_from` is favorited, add it otherwise.
    pub async fn send<G: CatalogGateway + ?Sized>(
        gateway: &G,
        product: String,
        issued_from: FavoriteState,
    ) -> FavoriteOutcome {
        let result = match issued_from {
            FavoriteState::Favorited => gateway.remove_favorite(&product).await,
            FavoriteState::NotFavorited => gateway.add_favorite(&product).await,
        };
        FavoriteOutcome { product, issued_from, result }
    }

    pub fn commit(&self, store: &mut CatalogStore, outcome: FavoriteOutcome) -> FavoriteToggle {
        let FavoriteOutcome { product, issued_from, result } = outcome;
        let remote_synced = match result {
            Ok(()) => true,
            Err(error) => {
                warn!(product = %product, %error, policy = %self.policy, "favorite sync failed");
                false
            }
        };

        if !remote_synced && self.policy == FavoriteSyncPolicy::Strict {
            let state = FavoriteState::from_membership(store.snapshot().is_favorite(&product));
            return FavoriteToggle { product, state, remote_synced };
        }

        let state = issued_from.toggled();
        match state {
            FavoriteState::Favorited => store.insert_favorite(&product),
            FavoriteState::NotFavorited => store.remove_favorite(&product),
        };
        info!(product = %product, ?state, remote_synced, "favorite toggled");

        FavoriteToggle { product, state, remote_synced }
    }

    pub async fn toggle_favorite<G: CatalogGateway + ?Sized>(
        &self,
        gateway: &G,
        store: &mut CatalogStore,
        product: &str,
    ) -> FavoriteToggle {
        let current = FavoriteState::from_membership(store.snapshot().is_favorite(product));
        let outcome = Self::send(gateway, product.to_string(), current).await;
        self.commit(store, outcome)
    }
}
