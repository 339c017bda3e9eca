//! Authoritative owner of the local catalog snapshot.
//!
//! Each slice (prices, locations, polymer types, favorites) is loaded
//! independently. A successful load replaces its slice wholesale; a failed
//! load is logged and leaves the slice at its previous value, which is empty
//! before the first success.

use std::fmt;

use tracing::{debug, warn};

use crate::domain::{AppError, CatalogSnapshot, PriceRecord};
use crate::ports::CatalogGateway;

/// One independently loaded part of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogSlice {
    Prices,
    Locations,
    PolymerTypes,
    Favorites,
}

impl CatalogSlice {
    pub const ALL: [CatalogSlice; 4] = [
        CatalogSlice::Prices,
        CatalogSlice::Locations,
        CatalogSlice::PolymerTypes,
        CatalogSlice::Favorites,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogSlice::Prices => "prices",
            CatalogSlice::Locations => "locations",
            CatalogSlice::PolymerTypes => "polymer_types",
            CatalogSlice::Favorites => "favorites",
        }
    }

    fn index(self) -> usize {
        match self {
            CatalogSlice::Prices => 0,
            CatalogSlice::Locations => 1,
            CatalogSlice::PolymerTypes => 2,
            CatalogSlice::Favorites => 3,
        }
    }
}

impl fmt::Display for CatalogSlice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load state of a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceStatus {
    /// No load has settled yet.
    #[default]
    Pending,
    Loaded,
    /// The most recent load failed; the slice holds its previous value.
    Failed,
}

/// A settled fetch for one slice, ready to be applied to the store.
#[derive(Debug)]
pub enum CatalogLoad {
    Prices(Result<Vec<PriceRecord>, AppError>),
    Locations(Result<Vec<String>, AppError>),
    PolymerTypes(Result<Vec<String>, AppError>),
    Favorites(Result<Vec<String>, AppError>),
}

impl CatalogLoad {
    /// Issue the gateway call backing `slice`.
    pub async fn fetch<G: CatalogGateway + ?Sized>(gateway: &G, slice: CatalogSlice) -> Self {
        match slice {
            CatalogSlice::Prices => CatalogLoad::Prices(gateway.list_prices().await),
            CatalogSlice::Locations => CatalogLoad::Locations(gateway.list_locations().await),
            CatalogSlice::PolymerTypes => {
                CatalogLoad::PolymerTypes(gateway.list_polymer_types().await)
            }
            CatalogSlice::Favorites => CatalogLoad::Favorites(gateway.list_favorites().await),
        }
    }

    pub fn slice(&self) -> CatalogSlice {
        match self {
            CatalogLoad::Prices(_) => CatalogSlice::Prices,
            CatalogLoad::Locations(_) => CatalogSlice::Locations,
            CatalogLoad::PolymerTypes(_) => CatalogSlice::PolymerTypes,
            CatalogLoad::Favorites(_) => CatalogSlice::Favorites,
        }
    }
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    snapshot: CatalogSnapshot,
    status: [SliceStatus; 4],
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing snapshot, every slice marked loaded.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot, status: [SliceStatus::Loaded; 4] }
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn status(&self, slice: CatalogSlice) -> SliceStatus {
        self.status[slice.index()]
    }

    /// True until the first price load settles, successfully or not.
    pub fn is_loading(&self) -> bool {
        self.status(CatalogSlice::Prices) == SliceStatus::Pending
    }

    pub async fn load_prices<G: CatalogGateway + ?Sized>(&mut self, gateway: &G) -> bool {
        self.load(gateway, CatalogSlice::Prices).await
    }

    pub async fn load_locations<G: CatalogGateway + ?Sized>(&mut self, gateway: &G) -> bool {
        self.load(gateway, CatalogSlice::Locations).await
    }

    pub async fn load_polymer_types<G: CatalogGateway + ?Sized>(&mut self, gateway: &G) -> bool {
        self.load(gateway, CatalogSlice::PolymerTypes).await
    }

    pub async fn load_favorites<G: CatalogGateway + ?Sized>(&mut self, gateway: &G) -> bool {
        self.load(gateway, CatalogSlice::Favorites).await
    }

    async fn load<G: CatalogGateway + ?Sized>(&mut self, gateway: &G, slice: CatalogSlice) -> bool {
        let load = CatalogLoad::fetch(gateway, slice).await;
        self.apply(load)
    }

    /// Apply a settled load. Returns `true` when the slice was replaced.
    pub fn apply(&mut self, load: CatalogLoad) -> bool {
        let slice = load.slice();
        let applied = match load {
            CatalogLoad::Prices(result) => {
                result.map(|prices| self.snapshot.replace_prices(prices))
            }
            CatalogLoad::Locations(result) => {
                result.map(|locations| self.snapshot.replace_locations(locations))
            }
            CatalogLoad::PolymerTypes(result) => {
                result.map(|types| self.snapshot.replace_polymer_types(types))
            }
            CatalogLoad::Favorites(result) => {
                result.map(|favorites| self.snapshot.replace_favorites(favorites))
            }
        };

        match applied {
            Ok(()) => {
                debug!(%slice, "catalog slice replaced");
                self.status[slice.index()] = SliceStatus::Loaded;
                true
            }
            Err(error) => {
                warn!(%slice, %error, "catalog load failed; keeping previous data");
                self.status[slice.index()] = SliceStatus::Failed;
                false
            }
        }
    }

    pub(crate) fn insert_favorite(&mut self, product: &str) -> bool {
        self.snapshot.insert_favorite(product)
    }

    pub(crate) fn remove_favorite(&mut self, product: &str) -> bool {
        self.snapshot.remove_favorite(product)
    }
}
