//! polyprice: browse live polymer prices with filters and server-synced favorites.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{HttpSession, connect, load_config, open_session, price_history, service_status};
pub use app::{
    CatalogLoad, CatalogSession, CatalogSlice, CatalogStore, FavoriteOutcome, FavoriteSync,
    SliceStatus,
};
pub use domain::{
    AppError, CatalogClientConfig, CatalogSnapshot, FavoriteState, FavoriteSyncPolicy,
    FavoriteToggle, FilterCriteria, FilteredView, PriceCard, PriceRecord, ViewMode, filter_prices,
};
pub use ports::CatalogGateway;
