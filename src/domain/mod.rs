pub mod config;
pub mod error;
pub mod favorite;
pub mod filter;
pub mod price_record;
pub mod snapshot;
pub mod view;

pub use config::{CatalogClientConfig, FavoritesConfig, GatewayConfig};
pub use error::AppError;
pub use favorite::{FavoriteState, FavoriteSyncPolicy, FavoriteToggle};
pub use filter::{FilterCriteria, filter_prices};
pub use price_record::{PriceHistory, PricePoint, PriceRecord};
pub use snapshot::CatalogSnapshot;
pub use view::{Direction, FilteredView, PriceCard, PriceChange, ViewMode};
