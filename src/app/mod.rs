pub mod api;
pub mod cli;
pub mod config;
mod favorite_sync;
mod session;
mod store;

pub use favorite_sync::{FavoriteOutcome, FavoriteSync};
pub use session::CatalogSession;
pub use store::{CatalogLoad, CatalogSlice, CatalogStore, SliceStatus};
