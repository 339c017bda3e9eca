//! Favorite status of a product.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::AppError;

/// Favorite status of a single product name. There is no pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteState {
    Favorited,
    NotFavorited,
}

impl FavoriteState {
    pub fn from_membership(is_favorite: bool) -> Self {
        if is_favorite { FavoriteState::Favorited } else { FavoriteState::NotFavorited }
    }

    pub fn toggled(self) -> Self {
        match self {
            FavoriteState::Favorited => FavoriteState::NotFavorited,
            FavoriteState::NotFavorited => FavoriteState::Favorited,
        }
    }

    pub fn is_favorite(self) -> bool {
        self == FavoriteState::Favorited
    }
}

/// What to do with the local favorites set when the remote call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FavoriteSyncPolicy {
    /// Commit the local change whatever the remote outcome.
    #[default]
    Lenient,
    /// Commit the local change only after the remote call succeeded.
    Strict,
}

impl FavoriteSyncPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteSyncPolicy::Lenient => "lenient",
            FavoriteSyncPolicy::Strict => "strict",
        }
    }
}

impl fmt::Display for FavoriteSyncPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteSyncPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lenient" => Ok(FavoriteSyncPolicy::Lenient),
            "strict" => Ok(FavoriteSyncPolicy::Strict),
            other => Err(AppError::config_error(format!(
                "Invalid favorite sync policy '{}': expected 'lenient' or 'strict'",
                other
            ))),
        }
    }
}

/// Outcome of a single favorite toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteToggle {
    pub product: String,
    /// Local state after the toggle.
    pub state: FavoriteState,
    /// Whether the remote add/remove call succeeded.
    pub remote_synced: bool,
}

impl FavoriteToggle {
    /// Local and remote state may disagree after this toggle.
    pub fn diverged(&self) -> bool {
        !self.remote_synced
    }
}
