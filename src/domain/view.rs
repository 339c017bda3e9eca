//! Render-ready projection consumed by the presentation layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{CatalogSnapshot, FilterCriteria, PriceRecord, filter_prices};

/// Direction of a price movement. Zero counts as up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceChange {
    pub magnitude: f64,
    pub direction: Direction,
}

impl PriceChange {
    pub fn from_signed(change: f64) -> Self {
        let direction = if change >= 0.0 { Direction::Up } else { Direction::Down };
        Self { magnitude: change.abs(), direction }
    }
}

/// Everything a renderer needs for one price entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceCard {
    pub id: String,
    pub product: String,
    pub location: String,
    pub price_range: String,
    pub change: PriceChange,
    pub price_change_percent: String,
    pub transit_time: String,
    pub last_updated: DateTime<Utc>,
    pub is_favorite: bool,
}

impl PriceCard {
    fn from_record(record: &PriceRecord, snapshot: &CatalogSnapshot) -> Self {
        Self {
            id: record.id.clone(),
            product: record.product.clone(),
            location: record.location.clone(),
            price_range: record.price_range.clone(),
            change: PriceChange::from_signed(record.price_change),
            price_change_percent: record.price_change_percent.clone(),
            transit_time: record.transit_time.clone(),
            last_updated: record.last_updated,
            is_favorite: snapshot.is_favorite(&record.product),
        }
    }
}

/// Whether the view shows every price or only favorites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    All,
    Favorites,
}

impl ViewMode {
    pub fn heading(&self) -> &'static str {
        match self {
            ViewMode::All => "Live Polymer Prices",
            ViewMode::Favorites => "Your Favorite Grades",
        }
    }
}

/// The ordered subset of prices satisfying the current criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredView {
    mode: ViewMode,
    cards: Vec<PriceCard>,
}

impl FilteredView {
    pub fn project(snapshot: &CatalogSnapshot, criteria: &FilterCriteria) -> Self {
        let mode = if criteria.favorites_only { ViewMode::Favorites } else { ViewMode::All };
        let cards = filter_prices(snapshot, criteria)
            .into_iter()
            .map(|record| PriceCard::from_record(record, snapshot))
            .collect();
        Self { mode, cards }
    }

    pub fn cards(&self) -> &[PriceCard] {
        &self.cards
    }

    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{price, price_with_change};

    #[test]
    fn zero_change_points_up() {
        assert_eq!(PriceChange::from_signed(0.0).direction, Direction::Up);
        let down = PriceChange::from_signed(-2.5);
        assert_eq!(down.direction, Direction::Down);
        assert_eq!(down.magnitude, 2.5);
    }

    #[test]
    fn projection_carries_favorite_status_and_mode() {
        let snapshot = CatalogSnapshot::new()
            .with_prices(vec![
                price_with_change("1", "PVC K57", "Pune", -0.8),
                price("2", "LD GP", "Indore"),
            ])
            .with_favorites(["LD GP"]);

        let all = FilteredView::project(&snapshot, &FilterCriteria::default());
        assert_eq!(all.mode(), ViewMode::All);
        assert_eq!(all.count(), 2);
        assert!(!all.cards()[0].is_favorite);
        assert_eq!(all.cards()[0].change.direction, Direction::Down);
        assert!(all.cards()[1].is_favorite);

        let favorites =
            FilteredView::project(&snapshot, &FilterCriteria::new().with_favorites_only(true));
        assert_eq!(favorites.mode(), ViewMode::Favorites);
        assert_eq!(favorites.mode().heading(), "Your Favorite Grades");
        assert_eq!(favorites.count(), 1);
        assert_eq!(favorites.cards()[0].product, "LD GP");
    }
}
