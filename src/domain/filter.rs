//! Filtered projection of the price collection.
//!
//! The projection is a pure function of the snapshot and the criteria. It is
//! recomputed from scratch on every change and never re-sorts: the output
//! keeps the stored order of the price collection.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{CatalogSnapshot, PriceRecord};

/// User-controlled filter state. Empty strings and `false` mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against `product`.
    #[serde(default)]
    pub search_query: String,
    /// Case-insensitive substring match against `location`.
    #[serde(default)]
    pub location: String,
    /// Case-sensitive prefix match against `product`.
    #[serde(default)]
    pub polymer_type_prefix: String,
    /// Keep only products in the favorites set.
    #[serde(default)]
    pub favorites_only: bool,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_polymer_type_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.polymer_type_prefix = prefix.into();
        self
    }

    pub fn with_favorites_only(mut self, favorites_only: bool) -> Self {
        self.favorites_only = favorites_only;
        self
    }

    /// True when no predicate is active.
    pub fn is_unconstrained(&self) -> bool {
        self.search_query.is_empty()
            && self.location.is_empty()
            && self.polymer_type_prefix.is_empty()
            && !self.favorites_only
    }
}

/// Project the snapshot's prices through every active predicate.
pub fn filter_prices<'a>(
    snapshot: &'a CatalogSnapshot,
    criteria: &FilterCriteria,
) -> Vec<&'a PriceRecord> {
    let predicates = ActivePredicates::new(criteria, snapshot.favorites());
    snapshot.prices().iter().filter(|record| predicates.matches(record)).collect()
}

/// Criteria with lowercase needles computed once per projection.
struct ActivePredicates<'a> {
    search: Option<String>,
    location: Option<String>,
    prefix: Option<&'a str>,
    favorites: Option<&'a BTreeSet<String>>,
}

impl<'a> ActivePredicates<'a> {
    fn new(criteria: &'a FilterCriteria, favorites: &'a BTreeSet<String>) -> Self {
        Self {
            search: non_empty(&criteria.search_query).map(str::to_lowercase),
            location: non_empty(&criteria.location).map(str::to_lowercase),
            prefix: non_empty(&criteria.polymer_type_prefix),
            favorites: criteria.favorites_only.then_some(favorites),
        }
    }

    // Favorites lookup last: string checks are cheaper.
    fn matches(&self, record: &PriceRecord) -> bool {
        if let Some(needle) = &self.search {
            if !record.product.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(needle) = &self.location {
            if !record.location.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if let Some(prefix) = self.prefix {
            if !record.product.starts_with(prefix) {
                return false;
            }
        }
        if let Some(favorites) = self.favorites {
            if !favorites.contains(&record.product) {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}
