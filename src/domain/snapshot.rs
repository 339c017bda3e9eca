//! In-memory copy of catalog data.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::PriceRecord;

/// The client's current copy of catalog data.
///
/// Prices keep the order in which the service returned them; that order is
/// the default display order. Favorites are keyed by product name, so every
/// record sharing a product shares favorite status. A favorite naming a
/// product that is not in the current price list is kept and matches nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    prices: Vec<PriceRecord>,
    locations: Vec<String>,
    polymer_types: Vec<String>,
    favorites: BTreeSet<String>,
}

impl CatalogSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prices(mut self, prices: Vec<PriceRecord>) -> Self {
        self.replace_prices(prices);
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replace_locations(locations.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_polymer_types<I, S>(mut self, polymer_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replace_polymer_types(polymer_types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_favorites<I, S>(mut self, favorites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replace_favorites(favorites.into_iter().map(Into::into).collect());
        self
    }

    /// Price records in fetch order.
    pub fn prices(&self) -> &[PriceRecord] {
        &self.prices
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    pub fn polymer_types(&self) -> &[String] {
        &self.polymer_types
    }

    pub fn favorites(&self) -> &BTreeSet<String> {
        &self.favorites
    }

    pub fn is_favorite(&self, product: &str) -> bool {
        self.favorites.contains(product)
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Replace the price collection wholesale.
    ///
    /// A repeated id keeps the position of its first occurrence and the
    /// contents of its last.
    pub(crate) fn replace_prices(&mut self, prices: Vec<PriceRecord>) {
        let mut ordered: Vec<PriceRecord> = Vec::with_capacity(prices.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(prices.len());

        for record in prices {
            match index.get(&record.id) {
                Some(&position) => ordered[position] = record,
                None => {
                    index.insert(record.id.clone(), ordered.len());
                    ordered.push(record);
                }
            }
        }

        self.prices = ordered;
    }

    pub(crate) fn replace_locations(&mut self, locations: Vec<String>) {
        self.locations = dedup_preserving_order(locations);
    }

    pub(crate) fn replace_polymer_types(&mut self, polymer_types: Vec<String>) {
        self.polymer_types = dedup_preserving_order(polymer_types);
    }

    pub(crate) fn replace_favorites(&mut self, favorites: Vec<String>) {
        self.favorites = favorites.into_iter().collect();
    }

    /// Returns `true` when the product was not already a favorite.
    pub(crate) fn insert_favorite(&mut self, product: &str) -> bool {
        self.favorites.insert(product.to_string())
    }

    /// Returns `true` when the product was a favorite.
    pub(crate) fn remove_favorite(&mut self, product: &str) -> bool {
        self.favorites.remove(product)
    }
}

fn dedup_preserving_order(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    values.into_iter().filter(|value| seen.insert(value.clone())).collect()
}
