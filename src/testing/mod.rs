mod fake_catalog_gateway;

pub use fake_catalog_gateway::{FakeCatalogGateway, FavoriteCall};

use chrono::{TimeZone, Utc};

use crate::domain::PriceRecord;

/// Price record with a flat change and fixed timestamp.
pub fn price(id: &str, product: &str, location: &str) -> PriceRecord {
    price_with_change(id, product, location, 0.0)
}

pub fn price_with_change(id: &str, product: &str, location: &str, change: f64) -> PriceRecord {
    PriceRecord {
        id: id.to_string(),
        product: product.to_string(),
        location: location.to_string(),
        price_range: "₹90 - ₹95".to_string(),
        price_change: change,
        price_change_percent: format!("{:+.2}%", change),
        transit_time: "1 DAY".to_string(),
        last_updated: Utc.with_ymd_and_hms(2025, 6, 2, 9, 15, 30).unwrap(),
        min_price: Some(90.0),
        max_price: Some(95.0),
        currency: Some("INR".to_string()),
    }
}
