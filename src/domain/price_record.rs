//! Price records as delivered by the catalog service.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A single quoted price for a product at a location.
///
/// Records are immutable once received. A refresh replaces the whole
/// collection rather than patching individual fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// Stable identifier assigned by the service, kept as text whether it
    /// arrives as a JSON string or number.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Product (grade) name. Search and favorites are keyed on this.
    pub product: String,
    /// Delivery location.
    pub location: String,
    /// Display string, e.g. `₹89 - ₹92.75`.
    pub price_range: String,
    /// Signed price movement.
    pub price_change: f64,
    /// Display string, e.g. `+1.25%`.
    pub price_change_percent: String,
    /// Display string, e.g. `2 DAYS`.
    pub transit_time: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// One day of price history for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date: DateTime<Utc>,
    pub price: f64,
}

/// Price history for a single product, newest first as served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    pub product: String,
    #[serde(default)]
    pub history: Vec<PricePoint>,
}

/// Parse a service timestamp.
///
/// Accepts RFC 3339 with an offset, or a naive ISO-8601 datetime which is
/// taken to be UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", raw)))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}
