//! Market price record types
//!
//! A `MarketItem` is the unit of record in the ledger; a `NormalizedEntry`
//! is a validated candidate that has not yet been assigned an id.

use crate::ids::ItemId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A commodity price record held by the market ledger.
///
/// Invariants:
/// - `id` is unique across the ledger's lifetime
/// - `name`, `category`, `region` are non-empty trimmed strings
/// - `price` is strictly positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketItem {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    /// Price per kilogram, currency-agnostic. Serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub region: String,
    /// Instant of the last create/update. Relative rendering ("just now")
    /// is a presentation concern.
    pub last_updated: DateTime<Utc>,
}

impl MarketItem {
    /// Check the record invariants hold.
    pub fn check_invariant(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.category.trim().is_empty()
            && !self.region.trim().is_empty()
            && self.price > Decimal::ZERO
    }
}

/// A validated market entry, ready for insertion.
///
/// Produced only by the entry validator; fields are trimmed and non-empty,
/// and `price` is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub name: String,
    pub category: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub region: String,
}
