//! The market ledger
//!
//! Owned, encapsulated in-memory state: an ordered collection of market
//! items, most-recent-first. The ledger assigns ids and `last_updated`
//! markers; callers hand it only pre-validated input. It performs no I/O
//! and holds no locks — serialization of writers is the embedder's job.

use chrono::Utc;
use tracing::debug;

use crate::error::MarketError;
use crate::validate::NormalizedPatch;
use types::ids::ItemId;
use types::market::{MarketItem, NormalizedEntry};

/// Ordered in-memory collection of market price records.
///
/// Created empty at process start; nothing is persisted across restarts.
#[derive(Debug, Default)]
pub struct MarketLedger {
    // Front of the vec is the most recently created item.
    items: Vec<MarketItem>,
}

impl MarketLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of all items, most-recent-first.
    pub fn list(&self) -> &[MarketItem] {
        &self.items
    }

    /// Number of items currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the ledger holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up one item by id.
    pub fn get(&self, id: ItemId) -> Option<&MarketItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Insert a validated entry at the front, assigning a fresh id and
    /// setting `last_updated` to now. Infallible for valid input.
    pub fn create(&mut self, entry: NormalizedEntry) -> MarketItem {
        let item = MarketItem {
            id: ItemId::new(),
            name: entry.name,
            category: entry.category,
            price: entry.price,
            region: entry.region,
            last_updated: Utc::now(),
        };
        debug!(item_id = %item.id, name = %item.name, "ledger insert");
        self.items.insert(0, item.clone());
        item
    }

    /// Merge a validated patch over an existing item.
    ///
    /// Absent fields keep their prior value; `last_updated` is recomputed;
    /// the item's position in the ordering is preserved.
    pub fn update(&mut self, id: ItemId, patch: NormalizedPatch) -> Result<MarketItem, MarketError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(MarketError::NotFound(id))?;

        if let Some(name) = patch.name {
            item.name = name;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }
        if let Some(region) = patch.region {
            item.region = region;
        }
        item.last_updated = Utc::now();

        debug!(item_id = %id, "ledger update");
        Ok(item.clone())
    }

    /// Remove an item by id.
    pub fn delete(&mut self, id: ItemId) -> Result<(), MarketError> {
        let idx = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(MarketError::NotFound(id))?;
        self.items.remove(idx);
        debug!(item_id = %id, "ledger delete");
        Ok(())
    }
}
