//! The market service facade
//!
//! Request-facing composition root: every operation runs the authorization
//! guard first, then validation or batch parsing, then the ledger mutation.
//! Single-item calls validate fully before touching the ledger, so a
//! failure never leaves it partially mutated.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::authz::{authorize, Operation};
use crate::csv::parse_csv;
use crate::error::MarketError;
use crate::ledger::MarketLedger;
use crate::validate::{validate_entry, validate_patch, EntryDraft, ItemPatch};
use types::ids::ItemId;
use types::market::MarketItem;
use types::principal::Principal;

/// A bulk ingestion request: CSV text or a JSON array of candidates.
///
/// Exactly one of the two is expected. When both are present `items` wins;
/// when neither is, the import is a no-op.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BulkRequest {
    pub csv: Option<String>,
    // Raw values so one malformed element is skipped, not a request error.
    pub items: Option<Vec<serde_json::Value>>,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulkOutcome {
    /// Records inserted into the ledger.
    pub added: usize,
    /// Candidates skipped as malformed or invalid.
    pub rejected: usize,
}

/// Facade over the ledger, guard, validator, and CSV parser.
///
/// Owns the ledger outright; embedders that run operations from parallel
/// tasks must serialize mutations behind a single coarse lock.
#[derive(Debug, Default)]
pub struct MarketService {
    ledger: MarketLedger,
}

impl MarketService {
    /// Create a service over an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// List all market items, most-recent-first.
    pub fn list_items(&self, principal: Option<&Principal>) -> Result<Vec<MarketItem>, MarketError> {
        authorize(principal, Operation::Read)?;
        Ok(self.ledger.list().to_vec())
    }

    /// Create one item from a candidate record.
    pub fn create_item(
        &mut self,
        principal: Option<&Principal>,
        draft: &EntryDraft,
    ) -> Result<MarketItem, MarketError> {
        authorize(principal, Operation::Mutate)?;
        let entry = validate_entry(draft)?;
        let item = self.ledger.create(entry);
        info!(item_id = %item.id, name = %item.name, "market item created");
        Ok(item)
    }

    /// Apply a partial update to an existing item.
    pub fn update_item(
        &mut self,
        principal: Option<&Principal>,
        id: ItemId,
        patch: &ItemPatch,
    ) -> Result<MarketItem, MarketError> {
        authorize(principal, Operation::Mutate)?;
        let patch = validate_patch(patch)?;
        let item = self.ledger.update(id, patch)?;
        info!(item_id = %id, "market item updated");
        Ok(item)
    }

    /// Delete an item by id.
    pub fn delete_item(
        &mut self,
        principal: Option<&Principal>,
        id: ItemId,
    ) -> Result<(), MarketError> {
        authorize(principal, Operation::Mutate)?;
        self.ledger.delete(id)?;
        info!(item_id = %id, "market item deleted");
        Ok(())
    }

    /// Ingest a batch of candidate records.
    ///
    /// The guard runs once for the whole batch. Individual invalid rows
    /// are skipped and counted; they never fail the request.
    pub fn bulk_import(
        &mut self,
        principal: Option<&Principal>,
        request: &BulkRequest,
    ) -> Result<BulkOutcome, MarketError> {
        authorize(principal, Operation::Mutate)?;

        let outcome = if let Some(items) = &request.items {
            self.import_json(items)
        } else if let Some(csv) = &request.csv {
            self.import_csv(csv)
        } else {
            BulkOutcome {
                added: 0,
                rejected: 0,
            }
        };

        info!(
            added = outcome.added,
            rejected = outcome.rejected,
            "bulk import finished"
        );
        Ok(outcome)
    }

    fn import_json(&mut self, items: &[serde_json::Value]) -> BulkOutcome {
        let mut outcome = BulkOutcome {
            added: 0,
            rejected: 0,
        };
        for raw in items {
            let draft: EntryDraft = match serde_json::from_value(raw.clone()) {
                Ok(draft) => draft,
                Err(err) => {
                    debug!(%err, "skipping malformed bulk item");
                    outcome.rejected += 1;
                    continue;
                }
            };
            match validate_entry(&draft) {
                Ok(entry) => {
                    self.ledger.create(entry);
                    outcome.added += 1;
                }
                Err(err) => {
                    debug!(%err, "skipping invalid bulk item");
                    outcome.rejected += 1;
                }
            }
        }
        outcome
    }

    fn import_csv(&mut self, csv: &str) -> BulkOutcome {
        let batch = parse_csv(csv);
        let added = batch.entries.len();
        for entry in batch.entries {
            self.ledger.create(entry);
        }
        BulkOutcome {
            added,
            rejected: batch.rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::PriceField;
    use serde_json::json;
    use types::principal::Role;
    use uuid::Uuid;

    fn admin() -> Principal {
        Principal {
            id: Uuid::now_v7(),
            username: "admin".to_string(),
            role: Role::Admin,
        }
    }

    fn farmer() -> Principal {
        Principal {
            id: Uuid::now_v7(),
            username: "farmer".to_string(),
            role: Role::Farmer,
        }
    }

    fn tomato() -> EntryDraft {
        EntryDraft {
            name: Some("Tomato".to_string()),
            category: Some("Vegetable".to_string()),
            price: Some(PriceField::Number(85.0)),
            region: Some("Lahore".to_string()),
        }
    }

    #[test]
    fn test_anonymous_list_allowed() {
        let service = MarketService::new();
        assert!(service.list_items(None).unwrap().is_empty());
    }

    #[test]
    fn test_create_requires_admin() {
        let mut service = MarketService::new();
        assert_eq!(
            service.create_item(None, &tomato()),
            Err(MarketError::Unauthorized)
        );
        assert_eq!(
            service.create_item(Some(&farmer()), &tomato()),
            Err(MarketError::Forbidden)
        );
        assert!(service.create_item(Some(&admin()), &tomato()).is_ok());
    }

    #[test]
    fn test_guard_runs_before_validation() {
        // A farmer with a hopeless payload gets Forbidden, not Validation.
        let mut service = MarketService::new();
        let result = service.create_item(Some(&farmer()), &EntryDraft::default());
        assert_eq!(result, Err(MarketError::Forbidden));
    }

    #[test]
    fn test_invalid_create_leaves_ledger_untouched() {
        let mut service = MarketService::new();
        let result = service.create_item(Some(&admin()), &EntryDraft::default());
        assert!(matches!(result, Err(MarketError::Validation(_))));
        assert!(service.list_items(None).unwrap().is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut service = MarketService::new();
        let missing = ItemId::new();
        assert_eq!(
            service.update_item(Some(&admin()), missing, &ItemPatch::default()),
            Err(MarketError::NotFound(missing))
        );
    }

    #[test]
    fn test_bulk_json_isolates_bad_items() {
        let mut service = MarketService::new();
        let request = BulkRequest {
            csv: None,
            items: Some(vec![
                json!({"name": "Onion", "category": "Vegetable", "price": 60, "region": "Islamabad"}),
                json!({"name": "", "category": "x", "price": 10, "region": "y"}),
            ]),
        };
        let outcome = service.bulk_import(Some(&admin()), &request).unwrap();
        assert_eq!(
            outcome,
            BulkOutcome {
                added: 1,
                rejected: 1
            }
        );
        let items = service.list_items(None).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Onion");
    }

    #[test]
    fn test_bulk_json_accepts_string_prices() {
        let mut service = MarketService::new();
        let request = BulkRequest {
            csv: None,
            items: Some(vec![
                json!({"name": "Wheat", "category": "Grain", "price": "120", "region": "Multan"}),
                json!(null),
            ]),
        };
        let outcome = service.bulk_import(Some(&admin()), &request).unwrap();
        assert_eq!(outcome.added, 1);
        assert_eq!(outcome.rejected, 1);
    }

    #[test]
    fn test_bulk_csv_path() {
        let mut service = MarketService::new();
        let request = BulkRequest {
            csv: Some(
                "Name,Category,Price,Region\n\
                 Tomato,Vegetable,85,Lahore\n\
                 Bad,Row\n\
                 Potato,Vegetable,45,Karachi"
                    .to_string(),
            ),
            items: None,
        };
        let outcome = service.bulk_import(Some(&admin()), &request).unwrap();
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.rejected, 1);

        // Last CSV row ends up first (prepend per row).
        let items = service.list_items(None).unwrap();
        assert_eq!(items[0].name, "Potato");
        assert_eq!(items[1].name, "Tomato");
    }

    #[test]
    fn test_bulk_with_neither_source_is_noop() {
        let mut service = MarketService::new();
        let outcome = service
            .bulk_import(Some(&admin()), &BulkRequest::default())
            .unwrap();
        assert_eq!(
            outcome,
            BulkOutcome {
                added: 0,
                rejected: 0
            }
        );
    }

    #[test]
    fn test_bulk_guard_denies_before_parsing() {
        let mut service = MarketService::new();
        let request = BulkRequest {
            csv: Some("h\nTomato,Vegetable,85,Lahore".to_string()),
            items: None,
        };
        assert_eq!(
            service.bulk_import(Some(&farmer()), &request),
            Err(MarketError::Forbidden)
        );
        assert!(service.list_items(None).unwrap().is_empty());
    }
}
