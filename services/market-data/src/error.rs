//! Error taxonomy for the market data core
//!
//! Four outcomes, kept distinct all the way to the caller: missing
//! authentication, insufficient role, a failed field validation, and an
//! unknown item id. A validation failure on an individual bulk row is
//! recovered inside the batch and never surfaces through this type.

use thiserror::Error;
use types::ids::ItemId;

/// Rejection produced by the entry validator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing or empty field: {0}")]
    MissingField(&'static str),

    #[error("price must be a finite number greater than zero")]
    InvalidPrice,
}

/// Top-level error for market operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarketError {
    /// A mutating operation was attempted without a principal.
    #[error("authentication required")]
    Unauthorized,

    /// The principal lacks the admin role.
    #[error("admin role required")]
    Forbidden,

    /// A single-item create/update carried an invalid field.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Update/delete on an id the ledger does not hold.
    #[error("no market item with id {0}")]
    NotFound(ItemId),
}
