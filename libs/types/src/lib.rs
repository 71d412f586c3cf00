//! Types library for the agri-market portal
//!
//! This library provides the domain type definitions shared between the
//! market-data core and the HTTP gateway.
//!
//! # Modules
//! - `ids`: Unique identifiers (ItemId)
//! - `market`: Market price records (MarketItem, NormalizedEntry)
//! - `principal`: Authenticated identity and roles (Principal, Role)

// Public modules
pub mod ids;
pub mod market;
pub mod principal;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::market::*;
    pub use crate::principal::*;
}
