//! Market Data Core
//!
//! The authoritative in-process record of commodity price entries and the
//! operations on it:
//! - Entry validation and normalization (JSON objects or CSV rows)
//! - CSV batch parsing with per-line failure isolation
//! - The in-memory market ledger (ordered most-recent-first)
//! - The single role-based authorization rule
//! - The request-facing service facade wiring guard → validation → ledger
//!
//! # Architecture
//!
//! ```text
//!        inbound operation
//!               │
//!          ┌────▼─────┐
//!          │  Guard   │  ← single Read/Mutate rule, checked first
//!          └────┬─────┘
//!       ┌───────┴────────┐
//!       │                │
//!  ┌────▼─────┐    ┌─────▼─────┐
//!  │ CRUD path│    │ bulk path │
//!  │ Validator│    │ CSV/JSON  │
//!  └────┬─────┘    │ Validator │
//!       │          └─────┬─────┘
//!       │                │
//!  ┌────▼────────────────▼────┐
//!  │       Market Ledger      │
//!  └──────────────────────────┘
//! ```

pub mod authz;
pub mod csv;
pub mod error;
pub mod ledger;
pub mod service;
pub mod validate;

pub use authz::{authorize, Operation};
pub use csv::{parse_csv, CsvBatch};
pub use error::{MarketError, ValidationError};
pub use ledger::MarketLedger;
pub use service::{BulkOutcome, BulkRequest, MarketService};
pub use validate::{validate_entry, validate_patch, EntryDraft, ItemPatch, NormalizedPatch, PriceField};
