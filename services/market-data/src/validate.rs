//! Entry validation and normalization
//!
//! Pure functions that turn a candidate record (from a JSON body or one CSV
//! row) into a `NormalizedEntry`, or reject it. A rejection never produces a
//! partial record.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::ValidationError;
use types::market::NormalizedEntry;

/// A price as supplied by the caller: a JSON number, or a numeric string
/// (the only shape a CSV field can carry).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PriceField {
    Number(f64),
    Text(String),
}

/// An unvalidated candidate record. All fields optional; the validator
/// decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryDraft {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<PriceField>,
    pub region: Option<String>,
}

/// A partial update: absent fields keep their prior value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<PriceField>,
    pub region: Option<String>,
}

/// A validated partial update, ready to merge over an existing item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub region: Option<String>,
}

impl NormalizedPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.price.is_none()
            && self.region.is_none()
    }
}

/// Validate a full candidate record.
///
/// `name`, `category`, `region` must be present and non-empty after
/// trimming; `price` must coerce to a finite decimal strictly greater
/// than zero.
pub fn validate_entry(draft: &EntryDraft) -> Result<NormalizedEntry, ValidationError> {
    let name = required_text("name", draft.name.as_deref())?;
    let category = required_text("category", draft.category.as_deref())?;
    let price = match &draft.price {
        Some(field) => coerce_price(field)?,
        None => return Err(ValidationError::MissingField("price")),
    };
    let region = required_text("region", draft.region.as_deref())?;

    Ok(NormalizedEntry {
        name,
        category,
        price,
        region,
    })
}

/// Validate the fields present on a partial update.
///
/// The price invariant (> 0, finite) must hold after an update too, so a
/// supplied price goes through the same coercion as on create, and a
/// supplied text field must still be non-empty after trimming.
pub fn validate_patch(patch: &ItemPatch) -> Result<NormalizedPatch, ValidationError> {
    let mut normalized = NormalizedPatch::default();

    if let Some(name) = patch.name.as_deref() {
        normalized.name = Some(required_text("name", Some(name))?);
    }
    if let Some(category) = patch.category.as_deref() {
        normalized.category = Some(required_text("category", Some(category))?);
    }
    if let Some(price) = &patch.price {
        normalized.price = Some(coerce_price(price)?);
    }
    if let Some(region) = patch.region.as_deref() {
        normalized.region = Some(required_text("region", Some(region))?);
    }

    Ok(normalized)
}

fn required_text(field: &'static str, value: Option<&str>) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn coerce_price(field: &PriceField) -> Result<Decimal, ValidationError> {
    let price = match field {
        // from_f64 is None for NaN and infinities
        PriceField::Number(value) => Decimal::from_f64(*value),
        PriceField::Text(text) => text.trim().parse::<Decimal>().ok(),
    };
    match price {
        Some(p) if p > Decimal::ZERO => Ok(p),
        _ => Err(ValidationError::InvalidPrice),
    }
}
