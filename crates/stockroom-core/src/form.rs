//! # Form DTOs
//!
//! Raw form state and its conversion into entities.
//!
//! The UI layer owns widgets and events; what crosses into the domain is
//! one of these DTOs, all fields still strings. `parse()` applies the
//! sentinel policy so that no parse failure ever becomes an error:
//!
//! | field        | blank              | unparsable            |
//! |--------------|--------------------|-----------------------|
//! | `id`         | 0 (not persisted)  | 0                     |
//! | `in_stock`   | 0                  | 0                     |
//! | `price`      | `UNSET_PRICE`      | `UNSET_PRICE`         |
//! | `min`/`max`  | `UNSET_BOUND`      | `INVALID_BOUND`       |
//! | `machine_id` | `UNSET_MACHINE_ID` | `INVALID_MACHINE_ID`  |
//!
//! The invalid markers survive into validation, which turns them into
//! user-facing messages; everything else validates on its merits.
//!
//! `from_part` / `from_product` run the conversion the other way when an
//! existing entity is loaded for modification, rendering unset sentinels
//! back to blank fields.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{Part, PartSource, Product};
use crate::{INVALID_BOUND, INVALID_MACHINE_ID, UNSET_BOUND, UNSET_MACHINE_ID, UNSET_PRICE};

// =============================================================================
// Part Form
// =============================================================================

/// Variant-specific form fields, mirroring the in-house/outsourced
/// selection on the part screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceFields {
    InHouse { machine_id: String },
    Outsourced { company_name: String },
}

/// The part screen defaults to the in-house selection.
impl Default for SourceFields {
    fn default() -> Self {
        SourceFields::InHouse {
            machine_id: String::new(),
        }
    }
}

/// Raw state of the add/modify part form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartForm {
    pub id: String,
    pub name: String,
    pub in_stock: String,
    pub price: String,
    pub min: String,
    pub max: String,
    pub source: SourceFields,
}

impl PartForm {
    /// Converts the form into a candidate part, applying the sentinel
    /// policy. Never fails; validation decides what the sentinels mean.
    pub fn parse(&self) -> Part {
        let source = match &self.source {
            SourceFields::InHouse { machine_id } => PartSource::InHouse {
                machine_id: parse_optional_count(machine_id, UNSET_MACHINE_ID, INVALID_MACHINE_ID),
            },
            SourceFields::Outsourced { company_name } => PartSource::Outsourced {
                company_name: company_name.clone(),
            },
        };

        let mut part = Part::new(source);
        part.part_id = self.id.trim().parse().unwrap_or(0);
        part.name = self.name.clone();
        if let Some(in_stock) = parse_count(&self.in_stock) {
            part.in_stock = in_stock;
        }
        if let Some(price) = Money::parse_decimal(&self.price) {
            part.price = price;
        }
        part.min = parse_optional_count(&self.min, UNSET_BOUND, INVALID_BOUND);
        part.max = parse_optional_count(&self.max, UNSET_BOUND, INVALID_BOUND);
        part
    }

    /// Fills the form from an existing part, for the modify flow.
    /// Unset sentinels come back as blank fields.
    pub fn from_part(part: &Part) -> Self {
        let source = match part.source() {
            PartSource::InHouse { machine_id } => SourceFields::InHouse {
                machine_id: if *machine_id == UNSET_MACHINE_ID {
                    String::new()
                } else {
                    machine_id.to_string()
                },
            },
            PartSource::Outsourced { company_name } => SourceFields::Outsourced {
                company_name: company_name.clone(),
            },
        };

        PartForm {
            id: id_field(part.part_id),
            name: part.name.clone(),
            in_stock: part.in_stock.to_string(),
            price: price_field(part.price),
            min: bound_field(part.min),
            max: bound_field(part.max),
            source,
        }
    }
}

// =============================================================================
// Product Form
// =============================================================================

/// Raw state of the add/modify product form.
///
/// `associated_parts` accumulates the IDs picked from the part search
/// table; association is by ID, so the form never holds part data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub in_stock: String,
    pub price: String,
    pub min: String,
    pub max: String,
    pub associated_parts: Vec<i32>,
}

impl ProductForm {
    /// Converts the form into a candidate product, applying the sentinel
    /// policy. Never fails.
    pub fn parse(&self) -> Product {
        let mut product = Product::new();
        product.product_id = self.id.trim().parse().unwrap_or(0);
        product.name = self.name.clone();
        if let Some(in_stock) = parse_count(&self.in_stock) {
            product.in_stock = in_stock;
        }
        if let Some(price) = Money::parse_decimal(&self.price) {
            product.price = price;
        }
        product.min = parse_optional_count(&self.min, UNSET_BOUND, INVALID_BOUND);
        product.max = parse_optional_count(&self.max, UNSET_BOUND, INVALID_BOUND);
        for part_id in &self.associated_parts {
            product.add_associated_part(*part_id);
        }
        product
    }

    /// Fills the form from an existing product, for the modify flow.
    pub fn from_product(product: &Product) -> Self {
        ProductForm {
            id: id_field(product.product_id),
            name: product.name.clone(),
            in_stock: product.in_stock.to_string(),
            price: price_field(product.price),
            min: bound_field(product.min),
            max: bound_field(product.max),
            associated_parts: product.associated_part_ids().to_vec(),
        }
    }
}

// =============================================================================
// Field Parsers
// =============================================================================

/// Digits-only non-negative integer, `None` otherwise.
fn parse_count(input: &str) -> Option<i32> {
    let input = input.trim();
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Three-state parse for optional numeric fields: blank stays `unset`,
/// anything unparsable becomes the `invalid` marker for validation to
/// report.
fn parse_optional_count(input: &str, unset: i32, invalid: i32) -> i32 {
    if input.trim().is_empty() {
        return unset;
    }
    parse_count(input).unwrap_or(invalid)
}

fn id_field(id: i32) -> String {
    if id == 0 {
        String::new()
    } else {
        id.to_string()
    }
}

fn price_field(price: Money) -> String {
    if price == UNSET_PRICE {
        String::new()
    } else {
        price.decimal_string()
    }
}

fn bound_field(bound: i32) -> String {
    if bound >= 0 {
        bound.to_string()
    } else {
        String::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
