//! # Domain Types
//!
//! Core domain types for the inventory model.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Domain Types                          │
//! │                                                             │
//! │  ┌───────────────────┐        ┌───────────────────┐         │
//! │  │      Part         │        │     Product       │         │
//! │  │  ───────────────  │        │  ───────────────  │         │
//! │  │  part_id (i32)    │◄───────│  product_id (i32) │         │
//! │  │  name             │  by ID │  name             │         │
//! │  │  price (Money)    │        │  price (Money)    │         │
//! │  │  in_stock/min/max │        │  in_stock/min/max │         │
//! │  │  source:          │        │  associated_parts │         │
//! │  │    InHouse        │        │    Vec<i32>       │         │
//! │  │    Outsourced     │        │                   │         │
//! │  └───────────────────┘        └───────────────────┘         │
//! │                                                             │
//! │  IDs are assigned by the Inventory repository; 0 means      │
//! │  "not persisted yet".                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Optional numeric fields use sentinel values (see the crate root
//! constants) instead of `Option`, so that "left blank" and "supplied
//! but unparsable" stay distinguishable all the way into validation.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::{UNSET_BOUND, UNSET_PRICE};

// =============================================================================
// Part
// =============================================================================

/// Where a part comes from. Fixed when the part is constructed; there is
/// no way to flip a part between variants afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartSource {
    /// Manufactured on site, on the machine with the given id.
    InHouse { machine_id: i32 },
    /// Purchased from an outside company.
    Outsourced { company_name: String },
}

/// An interchangeable inventory part.
///
/// Common fields are plain mutable data; only the variant is sealed.
/// A part fresh out of [`Part::in_house`] / [`Part::outsourced`] carries
/// the unset sentinels and `part_id` 0 until the repository assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Unique identifier, assigned by the repository. 0 = not persisted.
    pub part_id: i32,

    /// Display name shown in part tables.
    pub name: String,

    /// Unit price. `UNSET_PRICE` until the form supplies one.
    pub price: Money,

    /// Current stock level.
    pub in_stock: i32,

    /// Minimum stock bound. `UNSET_BOUND` / `INVALID_BOUND` sentinels apply.
    pub min: i32,

    /// Maximum stock bound. `UNSET_BOUND` / `INVALID_BOUND` sentinels apply.
    pub max: i32,

    source: PartSource,
}

impl Part {
    /// Creates a part with the given source and all common fields at
    /// their defaults.
    pub fn new(source: PartSource) -> Self {
        Part {
            part_id: 0,
            name: String::new(),
            price: UNSET_PRICE,
            in_stock: 0,
            min: UNSET_BOUND,
            max: UNSET_BOUND,
            source,
        }
    }

    /// Creates an in-house part. Pass `UNSET_MACHINE_ID` when no machine
    /// id was supplied.
    pub fn in_house(machine_id: i32) -> Self {
        Part::new(PartSource::InHouse { machine_id })
    }

    /// Creates an outsourced part.
    pub fn outsourced(company_name: impl Into<String>) -> Self {
        Part::new(PartSource::Outsourced {
            company_name: company_name.into(),
        })
    }

    /// The part's source variant.
    #[inline]
    pub fn source(&self) -> &PartSource {
        &self.source
    }

    /// The machine id for an in-house part, `None` for outsourced.
    pub fn machine_id(&self) -> Option<i32> {
        match self.source {
            PartSource::InHouse { machine_id } => Some(machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    /// The company name for an outsourced part, `None` for in-house.
    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::InHouse { .. } => None,
            PartSource::Outsourced { company_name } => Some(company_name),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product assembled from associated parts.
///
/// Associations are held as part IDs, not part values: resolving an id
/// through the repository always observes the part's current state, and
/// the product never owns part lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned by the repository. 0 = not persisted.
    pub product_id: i32,

    /// Display name shown in product tables.
    pub name: String,

    /// Sale price. Must cover the sum of associated part prices.
    pub price: Money,

    /// Current stock level.
    pub in_stock: i32,

    /// Minimum stock bound. `UNSET_BOUND` / `INVALID_BOUND` sentinels apply.
    pub min: i32,

    /// Maximum stock bound. `UNSET_BOUND` / `INVALID_BOUND` sentinels apply.
    pub max: i32,

    associated_parts: Vec<i32>,
}

impl Product {
    /// Creates a product with no associations and all fields at their
    /// defaults.
    pub fn new() -> Self {
        Product {
            product_id: 0,
            name: String::new(),
            price: UNSET_PRICE,
            in_stock: 0,
            min: UNSET_BOUND,
            max: UNSET_BOUND,
            associated_parts: Vec::new(),
        }
    }

    /// Appends a part association.
    ///
    /// Duplicates are permitted; a part associated twice counts twice in
    /// the parts-price sum.
    pub fn add_associated_part(&mut self, part_id: i32) {
        self.associated_parts.push(part_id);
    }

    /// Removes the first association matching `part_id`.
    ///
    /// Returns whether a match existed.
    pub fn remove_associated_part(&mut self, part_id: i32) -> bool {
        match self.associated_parts.iter().position(|id| *id == part_id) {
            Some(index) => {
                self.associated_parts.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether `part_id` is currently associated.
    pub fn has_associated_part(&self, part_id: i32) -> bool {
        self.associated_parts.contains(&part_id)
    }

    /// The associated part IDs, in association order.
    #[inline]
    pub fn associated_part_ids(&self) -> &[i32] {
        &self.associated_parts
    }
}

/// A default product carries the unset sentinels, not zeroes.
impl Default for Product {
    fn default() -> Self {
        Product::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UNSET_MACHINE_ID, UNSET_PRICE};

    #[test]
    fn test_new_part_carries_unset_sentinels() {
        let part = Part::in_house(UNSET_MACHINE_ID);

        assert_eq!(part.part_id, 0);
        assert_eq!(part.price, UNSET_PRICE);
        assert_eq!(part.in_stock, 0);
        assert_eq!(part.min, UNSET_BOUND);
        assert_eq!(part.max, UNSET_BOUND);
        assert_eq!(part.machine_id(), Some(UNSET_MACHINE_ID));
        assert_eq!(part.company_name(), None);
    }

    #[test]
    fn test_variant_accessors() {
        let in_house = Part::in_house(42);
        assert_eq!(in_house.machine_id(), Some(42));
        assert_eq!(in_house.company_name(), None);

        let outsourced = Part::outsourced("Acme Fasteners");
        assert_eq!(outsourced.machine_id(), None);
        assert_eq!(outsourced.company_name(), Some("Acme Fasteners"));
    }

    #[test]
    fn test_part_source_wire_shape() {
        // The tagged-union shape is part of the embedding contract.
        let outsourced = PartSource::Outsourced {
            company_name: "Acme Fasteners".to_string(),
        };
        let json = serde_json::to_value(&outsourced).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"outsourced": {"company_name": "Acme Fasteners"}})
        );

        let in_house = PartSource::InHouse { machine_id: 7 };
        let json = serde_json::to_value(&in_house).unwrap();
        assert_eq!(json, serde_json::json!({"in_house": {"machine_id": 7}}));
    }

    #[test]
    fn test_product_association_order_and_duplicates() {
        let mut product = Product::new();
        product.add_associated_part(3);
        product.add_associated_part(1);
        product.add_associated_part(3);

        assert_eq!(product.associated_part_ids(), &[3, 1, 3]);
        assert!(product.has_associated_part(3));
        assert!(!product.has_associated_part(2));
    }

    #[test]
    fn test_remove_associated_part_removes_first_match() {
        let mut product = Product::new();
        product.add_associated_part(3);
        product.add_associated_part(1);
        product.add_associated_part(3);

        assert!(product.remove_associated_part(3));
        assert_eq!(product.associated_part_ids(), &[1, 3]);

        assert!(!product.remove_associated_part(99));
        assert_eq!(product.associated_part_ids(), &[1, 3]);
    }
}
