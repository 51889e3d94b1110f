//! # Validation Module
//!
//! Save-rule validation for parts and products.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Save Flow                                │
//! │                                                             │
//! │  Form input (strings)                                       │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  form::parse — parse failures become sentinels, never       │
//! │       │        errors                                       │
//! │       ▼                                                     │
//! │  THIS MODULE — every rule evaluated, all violations         │
//! │       │        collected into one list                      │
//! │       ▼                                                     │
//! │  empty list → Inventory save    non-empty → UI shows the    │
//! │                                 joined messages, save       │
//! │                                 aborted                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The rules never short-circuit: a part with an empty name and no
//! price reports both problems in one pass. Validation is total over
//! the sentinel states the form layer produces, so it cannot fail —
//! it only describes.

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Part, Product};
use crate::{INVALID_BOUND, INVALID_MACHINE_ID, UNSET_PRICE};

/// Validates a candidate part, returning every violated rule.
///
/// An empty result means the part may be handed to the repository.
///
/// ## Example
/// ```rust
/// use stockroom_core::types::Part;
/// use stockroom_core::validation::validate_part;
/// use stockroom_core::{Money, UNSET_MACHINE_ID};
///
/// let mut part = Part::in_house(UNSET_MACHINE_ID);
/// part.name = "Hex bolt".to_string();
/// part.price = Money::from_cents(250);
///
/// assert!(validate_part(&part).is_empty());
/// ```
pub fn validate_part(part: &Part) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_stock_info(
        &part.name,
        part.price,
        part.in_stock,
        part.min,
        part.max,
        &mut errors,
    );

    // Only in-house parts carry a machine id to check.
    if part.machine_id() == Some(INVALID_MACHINE_ID) {
        errors.push(ValidationError::InvalidMachineId);
    }

    errors
}

/// Validates a candidate product, returning every violated rule.
///
/// `associated` is the product's association list resolved against the
/// repository immediately before the call (see
/// `Inventory::associated_parts`), so the price floor always reflects
/// current part prices. The sum is recomputed on every call.
pub fn validate_product(product: &Product, associated: &[&Part]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_stock_info(
        &product.name,
        product.price,
        product.in_stock,
        product.min,
        product.max,
        &mut errors,
    );

    if product.associated_part_ids().is_empty() {
        errors.push(ValidationError::NoAssociatedParts);
    }

    // The price floor is only meaningful once a price was supplied;
    // the missing price already produced its own message above.
    if product.price != UNSET_PRICE {
        let parts_total: Money = associated.iter().map(|part| part.price).sum();
        if product.price < parts_total {
            errors.push(ValidationError::PriceBelowPartsTotal {
                price: product.price,
                parts_total,
            });
        }
    }

    errors
}

/// Rules shared by parts and products: name, price, and the stock
/// bounds.
///
/// ## Bound states
/// - `UNSET_BOUND` (-1): left blank, no checks apply.
/// - `INVALID_BOUND` (-2): supplied but unparsable, reported on its own.
/// - `>= 0`: set; ordering and range checks apply.
fn validate_stock_info(
    name: &str,
    price: Money,
    in_stock: i32,
    min: i32,
    max: i32,
    errors: &mut Vec<ValidationError>,
) {
    if max == INVALID_BOUND {
        errors.push(ValidationError::InvalidMax);
    }

    if min == INVALID_BOUND {
        errors.push(ValidationError::InvalidMin);
    }

    if min >= 0 && max >= 0 && min > max {
        errors.push(ValidationError::MinAboveMax);
    }

    if min >= 0 && in_stock < min {
        errors.push(ValidationError::StockBelowMin);
    }

    if max >= 0 && in_stock > max {
        errors.push(ValidationError::StockAboveMax);
    }

    if name.trim().is_empty() {
        errors.push(ValidationError::NameRequired);
    }

    if price == UNSET_PRICE {
        errors.push(ValidationError::PriceRequired);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{INVALID_MACHINE_ID, UNSET_MACHINE_ID};

    fn valid_part(name: &str, cents: i64) -> Part {
        let mut part = Part::outsourced("Acme Fasteners");
        part.name = name.to_string();
        part.price = Money::from_cents(cents);
        part
    }

    fn valid_product(name: &str, cents: i64, part_ids: &[i32]) -> Product {
        let mut product = Product::new();
        product.name = name.to_string();
        product.price = Money::from_cents(cents);
        for id in part_ids {
            product.add_associated_part(*id);
        }
        product
    }

    #[test]
    fn test_valid_part_has_no_errors() {
        assert!(validate_part(&valid_part("Hex bolt", 250)).is_empty());
    }

    #[test]
    fn test_all_violations_reported_together() {
        // Empty name AND missing price: two distinct messages in one call.
        let part = Part::outsourced("Acme Fasteners");
        let errors = validate_part(&part);

        assert_eq!(errors.len(), 2);
        assert!(errors.contains(&ValidationError::NameRequired));
        assert!(errors.contains(&ValidationError::PriceRequired));
    }

    #[test]
    fn test_invalid_bound_markers_always_report() {
        let mut part = valid_part("Hex bolt", 250);
        part.min = crate::INVALID_BOUND;
        part.max = crate::INVALID_BOUND;

        let errors = validate_part(&part);
        assert!(errors.contains(&ValidationError::InvalidMin));
        assert!(errors.contains(&ValidationError::InvalidMax));
    }

    #[test]
    fn test_ordering_check_needs_both_bounds_set() {
        // min unset, max unparsable: only the unparsable marker reports,
        // no spurious ordering error from comparing sentinels.
        let mut part = valid_part("Hex bolt", 250);
        part.max = crate::INVALID_BOUND;

        let errors = validate_part(&part);
        assert_eq!(errors, vec![ValidationError::InvalidMax]);
    }

    #[test]
    fn test_min_above_max() {
        let mut part = valid_part("Hex bolt", 250);
        part.min = 10;
        part.max = 5;
        part.in_stock = 7;

        let errors = validate_part(&part);
        assert!(errors.contains(&ValidationError::MinAboveMax));
    }

    #[test]
    fn test_stock_outside_bounds() {
        let mut part = valid_part("Hex bolt", 250);
        part.min = 5;
        part.max = 10;

        part.in_stock = 3;
        assert!(validate_part(&part).contains(&ValidationError::StockBelowMin));

        part.in_stock = 12;
        assert!(validate_part(&part).contains(&ValidationError::StockAboveMax));

        part.in_stock = 10;
        assert!(validate_part(&part).is_empty());
    }

    #[test]
    fn test_zero_max_is_a_set_bound() {
        let mut part = valid_part("Hex bolt", 250);
        part.max = 0;
        part.in_stock = 5;

        assert!(validate_part(&part).contains(&ValidationError::StockAboveMax));
    }

    #[test]
    fn test_machine_id_states() {
        let mut part = valid_part("Bracket", 410);

        // Outsourced parts have no machine id rule.
        assert!(validate_part(&part).is_empty());

        part = Part::in_house(UNSET_MACHINE_ID);
        part.name = "Bracket".to_string();
        part.price = Money::from_cents(410);
        assert!(validate_part(&part).is_empty());

        part = Part::in_house(7);
        part.name = "Bracket".to_string();
        part.price = Money::from_cents(410);
        assert!(validate_part(&part).is_empty());

        part = Part::in_house(INVALID_MACHINE_ID);
        part.name = "Bracket".to_string();
        part.price = Money::from_cents(410);
        assert_eq!(validate_part(&part), vec![ValidationError::InvalidMachineId]);
    }

    #[test]
    fn test_product_requires_associated_parts() {
        let product = valid_product("Cabinet", 5000, &[]);
        assert!(validate_product(&product, &[]).contains(&ValidationError::NoAssociatedParts));
    }

    #[test]
    fn test_product_price_floor() {
        let bolt = valid_part("Bolt", 400);
        let panel = valid_part("Panel", 700);
        let resolved: Vec<&Part> = vec![&bolt, &panel];

        // $10.00 product against $4.00 + $7.00 of parts: rejected.
        let product = valid_product("Cabinet", 1000, &[1, 2]);
        let errors = validate_product(&product, &resolved);
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::PriceBelowPartsTotal { parts_total, .. }
                if parts_total.cents() == 1100
        )));

        // $12.00 covers the parts.
        let product = valid_product("Cabinet", 1200, &[1, 2]);
        assert!(validate_product(&product, &resolved).is_empty());

        // Exactly the sum is allowed.
        let product = valid_product("Cabinet", 1100, &[1, 2]);
        assert!(validate_product(&product, &resolved).is_empty());
    }

    #[test]
    fn test_price_floor_skipped_when_price_unset() {
        let bolt = valid_part("Bolt", 400);
        let mut product = valid_product("Cabinet", 0, &[1]);
        product.price = UNSET_PRICE;

        let errors = validate_product(&product, &[&bolt]);
        assert!(errors.contains(&ValidationError::PriceRequired));
        assert!(!errors
            .iter()
            .any(|e| matches!(e, ValidationError::PriceBelowPartsTotal { .. })));
    }

    #[test]
    fn test_duplicate_association_counts_twice() {
        let bolt = valid_part("Bolt", 400);
        let resolved: Vec<&Part> = vec![&bolt, &bolt];

        // $7.00 covers one $4.00 bolt but not two.
        let product = valid_product("Cabinet", 700, &[1, 1]);
        assert!(validate_product(&product, &resolved)
            .iter()
            .any(|e| matches!(e, ValidationError::PriceBelowPartsTotal { .. })));
    }
}
