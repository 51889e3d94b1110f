//! # Error Types
//!
//! Validation errors for the inventory model.
//!
//! Each variant's `Display` output is the message shown to the user when
//! a save is rejected; the caller joins the collected list and presents
//! it in one dialog. Errors are enum variants, never strings, and they
//! are collected, never thrown — see [`crate::validation`].

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Validation Error
// =============================================================================

/// A single violated save rule.
///
/// `validate_part` / `validate_product` return every violated rule at
/// once so the user sees the full list, not just the first failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The max field was supplied but did not parse as a non-negative integer.
    #[error("Maximum allowed is optional but when provided must be a positive integer.")]
    InvalidMax,

    /// The min field was supplied but did not parse as a non-negative integer.
    #[error("Minimum allowed is optional but when provided must be an integer >= 0.")]
    InvalidMin,

    /// Both bounds set, but min exceeds max.
    #[error("Minimum allowed must be less than maximum allowed.")]
    MinAboveMax,

    /// Stock level fell below the configured minimum.
    #[error("Inventory must be greater than the minimum.")]
    StockBelowMin,

    /// Stock level exceeds the configured maximum.
    #[error("Inventory must be less than the maximum.")]
    StockAboveMax,

    /// Name is empty.
    #[error("Name is a required field.")]
    NameRequired,

    /// No price was supplied.
    #[error("Price is a required decimal field.")]
    PriceRequired,

    /// The machine id field was supplied but did not parse as a positive integer.
    #[error("Machine ID is optional but if provided must be a positive integer.")]
    InvalidMachineId,

    /// A product needs at least one associated part.
    #[error("Must have one or more parts associated to the product.")]
    NoAssociatedParts,

    /// The product is priced below what its parts cost.
    #[error(
        "Price of the product ({price}) can not be less than the sum of part costs ({parts_total})."
    )]
    PriceBelowPartsTotal {
        /// The product price under validation.
        price: Money,
        /// Sum of the associated parts' prices at validation time.
        parts_total: Money,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================
