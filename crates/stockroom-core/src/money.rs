//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! All prices in the system are integer cents. Form input arrives as a
//! decimal string ("10.99") and is converted exactly once, at the form
//! boundary, via [`Money::parse_decimal`]; everything downstream works
//! in cents.
//!
//! ## Usage
//! ```rust
//! use stockroom_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1099); // $10.99
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(500); // $15.99
//! assert_eq!(total.cents(), 1599);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Signed so that sentinel values (see `UNSET_PRICE` in the crate root)
/// and differences are representable; parsed form input is always
/// non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses a decimal string into Money.
    ///
    /// ## Rules
    /// - Digits with at most one `.`, and the string must start with a
    ///   digit: `"10"`, `"10."`, `"10.9"` are accepted, `".5"` is not.
    /// - No sign, no grouping, no currency symbol.
    /// - Fractional digits beyond two round half-up to the nearest cent.
    ///
    /// Returns `None` for anything else; the form layer maps that to the
    /// unset-price sentinel rather than an error.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("10.99"), Some(Money::from_cents(1099)));
    /// assert_eq!(Money::parse_decimal("5"), Some(Money::from_cents(500)));
    /// assert_eq!(Money::parse_decimal("free"), None);
    /// ```
    pub fn parse_decimal(input: &str) -> Option<Money> {
        let input = input.trim();
        let (whole, frac) = match input.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (input, ""),
        };

        // A second '.' lands in `frac` and fails the digit check.
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let dollars: i64 = whole.parse().ok()?;
        let frac_cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            2 => frac.parse::<i64>().ok()?,
            _ => {
                let head: i64 = frac[..2].parse().ok()?;
                let round_up = frac.as_bytes()[2] >= b'5';
                head + round_up as i64
            }
        };

        let cents = dollars.checked_mul(100)?.checked_add(frac_cents)?;
        Some(Money(cents))
    }

    /// Renders the value as a bare decimal string ("10.99"), the inverse
    /// of [`Money::parse_decimal`]. Used when loading an entity back into
    /// a form field.
    pub fn decimal_string(&self) -> String {
        format!("{}.{:02}", self.dollars(), self.cents_part())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money in a human-readable format ("$10.99").
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Summation over part prices when checking a product's price floor.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-1)), "-$0.01");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.cents(), 2000);
    }

    #[test]
    fn test_parse_decimal_accepts_plain_forms() {
        assert_eq!(Money::parse_decimal("10.99"), Some(Money::from_cents(1099)));
        assert_eq!(Money::parse_decimal("5"), Some(Money::from_cents(500)));
        assert_eq!(Money::parse_decimal("5."), Some(Money::from_cents(500)));
        assert_eq!(Money::parse_decimal("5.1"), Some(Money::from_cents(510)));
        assert_eq!(Money::parse_decimal("0"), Some(Money::zero()));
        assert_eq!(Money::parse_decimal(" 12.50 "), Some(Money::from_cents(1250)));
    }

    #[test]
    fn test_parse_decimal_rounds_extra_precision() {
        assert_eq!(Money::parse_decimal("1.005"), Some(Money::from_cents(101)));
        assert_eq!(Money::parse_decimal("1.004"), Some(Money::from_cents(100)));
        // Rounding can carry into the dollars
        assert_eq!(Money::parse_decimal("0.999"), Some(Money::from_cents(100)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("free"), None);
        assert_eq!(Money::parse_decimal("-5"), None);
        assert_eq!(Money::parse_decimal(".5"), None);
        assert_eq!(Money::parse_decimal("1.2.3"), None);
        assert_eq!(Money::parse_decimal("$5"), None);
    }

    #[test]
    fn test_decimal_string_round_trips() {
        let price = Money::from_cents(1099);
        assert_eq!(price.decimal_string(), "10.99");
        assert_eq!(Money::parse_decimal(&price.decimal_string()), Some(price));
        assert_eq!(Money::from_cents(500).decimal_string(), "5.00");
    }
}
