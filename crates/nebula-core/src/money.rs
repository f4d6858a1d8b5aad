//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Credits                                          │
//! │    Storefront prices are whole credits (299, 145, 850...), so the      │
//! │    smallest currency unit IS the display unit. Totals are plain        │
//! │    integer sums and can never drift.                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tax is shown as "calculated at checkout" and never computed in this
//! system, so `Money` carries no rate arithmetic.
//!
//! ## Usage
//! ```rust
//! use nebula_core::money::Money;
//!
//! // Create from whole credits
//! let price = Money::from_credits(299);
//!
//! // Arithmetic operations
//! let doubled = price * 2;                        // 598
//! let total = price + Money::from_credits(145);   // 444
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in whole credits.
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// CatalogItem.price ──► CartLine.line_total ──► Cart.total_price
///                                                      │
///                                                      ▼
///                                        Displayed as "$299" in the UI
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole credits.
    ///
    /// ## Example
    /// ```rust
    /// use nebula_core::money::Money;
    ///
    /// let price = Money::from_credits(299);
    /// assert_eq!(price.credits(), 299);
    /// ```
    #[inline]
    pub const fn from_credits(credits: i64) -> Self {
        Money(credits)
    }

    /// Returns the value in whole credits.
    #[inline]
    pub const fn credits(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    ///
    /// ## Example
    /// ```rust
    /// use nebula_core::money::Money;
    ///
    /// let zero = Money::zero();
    /// assert_eq!(zero.credits(), 0);
    /// assert!(zero.is_zero());
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use nebula_core::money::Money;
    ///
    /// let unit_price = Money::from_credits(299);
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.credits(), 897);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Artifact: Holo-Plant v2, $299
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: $897
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the dev walkthrough. Use frontend formatting
/// for actual UI display to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over iterators of Money (cart totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
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
    fn test_from_credits() {
        let money = Money::from_credits(299);
        assert_eq!(money.credits(), 299);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_credits(299)), "$299");
        assert_eq!(format!("{}", Money::from_credits(-55)), "-$55");
        assert_eq!(format!("{}", Money::from_credits(0)), "$0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_credits(100);
        let b = Money::from_credits(45);

        assert_eq!((a + b).credits(), 145);
        assert_eq!((a - b).credits(), 55);
        let result: Money = a * 3;
        assert_eq!(result.credits(), 300);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_credits(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.credits(), 897);
    }

    #[test]
    fn test_sum() {
        let total: Money = [299, 145, 599]
            .iter()
            .map(|c| Money::from_credits(*c))
            .sum();
        assert_eq!(total.credits(), 1043);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_credits(100);
        assert!(!positive.is_zero());
        assert!(positive.is_positive());
        assert!(!positive.is_negative());

        let negative = Money::from_credits(-100);
        assert!(!negative.is_zero());
        assert!(!negative.is_positive());
        assert!(negative.is_negative());
    }
}
