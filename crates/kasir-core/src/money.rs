//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In floating point:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                 │
//! │  OUR SOLUTION: integer minor units                              │
//! │    Catalog prices, subtotals, tax, and change are all plain     │
//! │    i64 amounts in the catalog's smallest currency unit.         │
//! │    Rounding happens in exactly one place (the tax step) and     │
//! │    is visible in the code.                                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_minor(10_000);
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_minor(25_000);
//! assert_eq!(total.minor(), 35_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the catalog's smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: change computations go negative on a shortfall
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare integer on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor currency units.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let price = Money::from_minor(10_000);
    /// assert_eq!(price.minor(), 10_000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor currency units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
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

    /// Returns the absolute value.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let shortfall = Money::from_minor(-9_500);
    /// assert_eq!(shortfall.abs().minor(), 9_500);
    /// ```
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Calculates tax, rounding half up.
    ///
    /// ## Rounding Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────┐
    /// │  Integer math: (amount * bps + 5000) / 10000                │
    /// │                                                             │
    /// │  The +5000 term rounds the half case up:                    │
    /// │    45_000 at 10.00% (1000 bps) → 4_500                      │
    /// │       125 at 10.00% (1000 bps) → 12.5  → 13                 │
    /// │                                                             │
    /// │  Applied ONCE on the cart subtotal, never per line, so the  │
    /// │  sum of displayed lines and the grand total cannot drift.   │
    /// └─────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    /// use kasir_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_minor(45_000);
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax.minor(), 4_500);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Widen through i128 so large subtotals cannot overflow mid-formula
        let tax = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_minor(tax as i64)
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(10_000);
    /// let line_subtotal = unit_price.multiply_quantity(2);
    /// assert_eq!(line_subtotal.minor(), 20_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the raw minor-unit amount.
///
/// Currency formatting (symbol, decimal places) belongs to the
/// presentation configuration, not here.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
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

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line subtotals.
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
    fn test_from_minor() {
        let money = Money::from_minor(10_000);
        assert_eq!(money.minor(), 10_000);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        let result: Money = a * 3;
        assert_eq!(result.minor(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1000, 2500, 500]
            .iter()
            .map(|&v| Money::from_minor(v))
            .sum();
        assert_eq!(total.minor(), 4000);
    }

    #[test]
    fn test_tax_calculation_basic() {
        // 45_000 at 10% = 4_500, no rounding involved
        let amount = Money::from_minor(45_000);
        let rate = TaxRate::from_bps(1000);
        assert_eq!(amount.calculate_tax(rate).minor(), 4_500);
    }

    #[test]
    fn test_tax_calculation_rounds_half_up() {
        // 125 at 10% = 12.5 → rounds up to 13
        let amount = Money::from_minor(125);
        let rate = TaxRate::from_bps(1000);
        assert_eq!(amount.calculate_tax(rate).minor(), 13);

        // 124 at 10% = 12.4 → rounds down to 12
        let amount = Money::from_minor(124);
        assert_eq!(amount.calculate_tax(rate).minor(), 12);
    }

    #[test]
    fn test_tax_calculation_zero_rate() {
        let amount = Money::from_minor(45_000);
        assert_eq!(amount.calculate_tax(TaxRate::zero()).minor(), 0);
    }

    #[test]
    fn test_tax_calculation_large_amount_no_overflow() {
        // A subtotal near i64::MAX / 10000 would overflow without widening
        let amount = Money::from_minor(1_000_000_000_000_000);
        let rate = TaxRate::from_bps(1000);
        assert_eq!(amount.calculate_tax(rate).minor(), 100_000_000_000_000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_minor(25_000);
        assert_eq!(unit_price.multiply_quantity(1).minor(), 25_000);
        assert_eq!(unit_price.multiply_quantity(4).minor(), 100_000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_minor(100);
        assert!(positive.is_positive());

        let negative = Money::from_minor(-100);
        assert!(negative.is_negative());
    }

    #[test]
    fn test_display_is_minor_units() {
        assert_eq!(format!("{}", Money::from_minor(49_500)), "49500");
        assert_eq!(format!("{}", Money::from_minor(-9_500)), "-9500");
    }
}
