//! # Cash Settlement
//!
//! Cash-tender math and checkout gating for the "pay by cash" flow.
//!
//! Sign convention fixed here and respected everywhere downstream:
//! `change = tendered - total`. Negative change is a shortfall; the
//! display layer shows its absolute value under a distinct label.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Settlement
// =============================================================================

/// Result of settling a tendered cash amount against the amount due.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Settlement {
    /// `tendered - total`. Negative on a shortfall.
    pub change: Money,

    /// Whether the tender covers the amount due.
    pub sufficient: bool,
}

impl Settlement {
    /// The display breakdown for this settlement.
    pub fn breakdown(&self) -> TenderBreakdown {
        if self.change.is_negative() {
            TenderBreakdown::Shortfall(self.change.abs())
        } else {
            TenderBreakdown::Change(self.change)
        }
    }
}

/// What the tender line on screen should say, as an absolute amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TenderBreakdown {
    /// Tender covers the total; amount to hand back.
    Change(Money),
    /// Tender falls short by this amount.
    Shortfall(Money),
}

// =============================================================================
// Settlement Functions
// =============================================================================

/// Change owed for a tendered amount. Negative on a shortfall.
#[inline]
pub fn change(total: Money, tendered: Money) -> Money {
    tendered - total
}

/// Whether the tendered amount covers the total.
#[inline]
pub fn is_sufficient(total: Money, tendered: Money) -> bool {
    tendered >= total
}

/// Settles a tender against the amount due.
pub fn settle(total: Money, tendered: Money) -> Settlement {
    Settlement {
        change: change(total, tendered),
        sufficient: is_sufficient(total, tendered),
    }
}

/// Parses user-entered cash input into a tender amount.
///
/// Anything that is not a valid non-negative integer (empty input,
/// letters, a negative sign, overflow) parses to zero, which then fails
/// the sufficiency gate instead of erroring.
///
/// ## Example
/// ```rust
/// use kasir_core::settlement::parse_tender;
///
/// assert_eq!(parse_tender("50000").minor(), 50_000);
/// assert_eq!(parse_tender("  50000 ").minor(), 50_000);
/// assert_eq!(parse_tender("").minor(), 0);
/// assert_eq!(parse_tender("abc").minor(), 0);
/// assert_eq!(parse_tender("-5").minor(), 0);
/// ```
pub fn parse_tender(input: &str) -> Money {
    match input.trim().parse::<i64>() {
        Ok(v) if v >= 0 => Money::from_minor(v),
        _ => Money::zero(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_and_sufficiency() {
        let total = Money::from_minor(49_500);

        // Tendered 50_000 → change 500, sufficient
        let s = settle(total, Money::from_minor(50_000));
        assert_eq!(s.change.minor(), 500);
        assert!(s.sufficient);

        // Tendered 40_000 → change -9_500, insufficient
        let s = settle(total, Money::from_minor(40_000));
        assert_eq!(s.change.minor(), -9_500);
        assert!(!s.sufficient);
    }

    #[test]
    fn test_exact_tender_is_sufficient() {
        let total = Money::from_minor(49_500);
        let s = settle(total, total);
        assert!(s.sufficient);
        assert!(s.change.is_zero());
    }

    #[test]
    fn test_sufficient_iff_change_non_negative() {
        let total = Money::from_minor(49_500);
        for tendered in [0, 40_000, 49_499, 49_500, 50_000] {
            let s = settle(total, Money::from_minor(tendered));
            assert_eq!(s.sufficient, !s.change.is_negative());
        }
    }

    #[test]
    fn test_breakdown_sign_convention() {
        let total = Money::from_minor(49_500);

        let s = settle(total, Money::from_minor(50_000));
        assert_eq!(s.breakdown(), TenderBreakdown::Change(Money::from_minor(500)));

        let s = settle(total, Money::from_minor(40_000));
        assert_eq!(
            s.breakdown(),
            TenderBreakdown::Shortfall(Money::from_minor(9_500))
        );
    }

    #[test]
    fn test_parse_tender_valid() {
        assert_eq!(parse_tender("50000").minor(), 50_000);
        assert_eq!(parse_tender("0").minor(), 0);
        assert_eq!(parse_tender(" 123 ").minor(), 123);
    }

    #[test]
    fn test_parse_tender_invalid_is_zero() {
        assert_eq!(parse_tender("").minor(), 0);
        assert_eq!(parse_tender("   ").minor(), 0);
        assert_eq!(parse_tender("abc").minor(), 0);
        assert_eq!(parse_tender("12.5").minor(), 0);
        assert_eq!(parse_tender("-5").minor(), 0);
        assert_eq!(parse_tender("99999999999999999999").minor(), 0);
    }
}
