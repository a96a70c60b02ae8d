//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Nickel rounding is ceil(tax / 0.05) * 0.05. With floats:              │
//! │    1.10 / 0.05 = 22.000000000000004 → ceil → 23  ❌ one nickel too many │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    raw tax is kept in 1/10000 cent units (cents × basis points)        │
//! │    and divided by the nickel grid with exact integer ceiling           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//! use tally_core::types::TaxRate;
//!
//! let price = Money::from_cents(1499); // 14.99
//! let tax = price.calculate_tax_rounded_up(TaxRate::from_bps(1000), Money::NICKEL).unwrap();
//! assert_eq!(tax.cents(), 150); // 1.499 → 1.50
//! assert_eq!(price.checked_add(tax).unwrap().to_string(), "16.49");
//! ```
//!
//! ## Overflow
//! Arithmetic that can leave the i64 range is checked and returns `None`;
//! there are no operator impls that could panic or wrap.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::TaxRate;

/// Basis points in a whole (100%).
const BPS_SCALE: i128 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: plenty of headroom; totals multiply by quantity
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialize as cents**: JSON consumers get exact integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// The rounding grid for per-item tax: five cents.
    pub const NICKEL: Money = Money(5);

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a price as it appears in input text.
    ///
    /// Accepts one or more ASCII digits, optionally followed by a single
    /// separator character of any kind and one or two fraction digits.
    /// A single fraction digit means tenths (`12.5` is 12.50).
    ///
    /// Returns `None` when the text has another shape or the amount does not
    /// fit in `i64` cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::parse_amount("12.49"), Some(Money::from_cents(1249)));
    /// assert_eq!(Money::parse_amount("1337"), Some(Money::from_cents(133700)));
    /// assert_eq!(Money::parse_amount("0.5"), Some(Money::from_cents(50)));
    /// assert_eq!(Money::parse_amount("12.499"), None);
    /// ```
    pub fn parse_amount(text: &str) -> Option<Money> {
        let split = text
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(text.len());
        let (major, rest) = text.split_at(split);
        if major.is_empty() {
            return None;
        }

        let minor = match rest.chars().next() {
            None => 0,
            Some(separator) => {
                let fraction = &rest[separator.len_utf8()..];
                if fraction.is_empty()
                    || fraction.len() > 2
                    || !fraction.bytes().all(|b| b.is_ascii_digit())
                {
                    return None;
                }
                let value: i64 = fraction.parse().ok()?;
                if fraction.len() == 1 {
                    value * 10
                } else {
                    value
                }
            }
        };

        let major: i64 = major.parse().ok()?;
        major
            .checked_mul(100)
            .and_then(|cents| cents.checked_add(minor))
            .map(Money)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
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

    /// Calculates tax at `rate`, rounded **up** to the next multiple of `step`.
    ///
    /// ## Nickel Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  price 47.50 at 15% = 7.125                                         │
    /// │                                                                     │
    /// │    7.125 / 0.05 = 142.5  → ceil → 143 → 143 × 0.05 = 7.15          │
    /// │                                                                     │
    /// │  Exact multiples stay put:                                          │
    /// │    10.00 at 5% = 0.50 / 0.05 = 10 → ceil → 10 → 0.50               │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Implementation
    /// `cents × bps` is the raw tax in 1/10000 cent units, computed in i128.
    /// Ceiling division by `step × 10000` keeps the whole thing exact.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::TaxRate;
    ///
    /// let price = Money::from_cents(4750);
    /// let tax = price.calculate_tax_rounded_up(TaxRate::from_bps(1500), Money::NICKEL);
    /// assert_eq!(tax, Some(Money::from_cents(715)));
    /// ```
    ///
    /// Returns `None` if the rounded tax does not fit in `i64` cents.
    pub fn calculate_tax_rounded_up(&self, rate: TaxRate, step: Money) -> Option<Money> {
        debug_assert!(step.0 > 0, "rounding step must be positive");
        let raw = self.0 as i128 * rate.bps() as i128;
        let grid = step.0 as i128 * BPS_SCALE;
        // ceil(raw / grid) for either sign
        let steps = -((-raw).div_euclid(grid));
        i64::try_from(steps * step.0 as i128).ok().map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Multiplies money by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(3219);
    /// assert_eq!(unit_price.checked_mul_quantity(2), Some(Money::from_cents(6438)));
    /// assert_eq!(unit_price.checked_mul_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Receipt formatting: exactly two fraction digits, integer digits grouped
/// by thousands with `,`.
///
/// ```rust
/// use tally_core::money::Money;
///
/// assert_eq!(Money::from_cents(147070).to_string(), "1,470.70");
/// assert_eq!(Money::from_cents(85).to_string(), "0.85");
/// ```
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let digits = self.dollars().unsigned_abs().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        write!(f, "{}{}.{:02}", sign, grouped, self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
