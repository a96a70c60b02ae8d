//! # Domain Types
//!
//! Core domain types used throughout the receipt pipeline.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │     Receipt     │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  quantity       │──►│  items          │   │  bps (u32)      │       │
//! │  │  product        │   │  sales_taxes    │   │  1000 = 10%     │       │
//! │  │  price (Money)  │   │  total          │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::ops::Add;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% sales tax, 500 bps = 5% import duty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

/// Rates stack: 10% sales + 5% import = 15%.
impl Add for TaxRate {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        TaxRate(self.0 + other.0)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One purchased line of the input table.
///
/// Built by the parser with the pre-tax unit price. The calculator overwrites
/// `price` with the taxed unit price exactly once; the pre-tax price is not
/// kept after that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Units purchased.
    pub quantity: i64,

    /// Free-form description. May be empty.
    pub product: String,

    /// Unit price. Pre-tax until calculated, taxed afterwards.
    pub price: Money,
}

impl LineItem {
    /// Unit price × quantity, `None` on overflow.
    #[inline]
    pub fn line_total(&self) -> Option<Money> {
        self.price.checked_mul_quantity(self.quantity)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// The outcome of one computation: taxed items and aggregate totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Items in input order, each carrying its taxed unit price.
    pub items: Vec<LineItem>,

    /// Σ item tax × quantity.
    pub sales_taxes: Money,

    /// Σ taxed price × quantity.
    pub total: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert_eq!(TaxRate::default(), TaxRate::zero());
    }

    #[test]
    fn test_tax_rates_stack() {
        let combined = TaxRate::from_bps(1000) + TaxRate::from_bps(500);
        assert_eq!(combined.bps(), 1500);
    }

    #[test]
    fn test_line_total() {
        let item = LineItem {
            quantity: 2,
            product: "imported bottle of perfume".to_string(),
            price: Money::from_cents(3219),
        };
        assert_eq!(item.line_total(), Some(Money::from_cents(6438)));
    }

    #[test]
    fn test_line_total_overflow() {
        let item = LineItem {
            quantity: 10_000_000_000,
            product: "music cd".to_string(),
            price: Money::from_cents(1_000_000_000_000),
        };
        assert_eq!(item.line_total(), None);
    }

    #[test]
    fn test_receipt_serializes_cents() {
        let receipt = Receipt {
            items: vec![LineItem {
                quantity: 1,
                product: "book".to_string(),
                price: Money::from_cents(1249),
            }],
            sales_taxes: Money::zero(),
            total: Money::from_cents(1249),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["items"][0]["price"], 1249);
        assert_eq!(json["total"], 1249);
    }
}
