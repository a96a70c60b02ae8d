//! # Calculator
//!
//! Applies the tax policy to parsed items and accumulates receipt totals.
//!
//! ## Per-item Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LineItem { qty: 2, product: "imported bottle of perfume", 27.99 }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  policy.item_tax()  ← 15% of 27.99 = 4.1985 → nickel ceil → 4.20       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  price = 27.99 + 4.20 = 32.19      (overwrites the pre-tax price)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sales_taxes += 4.20 × 2           total += 32.19 × 2                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Totals are sums of whole cents, so they are already exact to two places.
//! Only the per-item tax is snapped to the nickel grid.

use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::policy::TaxPolicy;
use crate::types::{LineItem, Receipt};

/// Taxes every item in order and builds the receipt.
///
/// ## Errors
/// - `EmptyData` when `items` is empty
/// - `AmountOverflow` when an item's tax, taxed price, line amount or a
///   running total does not fit in `i64` cents
///
/// ## Example
/// ```rust
/// use tally_core::calculator::calculate;
/// use tally_core::money::Money;
/// use tally_core::policy::TaxPolicy;
/// use tally_core::types::LineItem;
///
/// let items = vec![LineItem {
///     quantity: 1,
///     product: "music cd".to_string(),
///     price: Money::from_cents(1499),
/// }];
/// let receipt = calculate(items, &TaxPolicy::standard()).unwrap();
/// assert_eq!(receipt.items[0].price.cents(), 1649);
/// assert_eq!(receipt.sales_taxes.cents(), 150);
/// ```
pub fn calculate(mut items: Vec<LineItem>, policy: &TaxPolicy) -> CoreResult<Receipt> {
    if items.is_empty() {
        return Err(CoreError::EmptyData);
    }

    let mut sales_taxes = Money::zero();
    let mut total = Money::zero();

    for item in items.iter_mut() {
        let overflow = || CoreError::AmountOverflow {
            product: item.product.clone(),
        };

        let item_tax = policy
            .item_tax(&item.product, item.price)
            .ok_or_else(overflow)?;
        debug!(
            product = %item.product,
            price = %item.price,
            exempt = policy.is_exempt(&item.product),
            imported = policy.is_imported(&item.product),
            tax = %item_tax,
            "Taxed item"
        );

        let taxed_price = item.price.checked_add(item_tax).ok_or_else(overflow)?;
        let line_tax = item_tax
            .checked_mul_quantity(item.quantity)
            .ok_or_else(overflow)?;
        let line_total = taxed_price
            .checked_mul_quantity(item.quantity)
            .ok_or_else(overflow)?;

        sales_taxes = sales_taxes.checked_add(line_tax).ok_or_else(overflow)?;
        total = total.checked_add(line_total).ok_or_else(overflow)?;
        item.price = taxed_price;
    }

    info!(
        items = items.len(),
        sales_taxes = %sales_taxes,
        total = %total,
        "Calculated receipt"
    );

    Ok(Receipt {
        items,
        sales_taxes,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64, product: &str, cents: i64) -> LineItem {
        LineItem {
            quantity,
            product: product.to_string(),
            price: Money::from_cents(cents),
        }
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = calculate(Vec::new(), &TaxPolicy::standard()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyData));
    }

    #[test]
    fn test_basic_sales_tax_and_exemptions() {
        let items = vec![
            item(1, "book", 1249),
            item(1, "music cd", 1499),
            item(1, "chocolate bar", 85),
        ];
        let receipt = calculate(items, &TaxPolicy::standard()).unwrap();

        let prices: Vec<i64> = receipt.items.iter().map(|i| i.price.cents()).collect();
        assert_eq!(prices, vec![1249, 1649, 85]);
        assert_eq!(receipt.sales_taxes.cents(), 150);
        assert_eq!(receipt.total.cents(), 2983);
    }

    #[test]
    fn test_exempt_import_still_pays_duty() {
        let receipt = calculate(
            vec![item(1, "imported box of chocolates", 1000)],
            &TaxPolicy::standard(),
        )
        .unwrap();
        assert_eq!(receipt.items[0].price.cents(), 1050);
        assert_eq!(receipt.sales_taxes.cents(), 50);
    }

    #[test]
    fn test_totals_scale_with_quantity() {
        let items = vec![
            item(2, "imported bottle of perfume", 2799),
            item(1, "bottle of perfume", 1899),
            item(3, "packet of headache pills", 975),
            item(1, "box of imported chocolates", 1125),
        ];
        let receipt = calculate(items, &TaxPolicy::standard()).unwrap();

        assert_eq!(receipt.sales_taxes.cents(), 1090);
        assert_eq!(receipt.total.cents(), 12637);
    }

    #[test]
    fn test_item_tax_is_on_nickel_grid() {
        let originals = [1, 7, 99, 1249, 1499, 2799, 4750, 133700];
        let items: Vec<LineItem> = originals
            .iter()
            .map(|&cents| item(1, "imported perfume", cents))
            .collect();
        let receipt = calculate(items, &TaxPolicy::standard()).unwrap();

        for (taxed, original) in receipt.items.iter().zip(originals) {
            let tax = taxed.price.cents() - original;
            assert_eq!(tax % 5, 0, "tax {tax} on {original} is off the nickel grid");
            assert!(tax * 10_000 >= original * 1500, "tax {tax} on {original} rounded down");
        }
    }

    #[test]
    fn test_zero_quantity_contributes_nothing() {
        let receipt = calculate(vec![item(0, "music cd", 1499)], &TaxPolicy::standard()).unwrap();
        assert_eq!(receipt.items[0].price.cents(), 1649);
        assert!(receipt.sales_taxes.is_zero());
        assert!(receipt.total.is_zero());
    }

    #[test]
    fn test_huge_quantity_times_price_is_an_error() {
        let items = vec![item(10_000_000_000, "music cd", 1_000_000_000_000)];
        let err = calculate(items, &TaxPolicy::standard()).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { ref product } if product == "music cd"));
    }

    #[test]
    fn test_running_total_overflow_is_an_error() {
        // each line fits on its own; the sum does not
        let items = vec![
            item(1, "book", i64::MAX / 2 + 1),
            item(1, "book", i64::MAX / 2 + 1),
        ];
        let err = calculate(items, &TaxPolicy::standard()).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
    }

    #[test]
    fn test_taxed_price_overflow_is_an_error() {
        // 92,233,720,368,547,758.00 plus 10% does not fit
        let items = vec![item(1, "music cd", 9_223_372_036_854_775_800)];
        let err = calculate(items, &TaxPolicy::standard()).unwrap_err();
        assert!(matches!(err, CoreError::AmountOverflow { .. }));
    }
}
