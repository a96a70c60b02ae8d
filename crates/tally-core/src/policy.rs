//! # Tax Policy
//!
//! The two fixed rates and the keyword rules that decide which apply.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product text (case-insensitive substring match)                       │
//! │       │                                                                 │
//! │       ├── contains book / chocolate / apples / pills / drugs?          │
//! │       │        yes → no sales tax        no → 10% sales tax            │
//! │       │                                                                 │
//! │       └── contains "import"?                                            │
//! │                yes → +5% import duty     no → nothing                   │
//! │                                                                         │
//! │  item tax = ceil((sales + import) / 0.05) × 0.05                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;
use crate::types::TaxRate;

/// Basic sales tax: 10%.
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(1000);

/// Import duty: 5%.
pub const IMPORT_TAX_RATE: TaxRate = TaxRate::from_bps(500);

/// Substring that marks a product as imported.
pub const IMPORT_KEYWORD: &str = "import";

// =============================================================================
// Exempt Categories
// =============================================================================

/// Product classes that carry no sales tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExemptCategory {
    Books,
    Food,
    Medicine,
}

impl ExemptCategory {
    pub const ALL: [ExemptCategory; 3] = [
        ExemptCategory::Books,
        ExemptCategory::Food,
        ExemptCategory::Medicine,
    ];

    /// Lowercase keywords that place a product in this category.
    pub const fn keywords(&self) -> &'static [&'static str] {
        match self {
            ExemptCategory::Books => &["book"],
            ExemptCategory::Food => &["chocolate", "apples"],
            ExemptCategory::Medicine => &["pills", "drugs"],
        }
    }

    /// Finds the first category whose keyword occurs in `product`.
    ///
    /// ```rust
    /// use tally_core::policy::ExemptCategory;
    ///
    /// assert_eq!(ExemptCategory::classify("Chocolate Bar"), Some(ExemptCategory::Food));
    /// assert_eq!(ExemptCategory::classify("music cd"), None);
    /// ```
    pub fn classify(product: &str) -> Option<ExemptCategory> {
        let product = product.to_lowercase();
        Self::ALL.into_iter().find(|category| {
            category
                .keywords()
                .iter()
                .any(|keyword| product.contains(keyword))
        })
    }
}

// =============================================================================
// Tax Policy
// =============================================================================

/// Immutable tax configuration, shared by every computation in the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxPolicy {
    sales_rate: TaxRate,
    import_rate: TaxRate,
    rounding_step: Money,
}

impl TaxPolicy {
    /// 10% sales tax, 5% import duty, tax rounded up to the nickel.
    pub const fn standard() -> Self {
        TaxPolicy {
            sales_rate: SALES_TAX_RATE,
            import_rate: IMPORT_TAX_RATE,
            rounding_step: Money::NICKEL,
        }
    }

    /// True when any exemption keyword occurs in `product`.
    pub fn is_exempt(&self, product: &str) -> bool {
        ExemptCategory::classify(product).is_some()
    }

    /// True when `product` contains "import" in any case.
    pub fn is_imported(&self, product: &str) -> bool {
        product.to_lowercase().contains(IMPORT_KEYWORD)
    }

    /// Combined rate that applies to `product`.
    pub fn rate_for(&self, product: &str) -> TaxRate {
        let sales = if self.is_exempt(product) {
            TaxRate::zero()
        } else {
            self.sales_rate
        };
        let import = if self.is_imported(product) {
            self.import_rate
        } else {
            TaxRate::zero()
        };
        sales + import
    }

    /// Per-unit tax on `price` for `product`, rounded up to the nickel.
    /// `None` if the tax does not fit in `i64` cents.
    ///
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::policy::TaxPolicy;
    ///
    /// let policy = TaxPolicy::standard();
    /// let tax = policy.item_tax("imported bottle of perfume", Money::from_cents(4750));
    /// assert_eq!(tax, Some(Money::from_cents(715)));
    /// ```
    pub fn item_tax(&self, product: &str, price: Money) -> Option<Money> {
        price.calculate_tax_rounded_up(self.rate_for(product), self.rounding_step)
    }
}

impl Default for TaxPolicy {
    fn default() -> Self {
        TaxPolicy::standard()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exemption_is_case_insensitive_substring() {
        let policy = TaxPolicy::standard();
        assert!(policy.is_exempt("book"));
        assert!(policy.is_exempt("imported BOOKS"));
        assert!(policy.is_exempt("chocolate bar"));
        assert!(policy.is_exempt("box of imported chocolates"));
        assert!(policy.is_exempt("bag of apples"));
        assert!(policy.is_exempt("packet of headache pills"));
        assert!(policy.is_exempt("Drugstore"));

        assert!(!policy.is_exempt("music cd"));
        assert!(!policy.is_exempt("bottle of perfume"));
        assert!(!policy.is_exempt("apple"));
    }

    #[test]
    fn test_import_is_case_insensitive_substring() {
        let policy = TaxPolicy::standard();
        assert!(policy.is_imported("imported bottle of perfume"));
        assert!(policy.is_imported("box of IMPORTED chocolates"));
        assert!(policy.is_imported("reimport"));
        assert!(!policy.is_imported("bottle of perfume"));
    }

    #[test]
    fn test_classify_categories() {
        assert_eq!(ExemptCategory::classify("book"), Some(ExemptCategory::Books));
        assert_eq!(ExemptCategory::classify("apples"), Some(ExemptCategory::Food));
        assert_eq!(ExemptCategory::classify("pills"), Some(ExemptCategory::Medicine));
        assert_eq!(ExemptCategory::classify(""), None);
    }

    #[test]
    fn test_rate_for() {
        let policy = TaxPolicy::standard();
        assert_eq!(policy.rate_for("music cd").bps(), 1000);
        assert_eq!(policy.rate_for("book").bps(), 0);
        assert_eq!(policy.rate_for("imported box of chocolates").bps(), 500);
        assert_eq!(policy.rate_for("imported bottle of perfume").bps(), 1500);
    }

    #[test]
    fn test_item_tax() {
        let policy = TaxPolicy::standard();
        assert_eq!(policy.item_tax("music cd", Money::from_cents(1499)), Some(Money::from_cents(150)));
        assert_eq!(policy.item_tax("book", Money::from_cents(1249)), Some(Money::zero()));
        assert_eq!(
            policy.item_tax("box of imported chocolates", Money::from_cents(1125)),
            Some(Money::from_cents(60))
        );
        assert_eq!(
            policy.item_tax("imported bottle of perfume", Money::from_cents(2799)),
            Some(Money::from_cents(420))
        );
    }
}
