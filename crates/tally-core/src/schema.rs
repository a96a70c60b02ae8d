//! # Field Schema
//!
//! The columns an input table may name, and the pattern each value must match.
//!
//! ## Fields
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Name       Pattern                  Accepts                           │
//! │  ─────────  ───────────────────────  ──────────────────────────────    │
//! │  Quantity   ^[0-9]+$                 1, 400                            │
//! │  Product    ^.*$                     anything, including ""            │
//! │  Price      ^[0-9]+(.[0-9]{1,2})?$   1337, 12.49, 9.9, 12x49           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `.` in the price pattern is deliberately any single character, not
//! only a decimal point. Values are trimmed before matching.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

static QUANTITY_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static PRODUCT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^.*$").unwrap());
static PRICE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(.[0-9]{1,2})?$").unwrap());

// =============================================================================
// Field
// =============================================================================

/// A recognized column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Quantity,
    Product,
    Price,
}

impl Field {
    /// Every recognized field, in canonical header order.
    pub const ALL: [Field; 3] = [Field::Quantity, Field::Product, Field::Price];

    /// Column name as written in a header line.
    pub const fn name(&self) -> &'static str {
        match self {
            Field::Quantity => "Quantity",
            Field::Product => "Product",
            Field::Price => "Price",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Field::Quantity => &QUANTITY_PATTERN,
            Field::Product => &PRODUCT_PATTERN,
            Field::Price => &PRICE_PATTERN,
        }
    }

    /// Checks a raw value against this field's pattern. The value is trimmed
    /// first.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::schema::Field;
    ///
    /// assert!(Field::Quantity.matches(" 3 "));
    /// assert!(!Field::Quantity.matches("1.5"));
    /// assert!(Field::Product.matches(""));
    /// assert!(Field::Price.matches("12x49"));
    /// ```
    pub fn matches(&self, raw: &str) -> bool {
        self.pattern().is_match(raw.trim())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact, case-sensitive lookup by column name.
impl FromStr for Field {
    type Err = ValidationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == name)
            .ok_or_else(|| ValidationError::UnknownField {
                field: name.to_string(),
            })
    }
}

// =============================================================================
// Name-based Validators
// =============================================================================

/// Checks whether `name` is a recognized column name.
///
/// ```rust
/// use tally_core::schema::is_recognized;
///
/// assert!(is_recognized("Price"));
/// assert!(!is_recognized("price"));
/// assert!(!is_recognized("Foo"));
/// ```
pub fn is_recognized(name: &str) -> bool {
    name.parse::<Field>().is_ok()
}

/// Validates a raw value against the field called `name`.
///
/// ## Returns
/// - `Ok(true)` / `Ok(false)` for a recognized field
/// - `Err(ValidationError::UnknownField)` when `name` is not recognized
pub fn validate(raw: &str, name: &str) -> ValidationResult<bool> {
    let field: Field = name.parse()?;
    Ok(field.matches(raw))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_recognized() {
        assert!(is_recognized("Quantity"));
        assert!(is_recognized("Product"));
        assert!(is_recognized("Price"));

        assert!(!is_recognized("Foo"));
        assert!(!is_recognized(""));
        assert!(!is_recognized("QUANTITY"));
    }

    #[test]
    fn test_quantity_pattern() {
        assert!(Field::Quantity.matches("1"));
        assert!(Field::Quantity.matches("400"));
        assert!(Field::Quantity.matches("  10  "));
        assert!(Field::Quantity.matches("0"));

        assert!(!Field::Quantity.matches(""));
        assert!(!Field::Quantity.matches("-1"));
        assert!(!Field::Quantity.matches("+1"));
        assert!(!Field::Quantity.matches("1.0"));
        assert!(!Field::Quantity.matches("1 chocolate bar"));
        assert!(!Field::Quantity.matches("٣"));
    }

    #[test]
    fn test_product_accepts_anything() {
        assert!(Field::Product.matches(""));
        assert!(Field::Product.matches("imported box of chocolates"));
        assert!(Field::Product.matches("14.22"));
    }

    #[test]
    fn test_price_pattern() {
        assert!(Field::Price.matches("12.49"));
        assert!(Field::Price.matches("1337"));
        assert!(Field::Price.matches("9.9"));
        assert!(Field::Price.matches(" 0.85 "));

        assert!(!Field::Price.matches(""));
        assert!(!Field::Price.matches(".85"));
        assert!(!Field::Price.matches("12."));
        assert!(!Field::Price.matches("12.499"));
        assert!(!Field::Price.matches("-1.00"));
        assert!(!Field::Price.matches("book"));
    }

    #[test]
    fn test_price_separator_is_any_character() {
        assert!(Field::Price.matches("12x49"));
        assert!(Field::Price.matches("12:5"));
        assert!(Field::Price.matches("12 49"));
    }

    #[test]
    fn test_validate_by_name() {
        assert!(validate("3", "Quantity").unwrap());
        assert!(!validate("three", "Quantity").unwrap());

        let err = validate("3", "Colour").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownField { ref field } if field == "Colour"));
    }
}
