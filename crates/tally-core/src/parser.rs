//! # Parser
//!
//! Turns raw input text into validated line items.
//!
//! ## Header-driven Columns
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line 1   Quantity, Price, Product    ← header, always the first line  │
//! │              │        │       │                                         │
//! │  position    0        1       2       ← ColumnLayout                    │
//! │              │        │       │                                         │
//! │  line 2   1,        12.49,  book      ← data, read by header position  │
//! │  line 3   1,        14.99,  music cd                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines split on `\n` and fields on `,`; every token is trimmed. Tokens past
//! the last header column are ignored. Blank lines are not skipped: they are
//! data lines and fail validation like any other short line.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::schema::Field;
use crate::types::LineItem;

// =============================================================================
// Column Layout
// =============================================================================

/// Positions of each field within a line, resolved from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: Vec<Field>,
}

impl ColumnLayout {
    /// Resolves a header line.
    ///
    /// ## Errors
    /// - `UnknownColumn` for the first token that is not a field name
    /// - `DuplicateColumn` when a field is named twice
    /// - `MissingColumn` when a field is never named
    pub fn from_header(line: &str) -> CoreResult<Self> {
        let mut columns = Vec::with_capacity(Field::ALL.len());

        for token in line.split(',') {
            let name = token.trim();
            let field: Field = name.parse().map_err(|_| CoreError::UnknownColumn {
                column: name.to_string(),
            })?;

            if columns.contains(&field) {
                return Err(CoreError::DuplicateColumn {
                    field: field.to_string(),
                });
            }
            columns.push(field);
        }

        if let Some(missing) = Field::ALL.into_iter().find(|f| !columns.contains(f)) {
            return Err(CoreError::MissingColumn {
                field: missing.to_string(),
            });
        }

        debug!(columns = ?columns, "Resolved column layout");
        Ok(ColumnLayout { columns })
    }

    /// Reads one data line. `line_number` is 1-based, header included.
    pub fn parse_line(&self, line: &str, line_number: usize) -> CoreResult<LineItem> {
        let values: Vec<&str> = line.split(',').collect();

        let mut quantity = None;
        let mut product = None;
        let mut price = None;

        for (position, field) in self.columns.iter().enumerate() {
            let invalid = || CoreError::RowValidation {
                field: field.to_string(),
                line: line_number,
            };

            let raw = values.get(position).copied().ok_or_else(invalid)?;
            if !field.matches(raw) {
                return Err(invalid());
            }

            let value = raw.trim();
            match field {
                Field::Quantity => quantity = Some(value.parse::<i64>().map_err(|_| invalid())?),
                Field::Product => product = Some(value.to_string()),
                Field::Price => price = Some(Money::parse_amount(value).ok_or_else(invalid)?),
            }
        }

        let missing = |field: Field| CoreError::MissingColumn {
            field: field.to_string(),
        };
        Ok(LineItem {
            quantity: quantity.ok_or_else(|| missing(Field::Quantity))?,
            product: product.ok_or_else(|| missing(Field::Product))?,
            price: price.ok_or_else(|| missing(Field::Price))?,
        })
    }
}

// =============================================================================
// Parse
// =============================================================================

/// Parses the whole input: first line is the header, every later line a row.
///
/// Zero data rows is not an error here; the calculator rejects it.
///
/// ## Example
/// ```rust
/// use tally_core::parser::parse;
///
/// let items = parse("Price, Product, Quantity\n0.85, chocolate bar, 2").unwrap();
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].quantity, 2);
/// assert_eq!(items[0].product, "chocolate bar");
/// assert_eq!(items[0].price.cents(), 85);
/// ```
pub fn parse(input: &str) -> CoreResult<Vec<LineItem>> {
    let mut lines = input.split('\n');

    // split always yields at least one piece
    let header = lines.next().unwrap_or_default();
    let layout = ColumnLayout::from_header(header)?;

    let items = lines
        .enumerate()
        .map(|(index, line)| layout.parse_line(line, index + 2))
        .collect::<CoreResult<Vec<_>>>()?;

    debug!(rows = items.len(), "Parsed input");
    Ok(items)
}

// =============================================================================
// Unit Tests
// =============================================================================
