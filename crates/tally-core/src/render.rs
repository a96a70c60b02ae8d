//! # Renderer
//!
//! Formats a receipt as text:
//!
//! ```text
//! 1, imported box of chocolates, 10.50
//! 1, imported bottle of perfume, 54.65
//!
//! Sales Taxes: 7.65
//! Total: 65.15
//! ```
//!
//! No trailing newline after the `Total:` line.

use crate::error::{CoreError, CoreResult};
use crate::types::Receipt;

/// Renders `receipt` as receipt text.
///
/// ## Errors
/// `EmptyData` when the receipt has no items.
pub fn render(receipt: &Receipt) -> CoreResult<String> {
    if receipt.items.is_empty() {
        return Err(CoreError::EmptyData);
    }

    let mut lines: Vec<String> = receipt
        .items
        .iter()
        .map(|item| format!("{}, {}, {}", item.quantity, item.product, item.price))
        .collect();
    lines.push(String::new());
    lines.push(format!("Sales Taxes: {}", receipt.sales_taxes));
    lines.push(format!("Total: {}", receipt.total));

    Ok(lines.join("\n"))
}
