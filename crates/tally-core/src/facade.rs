//! # Sales Tax Facade
//!
//! The single entry point: input text in, receipt out.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SalesTax::for_input(text)                                              │
//! │       │  "" → EmptyInput                                                │
//! │       ▼                                                                 │
//! │  parser::parse ──► calculator::calculate ──► Computation               │
//! │                                                  │                      │
//! │                          as_output(None)  ───────┤──► receipt text      │
//! │                          as_output(Some(path)) ──┘──► file + text       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::SalesTax;
//!
//! let input = "Quantity, Product, Price\n1, book, 12.49\n1, music cd, 14.99";
//! let text = SalesTax::new().for_input(input)?.as_output(None)?;
//! assert_eq!(text, "1, book, 12.49\n1, music cd, 16.49\n\nSales Taxes: 1.50\nTotal: 28.98");
//! # Ok::<(), tally_core::CoreError>(())
//! ```

use std::path::Path;

use tracing::debug;

use crate::calculator;
use crate::error::{CoreError, CoreResult};
use crate::parser;
use crate::policy::TaxPolicy;
use crate::render;
use crate::sink::{FileSink, ReceiptSink};
use crate::types::Receipt;

/// Runs the parse → calculate pipeline under the standard tax policy.
#[derive(Debug, Clone, Default)]
pub struct SalesTax {
    policy: TaxPolicy,
}

impl SalesTax {
    pub fn new() -> Self {
        SalesTax {
            policy: TaxPolicy::standard(),
        }
    }

    /// Parses and taxes `input`.
    ///
    /// ## Errors
    /// - `EmptyInput` if `input` is the empty string (checked before parsing)
    /// - any parser error (`UnknownColumn`, `RowValidation`, ...)
    /// - `EmptyData` if the input has a header but no rows
    pub fn for_input(&self, input: &str) -> CoreResult<Computation> {
        if input.is_empty() {
            return Err(CoreError::EmptyInput);
        }

        let items = parser::parse(input)?;
        if items.is_empty() {
            return Err(CoreError::EmptyData);
        }
        debug!(rows = items.len(), "Computing receipt");

        let receipt = calculator::calculate(items, &self.policy)?;
        Ok(Computation { receipt })
    }
}

/// One computed input, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computation {
    receipt: Receipt,
}

impl Computation {
    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    pub fn into_receipt(self) -> Receipt {
        self.receipt
    }

    /// Renders the receipt text.
    pub fn render(&self) -> CoreResult<String> {
        render::render(&self.receipt)
    }

    /// Renders, writing to `destination` when one is given.
    ///
    /// The rendered text is returned either way. A written file holds exactly
    /// that text, replacing whatever was there.
    pub fn as_output(&self, destination: Option<&Path>) -> CoreResult<String> {
        let text = self.render()?;
        if let Some(path) = destination {
            FileSink::new(path).write_receipt(&text)?;
        }
        Ok(text)
    }

    /// Renders into any sink.
    pub fn write_to<S: ReceiptSink + ?Sized>(&self, sink: &mut S) -> CoreResult<()> {
        let text = self.render()?;
        sink.write_receipt(&text)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
