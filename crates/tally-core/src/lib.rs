//! # tally-core: Sales Tax Receipts
//!
//! Reads a purchase table, taxes each line, and renders a receipt.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Quantity, Product, Price          1, book, 12.49                     │
//! │   1, book, 12.49          ────►     1, music cd, 16.49                 │
//! │   1, music cd, 14.99                                                    │
//! │                                     Sales Taxes: 1.50                   │
//! │                                     Total: 28.98                        │
//! │                                                                         │
//! │   ┌──────────┐   ┌────────────┐   ┌──────────┐                         │
//! │   │  parser  │──►│ calculator │──►│  render  │     facade drives all   │
//! │   │ (schema) │   │  (policy)  │   │          │     three in order      │
//! │   └──────────┘   └────────────┘   └──────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`schema`] - Recognized columns and their value patterns
//! - [`policy`] - Tax rates, exemptions, import duty
//! - [`parser`] - Header-driven table parsing
//! - [`calculator`] - Per-item nickel-rounded tax and totals
//! - [`render`] - Receipt text
//! - [`facade`] - [`SalesTax`] entry point
//! - [`sink`] - Where rendered receipts go
//! - [`money`] - Integer-cents `Money`
//! - [`types`] - `LineItem`, `Receipt`, `TaxRate`
//! - [`error`] - Error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::SalesTax;
//!
//! let input = "Quantity, Product, Price
//! 1, imported box of chocolates, 10.00
//! 1, imported bottle of perfume, 47.50";
//!
//! let receipt = SalesTax::new().for_input(input)?.as_output(None)?;
//! assert!(receipt.ends_with("Sales Taxes: 7.65\nTotal: 65.15"));
//! # Ok::<(), tally_core::CoreError>(())
//! ```

pub mod calculator;
pub mod error;
pub mod facade;
pub mod money;
pub mod parser;
pub mod policy;
pub mod render;
pub mod schema;
pub mod sink;
pub mod types;

pub use error::{CoreError, CoreResult, ValidationError};
pub use facade::{Computation, SalesTax};
pub use money::Money;
pub use policy::TaxPolicy;
pub use sink::{FileSink, ReceiptSink};
pub use types::*;
