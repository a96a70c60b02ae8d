//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError        - Anything that aborts a computation                 │
//! │  └── ValidationError - Field schema asked about an unknown field       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (tally-cli) → stderr       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is fatal to the current input. There is no partial receipt.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning input text into a receipt.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The facade was handed an empty string.
    #[error("Expected input")]
    EmptyInput,

    /// The header names a column the field schema does not know.
    ///
    /// ## When This Occurs
    /// ```text
    /// Foo, Bar          ← header line
    ///  │
    ///  ▼
    /// UnknownColumn { column: "Foo" }
    /// ```
    #[error("Unexpected column value: {column}")]
    UnknownColumn { column: String },

    /// The header does not name every field a line item needs.
    #[error("Missing column: {field}")]
    MissingColumn { field: String },

    /// The header names the same field twice.
    #[error("Duplicate column: {field}")]
    DuplicateColumn { field: String },

    /// A data line lacks a value for a column, or the value fails the
    /// column's pattern.
    ///
    /// `line` is 1-based and counts the header, so the first data row is
    /// line 2.
    #[error("Missing or invalid value for field {field} on line {line}")]
    RowValidation { field: String, line: usize },

    /// An item's taxed price, or a running total, left the representable
    /// range of cents.
    #[error("Amount out of range for {product}")]
    AmountOverflow { product: String },

    /// Parsing succeeded but produced no rows.
    #[error("Invalid data. Data required")]
    EmptyData,

    /// Writing the rendered receipt to its destination failed.
    #[error("Failed to write receipt to {}: {source}", path.display())]
    Sink {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field schema errors.
///
/// Header resolution rejects unknown names first, so this only surfaces when
/// a caller validates against a name directly.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Validation failed. Invalid field: {field}")]
    UnknownField { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::RowValidation {
            field: "Price".to_string(),
            line: 2,
        };
        assert_eq!(
            err.to_string(),
            "Missing or invalid value for field Price on line 2"
        );

        let err = CoreError::UnknownColumn {
            column: "Foo".to_string(),
        };
        assert_eq!(err.to_string(), "Unexpected column value: Foo");

        assert_eq!(CoreError::EmptyInput.to_string(), "Expected input");
        assert_eq!(CoreError::EmptyData.to_string(), "Invalid data. Data required");

        let err = CoreError::AmountOverflow {
            product: "music cd".to_string(),
        };
        assert_eq!(err.to_string(), "Amount out of range for music cd");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::UnknownField {
            field: "Colour".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation failed. Invalid field: Colour");
    }
}
