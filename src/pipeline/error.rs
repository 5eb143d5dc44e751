//! Error types for the discretization core.
//!
//! The core only fails on structural or numeric contract violations of the
//! table it receives. I/O, parsing and persistence errors belong to the
//! loader and report layers, which use `anyhow`.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while validating a decision table or running the engine.
#[derive(Debug, Error)]
pub enum DiscretizeError {
    /// The table shape cannot be discretized (no attributes, ragged columns,
    /// duplicate attribute names).
    #[error("Invalid dataset: {0}")]
    MalformedTable(String),

    /// The requested decision column does not exist.
    #[error("Decision column '{column}' not found in dataset")]
    MissingDecisionColumn {
        /// Name that was requested
        column: String,
    },

    /// An attribute column is not numeric.
    ///
    /// Every column except the decision column must be numeric so that its
    /// values are totally ordered and have an arithmetic mean.
    #[error(
        "Invalid dataset: attribute column '{column}' has type {dtype}. \
         Expected n-1 numeric columns and a decision one"
    )]
    NonNumericAttribute {
        /// Offending column
        column: String,
        /// Its polars data type, rendered
        dtype: String,
    },

    /// A column contains null values. Imputation happens upstream.
    #[error("Column '{column}' contains {count} missing value(s); impute them before discretizing")]
    MissingValues {
        /// Column with nulls
        column: String,
        /// Number of null cells
        count: usize,
    },

    /// An attribute value is NaN or infinite, so no total order exists.
    #[error("Attribute '{attribute}' has a non-finite value at row {row}")]
    NonFiniteValue {
        /// Attribute name
        attribute: String,
        /// Zero-based row index
        row: usize,
    },

    /// Error bubbled up from polars while reading or building frames.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
