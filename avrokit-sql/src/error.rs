//! Error types for column mapping.

use avrokit_schema::{PrimitiveType, SchemaError};
use thiserror::Error;

/// Error type for column mapping operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SqlMappingError {
    /// The column's data type has no schema counterpart.
    #[error("column '{column}' has unsupported data type '{data_type}'")]
    UnsupportedColumnType {
        /// Column name.
        column: String,
        /// Catalogue data type.
        data_type: String,
    },

    /// The column metadata cannot produce a valid schema.
    #[error("invalid column '{column}': {reason}")]
    InvalidColumn {
        /// Column name.
        column: String,
        /// What was missing or out of range.
        reason: String,
    },

    /// Timestamps can only be carried by `int` or `long`.
    #[error("timestamp carrier must be int or long, found '{0}'")]
    InvalidTimestampCarrier(PrimitiveType),

    /// The produced schema failed validation.
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

impl SqlMappingError {
    /// Creates an invalid column error.
    pub fn invalid_column(column: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColumn {
            column: column.into(),
            reason: reason.into(),
        }
    }
}
