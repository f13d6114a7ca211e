//! Error types for schema parsing and validation.

use thiserror::Error;

/// Result alias used throughout the schema crate.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Error type for schema parsing operations.
///
/// Every rejection falls into exactly one of two classes: the document breaks
/// the grammar ([`SchemaError::InvalidSchema`]) or it names a type this engine
/// cannot resolve ([`SchemaError::UnsupportedType`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The document violates the schema grammar.
    #[error("invalid schema at {path}: {reason}")]
    InvalidSchema {
        /// Location of the offending node.
        path: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The document names a type that is neither built in nor defined.
    #[error("unsupported type '{name}' at {path}")]
    UnsupportedType {
        /// Location of the offending node.
        path: String,
        /// The unrecognized type name.
        name: String,
    },
}

/// Classification of a [`SchemaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Grammar violation.
    InvalidSchema,
    /// Unknown or unresolvable type name.
    UnsupportedType,
}

impl SchemaError {
    /// Creates an invalid schema error.
    pub fn invalid(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSchema {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates an unsupported type error.
    pub fn unsupported(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Returns the error classification.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSchema { .. } => ErrorKind::InvalidSchema,
            Self::UnsupportedType { .. } => ErrorKind::UnsupportedType,
        }
    }

    /// Returns the location of the offending node.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::InvalidSchema { path, .. } | Self::UnsupportedType { path, .. } => path,
        }
    }

    /// Returns true if this is a grammar violation.
    #[must_use]
    pub const fn is_invalid_schema(&self) -> bool {
        matches!(self, Self::InvalidSchema { .. })
    }

    /// Returns true if this is an unknown type.
    #[must_use]
    pub const fn is_unsupported_type(&self) -> bool {
        matches!(self, Self::UnsupportedType { .. })
    }
}
