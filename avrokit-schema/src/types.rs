//! Type vocabulary.
//!
//! Closed sets of primitive, complex and logical type tags together with
//! their wire spellings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    /// No value.
    Null,
    /// Binary value.
    Boolean,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit floating point.
    Float,
    /// 64-bit floating point.
    Double,
    /// Sequence of 8-bit unsigned bytes.
    Bytes,
    /// Unicode character sequence.
    String,
}

impl PrimitiveType {
    /// All primitive types in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Null,
        Self::Boolean,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Bytes,
        Self::String,
    ];

    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bytes => "bytes",
            Self::String => "string",
        }
    }

    /// Parses a primitive type from its wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "null" => Some(Self::Null),
            "boolean" => Some(Self::Boolean),
            "int" => Some(Self::Int),
            "long" => Some(Self::Long),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "bytes" => Some(Self::Bytes),
            "string" => Some(Self::String),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complex types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexType {
    /// Ordered alternatives.
    Union,
    /// Named sequence of fields.
    Record,
    /// Homogeneous sequence.
    Array,
    /// String-keyed dictionary.
    Map,
    /// Named set of symbols.
    Enum,
    /// Named fixed-length byte block.
    Fixed,
}

impl ComplexType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Record => "record",
            Self::Array => "array",
            Self::Map => "map",
            Self::Enum => "enum",
            Self::Fixed => "fixed",
        }
    }

    /// Parses a complex type from its wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "union" => Some(Self::Union),
            "record" => Some(Self::Record),
            "array" => Some(Self::Array),
            "map" => Some(Self::Map),
            "enum" => Some(Self::Enum),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }

    /// Returns true for records, enums and fixed types.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Record | Self::Enum | Self::Fixed)
    }
}

impl fmt::Display for ComplexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logical types layered on a primitive or fixed carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalType {
    /// Arbitrary-precision signed decimal.
    Decimal,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Instant on the global timeline.
    Timestamp,
    /// Months, days and milliseconds.
    Duration,
}

impl LogicalType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Duration => "duration",
        }
    }

    /// Parses a logical type from its wire name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "decimal" => Some(Self::Decimal),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "timestamp" => Some(Self::Timestamp),
            "duration" => Some(Self::Duration),
            _ => None,
        }
    }

    /// Returns true if this logical type may refine the given primitive.
    #[must_use]
    pub const fn accepts_primitive(&self, carrier: PrimitiveType) -> bool {
        match self {
            Self::Date => matches!(carrier, PrimitiveType::Int),
            Self::Time | Self::Timestamp => {
                matches!(carrier, PrimitiveType::Int | PrimitiveType::Long)
            }
            Self::Decimal => matches!(carrier, PrimitiveType::Bytes),
            Self::Duration => false,
        }
    }

    /// Returns true if this logical type may refine a fixed type.
    #[must_use]
    pub const fn accepts_fixed(&self) -> bool {
        matches!(self, Self::Decimal | Self::Duration)
    }
}

impl fmt::Display for LogicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform type tag reported by every schema variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// A bare primitive.
    Primitive(PrimitiveType),
    /// A complex type.
    Complex(ComplexType),
    /// A logically refined primitive or fixed type.
    Logical(LogicalType),
}

impl TypeName {
    /// Returns the wire name of the tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Primitive(p) => p.as_str(),
            Self::Complex(c) => c.as_str(),
            Self::Logical(l) => l.as_str(),
        }
    }
}

impl From<PrimitiveType> for TypeName {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}

impl From<ComplexType> for TypeName {
    fn from(value: ComplexType) -> Self {
        Self::Complex(value)
    }
}

impl From<LogicalType> for TypeName {
    fn from(value: LogicalType) -> Self {
        Self::Logical(value)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
