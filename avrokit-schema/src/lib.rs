//! # avrokit Schema
//!
//! Avro schema document parser, validator and canonical serializer.
//!
//! This crate provides:
//! - The type vocabulary (primitive, complex and logical type tags)
//! - A closed schema representation with constructors for every variant
//! - A per-parse name registry resolving recursive and sibling references
//! - A parser that classifies every rejection as invalid or unsupported
//! - A canonical serializer with a fixed key order
//!
//! ```
//! use avrokit_schema::{parse_schema_str, to_canonical_string};
//!
//! let schema = parse_schema_str(
//!     r#"{"type":"record","name":"LongList","fields":[
//!         {"name":"value","type":"long"},
//!         {"name":"next","type":["null","LongList"]}]}"#,
//! )?;
//! assert_eq!(
//!     to_canonical_string(&schema),
//!     r#"{"type":"record","name":"LongList","fields":[{"name":"value","type":"long"},{"name":"next","type":["null","LongList"]}]}"#
//! );
//! # Ok::<(), avrokit_schema::SchemaError>(())
//! ```

pub mod canonical;
pub mod error;
pub mod parser;
pub mod registry;
pub mod schema;
pub mod types;

pub use canonical::{to_canonical_string, to_json};
pub use error::{ErrorKind, Result, SchemaError};
pub use parser::{SchemaParser, parse_schema, parse_schema_str};
pub use registry::{DuplicateName, NameRegistry};
pub use schema::{
    DecimalParams, DerivedPrimitive, EnumSchema, Field, FieldOrder, FixedSchema, Logical, Name,
    NamedRef, NamedSchema, RecordSchema, Schema, UnionSchema,
};
pub use types::{ComplexType, LogicalType, PrimitiveType, TypeName};
