//! Prelude module for convenient imports.
//!
//! ```
//! use avrokit::prelude::*;
//! ```

// Schema model
pub use avrokit_schema::{
    ComplexType, EnumSchema, Field, FieldOrder, FixedSchema, Logical, LogicalType, Name,
    NamedSchema, PrimitiveType, RecordSchema, Schema, TypeName, UnionSchema,
};

// Parsing and canonical form
pub use avrokit_schema::{
    SchemaError, SchemaParser, parse_schema, parse_schema_str, to_canonical_string, to_json,
};

// SQL mapping
pub use avrokit_sql::{
    Column, MappingOptions, SqlMappingError, SqlType, column_to_field, table_to_record,
};
