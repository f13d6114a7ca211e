//! # avrokit
//!
//! Avro schema parsing, validation and canonical serialization.
//!
//! ## Features
//!
//! - **Strict validation** - every rejection is classified as an invalid
//!   schema or an unsupported type, with the JSON path of the offending node
//! - **Recursive types** - named types are shared, recursive references
//!   resolve to the enclosing definition
//! - **Canonical output** - fixed key order, named types written once
//! - **SQL mapping** - relational column catalogues to record schemas
//!
//! ## Quick Start
//!
//! ```
//! use avrokit::prelude::*;
//!
//! let schema: Schema = r#"{"type":"array","items":"string"}"#.parse()?;
//! assert_eq!(schema.type_name(), TypeName::Complex(ComplexType::Array));
//! assert_eq!(to_canonical_string(&schema), r#"{"type":"array","items":"string"}"#);
//! # Ok::<(), SchemaError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Type vocabulary, schema nodes, parser and canonical form
//! - [`sql`] - Column catalogue to record schema mapping

pub mod prelude;

/// Schema parsing, validation and canonical serialization.
pub mod schema {
    pub use avrokit_schema::*;
}

/// Column catalogue mapping.
pub mod sql {
    pub use avrokit_sql::*;
}

pub use avrokit_schema::{Schema, SchemaError, parse_schema, parse_schema_str};
pub use avrokit_sql::{SqlMappingError, table_to_record};
