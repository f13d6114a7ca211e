//! # avrokit SQL
//!
//! Maps relational column catalogues to Avro record schemas.
//!
//! ```
//! use avrokit_sql::{Column, MappingOptions, SqlType, table_to_record};
//!
//! let columns = [
//!     Column::new("id", SqlType::BigInt),
//!     Column::new("email", SqlType::VarChar).nullable(true),
//! ];
//! let record = table_to_record("users", &columns, &MappingOptions::default())?;
//! assert_eq!(record.fields.len(), 2);
//! # Ok::<(), avrokit_sql::SqlMappingError>(())
//! ```

pub mod column;
pub mod error;
pub mod mapping;

pub use column::{Column, SqlType};
pub use error::SqlMappingError;
pub use mapping::{MappingOptions, column_to_field, table_to_record};
