//! Relational column catalogue types.

use crate::error::SqlMappingError;
use std::fmt;

/// Catalogue data types with a schema counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlType {
    /// Fixed-length character string.
    Char,
    /// Fixed-length national character string.
    NChar,
    /// Variable-length character string.
    VarChar,
    /// Variable-length national character string.
    NVarChar,
    /// Text of up to 64 KiB.
    Text,
    /// Text of up to 255 bytes.
    TinyText,
    /// Text of up to 16 MiB.
    MediumText,
    /// Text of up to 4 GiB.
    LongText,
    /// One value from a closed list.
    Enum,
    /// Any subset of a closed list.
    Set,
    /// Binary large object.
    Blob,
    /// Medium binary large object.
    MediumBlob,
    /// Long binary large object.
    LongBlob,
    /// 8-bit integer.
    TinyInt,
    /// 16-bit integer.
    SmallInt,
    /// 24-bit integer.
    MediumInt,
    /// 32-bit integer.
    Int,
    /// Four-digit year.
    Year,
    /// 64-bit integer.
    BigInt,
    /// Single precision float.
    Float,
    /// Double precision float.
    Double,
    /// Exact fixed-point number.
    Decimal,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Date and time without zone.
    DateTime,
    /// Date and time stored as UTC.
    Timestamp,
}

impl SqlType {
    /// Returns the catalogue spelling.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::NChar => "nchar",
            Self::VarChar => "varchar",
            Self::NVarChar => "nvarchar",
            Self::Text => "text",
            Self::TinyText => "tinytext",
            Self::MediumText => "mediumtext",
            Self::LongText => "longtext",
            Self::Enum => "enum",
            Self::Set => "set",
            Self::Blob => "blob",
            Self::MediumBlob => "mediumblob",
            Self::LongBlob => "longblob",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::MediumInt => "mediumint",
            Self::Int => "int",
            Self::Year => "year",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
        }
    }

    /// Parses a catalogue data type, ignoring case.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "char" => Some(Self::Char),
            "nchar" => Some(Self::NChar),
            "varchar" => Some(Self::VarChar),
            "nvarchar" => Some(Self::NVarChar),
            "text" => Some(Self::Text),
            "tinytext" => Some(Self::TinyText),
            "mediumtext" => Some(Self::MediumText),
            "longtext" => Some(Self::LongText),
            "enum" => Some(Self::Enum),
            "set" => Some(Self::Set),
            "blob" => Some(Self::Blob),
            "mediumblob" => Some(Self::MediumBlob),
            "longblob" => Some(Self::LongBlob),
            "tinyint" => Some(Self::TinyInt),
            "smallint" => Some(Self::SmallInt),
            "mediumint" => Some(Self::MediumInt),
            "int" | "integer" => Some(Self::Int),
            "year" => Some(Self::Year),
            "bigint" => Some(Self::BigInt),
            "float" => Some(Self::Float),
            "double" => Some(Self::Double),
            "decimal" => Some(Self::Decimal),
            "date" => Some(Self::Date),
            "time" => Some(Self::Time),
            "datetime" => Some(Self::DateTime),
            "timestamp" => Some(Self::Timestamp),
            _ => None,
        }
    }

    /// Returns true for character and text types.
    #[must_use]
    pub const fn is_textual(&self) -> bool {
        matches!(
            self,
            Self::Char
                | Self::NChar
                | Self::VarChar
                | Self::NVarChar
                | Self::Text
                | Self::TinyText
                | Self::MediumText
                | Self::LongText
                | Self::Enum
                | Self::Set
        )
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column as described by the database catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Data type.
    pub data_type: SqlType,
    /// Whether the column accepts SQL `NULL`.
    pub nullable: bool,
    /// Raw default value text, if any.
    pub default: Option<String>,
    /// Numeric precision for decimal columns.
    pub numeric_precision: Option<u32>,
    /// Numeric scale for decimal columns.
    pub numeric_scale: Option<u32>,
    /// Maximum length in bytes for character columns.
    pub char_bytes: Option<usize>,
}

impl Column {
    /// Creates a non-nullable column without default.
    pub fn new(name: impl Into<String>, data_type: SqlType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: false,
            default: None,
            numeric_precision: None,
            numeric_scale: None,
            char_bytes: None,
        }
    }

    /// Creates a column from the catalogue's textual data type.
    ///
    /// # Errors
    /// Returns `UnsupportedColumnType` if the data type is unknown.
    pub fn from_catalog(name: impl Into<String>, data_type: &str) -> Result<Self, SqlMappingError> {
        let name = name.into();
        match SqlType::parse(data_type) {
            Some(sql_type) => Ok(Self::new(name, sql_type)),
            None => Err(SqlMappingError::UnsupportedColumnType {
                column: name,
                data_type: data_type.to_string(),
            }),
        }
    }

    /// Sets nullability.
    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets the raw default value.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Sets numeric precision and scale.
    #[must_use]
    pub fn with_numeric(mut self, precision: u32, scale: u32) -> Self {
        self.numeric_precision = Some(precision);
        self.numeric_scale = Some(scale);
        self
    }

    /// Sets the character byte length.
    #[must_use]
    pub fn with_char_bytes(mut self, len: usize) -> Self {
        self.char_bytes = Some(len);
        self
    }
}
