//! Column to schema mapping.
//!
//! Translates catalogue column metadata into record fields. The produced
//! record is re-parsed before it is returned, so every mapped table is a
//! schema the core parser accepts.

use crate::column::{Column, SqlType};
use crate::error::SqlMappingError;
use avrokit_schema::{
    Field, FixedSchema, Logical, LogicalType, Name, PrimitiveType, RecordSchema, Schema,
    parse_schema, to_json,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde_json::{Number, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Options controlling how tables are mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOptions {
    namespace: Option<String>,
    timestamp_carrier: PrimitiveType,
}

impl MappingOptions {
    /// Creates options with no namespace and `long` timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace: None,
            timestamp_carrier: PrimitiveType::Long,
        }
    }

    /// Sets the namespace of produced records.
    #[must_use]
    pub fn namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace;
        self
    }

    /// Sets the primitive carrying `datetime` and `timestamp` columns.
    #[must_use]
    pub fn timestamp_carrier(mut self, carrier: PrimitiveType) -> Self {
        self.timestamp_carrier = carrier;
        self
    }

    /// Returns the configured namespace.
    #[must_use]
    pub fn get_namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Returns the configured timestamp carrier.
    #[must_use]
    pub const fn get_timestamp_carrier(&self) -> PrimitiveType {
        self.timestamp_carrier
    }
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps one column to a record field.
///
/// # Errors
/// Returns `InvalidColumn` when a character column lacks a byte length or a
/// decimal column lacks a precision, and `InvalidTimestampCarrier` when the
/// options name a carrier other than `int` or `long`.
pub fn column_to_field(column: &Column, options: &MappingOptions) -> Result<Field, SqlMappingError> {
    let base = base_schema(column, options)?;
    let default = column.default.as_deref().map(|raw| convert_default(column, raw));

    let schema = match (&default, column.nullable) {
        (_, false) => base,
        (Some(value), true) if !value.is_null() => {
            Schema::union(vec![base, PrimitiveType::Null.into()])
        }
        (_, true) => Schema::nullable(base),
    };

    tracing::debug!(
        column = %column.name,
        data_type = %column.data_type,
        schema = %schema,
        "mapped column"
    );

    let field = Field::new(column.name.clone(), schema);
    Ok(match default {
        Some(value) => field.with_default(value),
        None => field,
    })
}

/// Maps a table to a record with one field per column, in column order.
///
/// # Errors
/// Returns the first column mapping error, or `Schema` if the produced
/// record does not reparse (for example a column name that is not a valid
/// identifier).
pub fn table_to_record(
    table: &str,
    columns: &[Column],
    options: &MappingOptions,
) -> Result<RecordSchema, SqlMappingError> {
    let fields = columns
        .iter()
        .map(|column| column_to_field(column, options))
        .collect::<Result<Vec<_>, _>>()?;

    let mut name = Name::new(table);
    if let Some(namespace) = &options.namespace {
        name = name.with_namespace(namespace.clone());
    }
    let record = RecordSchema::new(name, fields);

    parse_schema(&to_json(&Schema::record(record.clone())))?;
    tracing::debug!(table, columns = columns.len(), "mapped table");
    Ok(record)
}

fn base_schema(column: &Column, options: &MappingOptions) -> Result<Schema, SqlMappingError> {
    let schema = match column.data_type {
        SqlType::Char | SqlType::NChar => match column.char_bytes {
            Some(size) if size > 0 => {
                Schema::fixed(FixedSchema::new(Name::new(column.name.clone()), size))
            }
            _ => {
                return Err(SqlMappingError::invalid_column(
                    &column.name,
                    "character byte length must be positive",
                ));
            }
        },
        SqlType::VarChar
        | SqlType::NVarChar
        | SqlType::Text
        | SqlType::TinyText
        | SqlType::MediumText
        | SqlType::LongText
        | SqlType::Enum
        | SqlType::Set => PrimitiveType::String.into(),
        SqlType::Blob | SqlType::MediumBlob | SqlType::LongBlob => PrimitiveType::Bytes.into(),
        SqlType::TinyInt
        | SqlType::SmallInt
        | SqlType::MediumInt
        | SqlType::Int
        | SqlType::Year => PrimitiveType::Int.into(),
        SqlType::BigInt => PrimitiveType::Long.into(),
        SqlType::Float => PrimitiveType::Float.into(),
        SqlType::Double => PrimitiveType::Double.into(),
        SqlType::Decimal => match column.numeric_precision {
            Some(precision) if precision > 0 => {
                Schema::decimal(precision, column.numeric_scale.unwrap_or(0))
            }
            _ => {
                return Err(SqlMappingError::invalid_column(
                    &column.name,
                    "decimal precision must be positive",
                ));
            }
        },
        SqlType::Date => Schema::derived(PrimitiveType::Int, Logical::Date),
        SqlType::Time => Schema::derived(PrimitiveType::Int, Logical::Time),
        SqlType::DateTime | SqlType::Timestamp => {
            let carrier = options.timestamp_carrier;
            if !LogicalType::Timestamp.accepts_primitive(carrier) {
                return Err(SqlMappingError::InvalidTimestampCarrier(carrier));
            }
            Schema::derived(carrier, Logical::Timestamp)
        }
    };
    Ok(schema)
}

fn convert_default(column: &Column, raw: &str) -> Value {
    if column.nullable && raw.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    let converted = match column.data_type {
        SqlType::TinyInt
        | SqlType::SmallInt
        | SqlType::MediumInt
        | SqlType::Int
        | SqlType::Year
        | SqlType::BigInt => raw.trim().parse::<i64>().ok().map(Value::from),
        SqlType::Float | SqlType::Double => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        SqlType::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .map(|date| Value::from(date.signed_duration_since(NaiveDate::default()).num_days())),
        SqlType::Time => NaiveTime::parse_from_str(raw, TIME_FORMAT)
            .ok()
            .map(|time| Value::from(i64::from(time.num_seconds_from_midnight()) * 1000)),
        SqlType::DateTime | SqlType::Timestamp => {
            NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
                .ok()
                .map(|datetime| Value::from(datetime.and_utc().timestamp_millis()))
        }
        _ => None,
    };
    if converted.is_none() && !column.data_type.is_textual() {
        tracing::trace!(column = %column.name, raw, "default kept as text");
    }
    converted.unwrap_or_else(|| Value::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field_json(column: Column) -> Value {
        let field = column_to_field(&column, &MappingOptions::default()).unwrap();
        let record = Schema::record(RecordSchema::new(Name::new("t"), vec![field]));
        to_json(&record)["fields"][0].clone()
    }

    #[test]
    fn test_scalar_columns() {
        assert_eq!(
            field_json(Column::new("title", SqlType::VarChar)),
            json!({"name": "title", "type": "string"})
        );
        assert_eq!(
            field_json(Column::new("payload", SqlType::MediumBlob)),
            json!({"name": "payload", "type": "bytes"})
        );
        assert_eq!(
            field_json(Column::new("born", SqlType::Year)),
            json!({"name": "born", "type": "int"})
        );
        assert_eq!(
            field_json(Column::new("id", SqlType::BigInt)),
            json!({"name": "id", "type": "long"})
        );
        assert_eq!(
            field_json(Column::new("ratio", SqlType::Double)),
            json!({"name": "ratio", "type": "double"})
        );
    }

    #[test]
    fn test_char_column_is_fixed() {
        assert_eq!(
            field_json(Column::new("code", SqlType::Char).with_char_bytes(3)),
            json!({"name": "code", "type": {"type": "fixed", "name": "code", "size": 3}})
        );

        let err = column_to_field(&Column::new("code", SqlType::NChar), &MappingOptions::default())
            .unwrap_err();
        assert!(matches!(err, SqlMappingError::InvalidColumn { ref column, .. } if column == "code"));
    }

    #[test]
    fn test_decimal_column() {
        assert_eq!(
            field_json(Column::new("price", SqlType::Decimal).with_numeric(10, 2)),
            json!({"name": "price", "type": {"type": "bytes", "logicalType": "decimal", "precision": 10, "scale": 2}})
        );

        let err = column_to_field(
            &Column::new("price", SqlType::Decimal).with_numeric(0, 0),
            &MappingOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SqlMappingError::InvalidColumn { .. }));
    }

    #[test]
    fn test_temporal_columns() {
        assert_eq!(
            field_json(Column::new("day", SqlType::Date)),
            json!({"name": "day", "type": {"type": "int", "logicalType": "date"}})
        );
        assert_eq!(
            field_json(Column::new("at", SqlType::Time)),
            json!({"name": "at", "type": {"type": "int", "logicalType": "time"}})
        );
        assert_eq!(
            field_json(Column::new("created", SqlType::DateTime)),
            json!({"name": "created", "type": {"type": "long", "logicalType": "timestamp"}})
        );
    }

    #[test]
    fn test_timestamp_carrier() {
        let column = Column::new("created", SqlType::Timestamp);
        let options = MappingOptions::new().timestamp_carrier(PrimitiveType::Int);
        let field = column_to_field(&column, &options).unwrap();
        assert_eq!(
            field.schema,
            Schema::derived(PrimitiveType::Int, Logical::Timestamp)
        );

        let options = MappingOptions::new().timestamp_carrier(PrimitiveType::String);
        assert_eq!(
            column_to_field(&column, &options).unwrap_err(),
            SqlMappingError::InvalidTimestampCarrier(PrimitiveType::String)
        );
    }

    #[test]
    fn test_nullable_columns() {
        assert_eq!(
            field_json(Column::new("note", SqlType::Text).nullable(true)),
            json!({"name": "note", "type": ["null", "string"]})
        );
        assert_eq!(
            field_json(Column::new("note", SqlType::Text).nullable(true).with_default("NULL")),
            json!({"name": "note", "type": ["null", "string"], "default": null})
        );
        assert_eq!(
            field_json(Column::new("qty", SqlType::Int).nullable(true).with_default("1")),
            json!({"name": "qty", "type": ["int", "null"], "default": 1})
        );
    }

    #[test]
    fn test_defaults() {
        let convert = |column: Column| {
            let raw = column.default.clone().unwrap();
            convert_default(&column, &raw)
        };
        assert_eq!(
            convert(Column::new("n", SqlType::SmallInt).with_default("42")),
            json!(42)
        );
        assert_eq!(
            convert(Column::new("n", SqlType::Int).with_default("abc")),
            json!("abc")
        );
        assert_eq!(
            convert(Column::new("f", SqlType::Float).with_default("2.5")),
            json!(2.5)
        );
        assert_eq!(
            convert(Column::new("s", SqlType::VarChar).with_default("NULL")),
            json!("NULL")
        );
        assert_eq!(
            convert(Column::new("d", SqlType::Date).with_default("1970-01-11")),
            json!(10)
        );
        assert_eq!(
            convert(Column::new("t", SqlType::Time).with_default("01:00:01")),
            json!(3_601_000)
        );
        assert_eq!(
            convert(Column::new("ts", SqlType::DateTime).with_default("1970-01-02 00:00:00")),
            json!(86_400_000)
        );
        assert_eq!(
            convert(Column::new("ts", SqlType::Timestamp).with_default("CURRENT_TIMESTAMP")),
            json!("CURRENT_TIMESTAMP")
        );
        assert_eq!(
            convert(Column::new("p", SqlType::Decimal).with_default("9.99")),
            json!("9.99")
        );
    }

    #[test]
    fn test_table_to_record() {
        let columns = [
            Column::new("id", SqlType::BigInt),
            Column::new("name", SqlType::VarChar).nullable(true),
            Column::new("country", SqlType::Char).with_char_bytes(2),
            Column::new("balance", SqlType::Decimal).with_numeric(12, 2),
        ];
        let options = MappingOptions::new().namespace(Some("bank".to_string()));
        let record = table_to_record("accounts", &columns, &options).unwrap();

        assert_eq!(record.name.fullname(), "bank.accounts");
        let names: Vec<_> = record.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["id", "name", "country", "balance"]);
        assert!(record.field("name").unwrap().schema.is_nullable());
    }

    #[test]
    fn test_table_with_invalid_name() {
        let columns = [Column::new("first name", SqlType::VarChar)];
        let err = table_to_record("people", &columns, &MappingOptions::default()).unwrap_err();
        match err {
            SqlMappingError::Schema(schema_err) => assert!(schema_err.is_invalid_schema()),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
