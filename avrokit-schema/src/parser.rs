//! Schema document parser.
//!
//! Turns an untyped JSON value into a [`Schema`], resolving named type
//! references through a [`NameRegistry`] that lives for a single parse.

use crate::error::{Result, SchemaError};
use crate::registry::{DuplicateName, NameRegistry};
use crate::schema::{
    DecimalParams, DerivedPrimitive, EnumSchema, Field, FieldOrder, FixedSchema, Logical, Name,
    NamedRef, NamedSchema, RecordSchema, Schema, UnionSchema,
};
use crate::types::{ComplexType, LogicalType, PrimitiveType};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Weak};

type Object = Map<String, Value>;

/// Default maximum nesting depth of a schema document.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Size in bytes of a fixed type carrying a duration.
pub const DURATION_SIZE: usize = 12;

/// Parses a schema document with the default configuration.
///
/// # Arguments
/// * `document` - JSON schema document
///
/// # Returns
/// Parsed schema or the first violation found.
///
/// # Errors
/// Returns `SchemaError::InvalidSchema` if the document breaks the grammar and
/// `SchemaError::UnsupportedType` if it names an unknown type.
pub fn parse_schema(document: &Value) -> Result<Schema> {
    SchemaParser::new().parse(document)
}

/// Parses a schema document from JSON text with the default configuration.
///
/// # Errors
/// Returns `SchemaError::InvalidSchema` for malformed JSON, otherwise as
/// [`parse_schema`].
pub fn parse_schema_str(json: &str) -> Result<Schema> {
    SchemaParser::new().parse_str(json)
}

/// Configurable schema parser.
#[derive(Debug, Clone)]
pub struct SchemaParser {
    max_depth: usize,
    validate_names: bool,
}

impl SchemaParser {
    /// Creates a parser with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            validate_names: true,
        }
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enables or disables identifier syntax checks on names and symbols.
    #[must_use]
    pub fn validate_names(mut self, validate: bool) -> Self {
        self.validate_names = validate;
        self
    }

    /// Parses a schema document.
    ///
    /// # Errors
    /// See [`parse_schema`].
    pub fn parse(&self, document: &Value) -> Result<Schema> {
        let mut ctx = ParseContext::new(self);
        let result = ctx.parse_value(document);
        match &result {
            Ok(schema) => tracing::debug!(
                type_name = %schema.type_name(),
                named_types = ctx.registry.len(),
                "parsed schema document"
            ),
            Err(err) => tracing::debug!(
                kind = ?err.kind(),
                path = err.path(),
                "rejected schema document: {}",
                err
            ),
        }
        result
    }

    /// Parses a schema document from JSON text.
    ///
    /// # Errors
    /// See [`parse_schema_str`].
    pub fn parse_str(&self, json: &str) -> Result<Schema> {
        let document: Value = serde_json::from_str(json)
            .map_err(|e| SchemaError::invalid("$", format!("malformed JSON: {e}")))?;
        self.parse(&document)
    }
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        parse_schema_str(s)
    }
}

#[derive(Debug, Clone, Copy)]
enum Segment {
    Key(&'static str),
    Index(usize),
}

#[derive(Debug, Clone, Copy)]
enum Carrier {
    Primitive(PrimitiveType),
    Fixed(usize),
}

impl fmt::Display for Carrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Fixed(size) => write!(f, "fixed({size})"),
        }
    }
}

/// Field attributes checked before any field type is resolved.
struct FieldShape<'v> {
    name: &'v str,
    schema: &'v Value,
    default: Option<Value>,
    order: Option<FieldOrder>,
    aliases: Option<Vec<String>>,
    doc: Option<String>,
}

/// State of one parse.
struct ParseContext<'p> {
    options: &'p SchemaParser,
    registry: NameRegistry,
    path: Vec<Segment>,
    namespaces: Vec<Option<String>>,
    depth: usize,
}

impl<'p> ParseContext<'p> {
    fn new(options: &'p SchemaParser) -> Self {
        Self {
            options,
            registry: NameRegistry::new(),
            path: Vec::new(),
            namespaces: Vec::new(),
            depth: 0,
        }
    }

    fn parse_value(&mut self, value: &Value) -> Result<Schema> {
        if self.depth >= self.options.max_depth {
            return Err(self.invalid(format!(
                "schema nesting exceeds the maximum depth of {}",
                self.options.max_depth
            )));
        }
        self.depth += 1;
        let result = match value {
            Value::String(name) => self.parse_type_reference(name),
            Value::Array(branches) => self.parse_union(branches),
            Value::Object(object) => self.parse_object(object),
            other => Err(self.invalid(format!(
                "expected a type name, union or schema object, found {}",
                json_kind(other)
            ))),
        };
        self.depth -= 1;
        result
    }

    /// Resolves a bare type name: primitives first, then named types.
    fn parse_type_reference(&self, name: &str) -> Result<Schema> {
        if let Some(prim) = PrimitiveType::parse(name) {
            return Ok(Schema::Primitive(prim));
        }
        if let Some(complex) = ComplexType::parse(name) {
            return Err(self.invalid(format!(
                "'{complex}' must be declared as a schema object"
            )));
        }
        // Logical types only exist as annotations on a carrier, so a bare
        // `"date"` is a grammar error rather than an unknown type.
        if LogicalType::parse(name).is_some() {
            return Err(self.invalid(format!(
                "logical type '{name}' must annotate a carrier type via 'logicalType'"
            )));
        }
        self.lookup(name)
            .map(|reference| Schema::Ref(reference.with_spelling(name)))
            .ok_or_else(|| SchemaError::unsupported(self.location(), name))
    }

    fn parse_union(&mut self, branches: &[Value]) -> Result<Schema> {
        let mut variants = Vec::with_capacity(branches.len());
        for (i, branch) in branches.iter().enumerate() {
            let variant = self.nested(Segment::Index(i), |ctx| match branch {
                Value::String(_) | Value::Object(_) => ctx.parse_value(branch),
                Value::Array(_) => Err(ctx.invalid("unions may not directly contain unions")),
                other => Err(ctx.invalid(format!(
                    "expected a type name or schema object, found {}",
                    json_kind(other)
                ))),
            })?;
            variants.push(variant);
        }
        Ok(Schema::Union(UnionSchema::new(variants)))
    }

    fn parse_object(&mut self, object: &Object) -> Result<Schema> {
        let type_name = self.required_str(object, "type")?;

        if let Some(prim) = PrimitiveType::parse(type_name) {
            return self.parse_primitive(prim, object);
        }
        match ComplexType::parse(type_name) {
            Some(
                kind @ (ComplexType::Record
                | ComplexType::Array
                | ComplexType::Map
                | ComplexType::Enum),
            ) if object.contains_key("logicalType") => Err(self.invalid_attr(
                "logicalType",
                format!("logical types cannot annotate {kind}"),
            )),
            Some(ComplexType::Record) => self.parse_record(object),
            Some(ComplexType::Array) => self.parse_array(object),
            Some(ComplexType::Map) => self.parse_map(object),
            Some(ComplexType::Enum) => self.parse_enum(object),
            Some(ComplexType::Fixed) => self.parse_fixed(object),
            Some(ComplexType::Union) => Err(self.invalid_attr(
                "type",
                "unions are written as JSON arrays, not as 'union' objects",
            )),
            None if LogicalType::parse(type_name).is_some() => Err(self.invalid_attr(
                "type",
                format!("logical type '{type_name}' must be given as 'logicalType'"),
            )),
            None => self
                .lookup(type_name)
                .map(|reference| Schema::Ref(reference.with_spelling(type_name)))
                .ok_or_else(|| SchemaError::unsupported(self.location_with("type"), type_name)),
        }
    }

    fn parse_primitive(&mut self, prim: PrimitiveType, object: &Object) -> Result<Schema> {
        match object.get("logicalType") {
            None => Ok(Schema::Primitive(prim)),
            Some(value) => {
                let logical = self.parse_logical(value, object, Carrier::Primitive(prim))?;
                Ok(Schema::Derived(DerivedPrimitive::new(prim, logical)))
            }
        }
    }

    fn parse_logical(&self, value: &Value, object: &Object, carrier: Carrier) -> Result<Logical> {
        let Value::String(name) = value else {
            return Err(self.invalid_attr(
                "logicalType",
                format!("expected a string, found {}", json_kind(value)),
            ));
        };
        let Some(logical_type) = LogicalType::parse(name) else {
            return Err(match carrier {
                Carrier::Primitive(_) => {
                    SchemaError::unsupported(self.location_with("logicalType"), name.as_str())
                }
                // Fixed types only ever carry decimal or duration.
                Carrier::Fixed(_) => self.invalid_attr(
                    "logicalType",
                    format!("logical type '{name}' cannot annotate {carrier}"),
                ),
            });
        };
        let accepted = match carrier {
            Carrier::Primitive(prim) => logical_type.accepts_primitive(prim),
            Carrier::Fixed(_) => logical_type.accepts_fixed(),
        };
        if !accepted {
            return Err(self.invalid_attr(
                "logicalType",
                format!("logical type '{logical_type}' cannot annotate {carrier}"),
            ));
        }

        match logical_type {
            LogicalType::Date => Ok(Logical::Date),
            LogicalType::Time => Ok(Logical::Time),
            LogicalType::Timestamp => Ok(Logical::Timestamp),
            LogicalType::Duration => match carrier {
                Carrier::Fixed(size) if size != DURATION_SIZE => Err(self.invalid_attr(
                    "size",
                    format!("duration requires a fixed size of {DURATION_SIZE}, found {size}"),
                )),
                _ => Ok(Logical::Duration),
            },
            LogicalType::Decimal => self.parse_decimal(object, carrier).map(Logical::Decimal),
        }
    }

    fn parse_decimal(&self, object: &Object, carrier: Carrier) -> Result<DecimalParams> {
        let precision = match object.get("precision") {
            Some(value) => self.integer_attr(value, "precision", 1)?,
            None => {
                return Err(self.invalid_attr("precision", "decimal requires a precision"));
            }
        };
        let scale = match object.get("scale") {
            Some(value) => Some(self.integer_attr(value, "scale", 0)?),
            None => None,
        };

        if let Some(scale) = scale {
            if scale > precision {
                return Err(self.invalid_attr(
                    "scale",
                    format!("scale {scale} exceeds precision {precision}"),
                ));
            }
        }
        if let Carrier::Fixed(size) = carrier {
            let max = max_decimal_precision(size);
            if precision > max {
                return Err(self.invalid_attr(
                    "precision",
                    format!("precision {precision} exceeds {max}, the maximum for fixed({size})"),
                ));
            }
        }

        let precision = self.to_u32(precision, "precision")?;
        let scale = scale.map(|s| self.to_u32(s, "scale")).transpose()?;
        Ok(DecimalParams::new(precision, scale))
    }

    fn parse_record(&mut self, object: &Object) -> Result<Schema> {
        let name = self.parse_type_name(object)?;
        let aliases = self.optional_names(object, "aliases")?;
        let doc = self.optional_str(object, "doc")?.map(str::to_string);
        let fields = match object.get("fields") {
            Some(Value::Array(fields)) => fields,
            Some(other) => {
                return Err(self.invalid_attr(
                    "fields",
                    format!("expected an array, found {}", json_kind(other)),
                ));
            }
            None => return Err(self.invalid_attr("fields", "missing required attribute")),
        };

        let shapes = self.nested(Segment::Key("fields"), |ctx| ctx.field_shapes(fields))?;
        self.ensure_undefined(&name)?;

        let mut failure = None;
        let record = Arc::new_cyclic(|handle: &Weak<RecordSchema>| {
            let mut record = RecordSchema::new(name.clone(), Vec::new());
            record.aliases = aliases;
            record.doc = doc;

            if let Err(dup) = self.registry.declare_record(&name, handle.clone()) {
                failure = Some(self.duplicate(dup));
                return record;
            }
            tracing::trace!(name = %name, "declared record");

            self.namespaces.push(name.namespace.clone());
            let fields = self.nested(Segment::Key("fields"), |ctx| ctx.parse_fields(shapes));
            self.namespaces.pop();

            match fields {
                Ok(fields) => record.fields = fields,
                Err(err) => failure = Some(err),
            }
            record
        });
        if let Some(err) = failure {
            return Err(err);
        }

        self.registry.complete_record(&record);
        Ok(Schema::Record(record))
    }

    /// Checks every field's own attributes before any type is resolved.
    fn field_shapes<'v>(&mut self, fields: &'v [Value]) -> Result<Vec<FieldShape<'v>>> {
        let mut shapes = Vec::with_capacity(fields.len());
        let mut seen = HashSet::new();
        for (i, field) in fields.iter().enumerate() {
            let shape = self.nested(Segment::Index(i), |ctx| ctx.field_shape(field))?;
            if !seen.insert(shape.name) {
                self.path.push(Segment::Index(i));
                let err = self.invalid_attr("name", format!("duplicate field '{}'", shape.name));
                self.path.pop();
                return Err(err);
            }
            shapes.push(shape);
        }
        Ok(shapes)
    }

    fn field_shape<'v>(&self, value: &'v Value) -> Result<FieldShape<'v>> {
        let Value::Object(object) = value else {
            return Err(self.invalid(format!(
                "expected a field object, found {}",
                json_kind(value)
            )));
        };
        let name = self.required_str(object, "name")?;
        if self.options.validate_names && !is_identifier(name) {
            return Err(self.invalid_attr("name", format!("'{name}' is not a valid name")));
        }
        let Some(schema) = object.get("type") else {
            return Err(self.invalid_attr("type", "missing required attribute"));
        };
        let order = match object.get("order") {
            None => None,
            Some(Value::String(order)) => Some(FieldOrder::parse(order).ok_or_else(|| {
                self.invalid_attr(
                    "order",
                    format!("expected ascending, descending or ignore, found '{order}'"),
                )
            })?),
            Some(other) => {
                return Err(self.invalid_attr(
                    "order",
                    format!("expected a string, found {}", json_kind(other)),
                ));
            }
        };

        Ok(FieldShape {
            name,
            schema,
            default: object.get("default").cloned(),
            order,
            aliases: self.optional_names(object, "aliases")?,
            doc: self.optional_str(object, "doc")?.map(str::to_string),
        })
    }

    fn parse_fields(&mut self, shapes: Vec<FieldShape<'_>>) -> Result<Vec<Field>> {
        let mut fields = Vec::with_capacity(shapes.len());
        for (i, shape) in shapes.into_iter().enumerate() {
            let schema = self.nested(Segment::Index(i), |ctx| {
                ctx.nested(Segment::Key("type"), |ctx| ctx.parse_value(shape.schema))
            })?;
            fields.push(Field {
                name: shape.name.to_string(),
                schema,
                default: shape.default,
                order: shape.order,
                aliases: shape.aliases,
                doc: shape.doc,
            });
        }
        Ok(fields)
    }

    fn parse_array(&mut self, object: &Object) -> Result<Schema> {
        match object.get("items") {
            Some(items) => {
                let items = self.nested(Segment::Key("items"), |ctx| ctx.parse_value(items))?;
                Ok(Schema::array(items))
            }
            None if object.contains_key("values") => Err(self.invalid_attr(
                "values",
                "arrays declare their element type with 'items'",
            )),
            None => Err(self.invalid_attr("items", "missing required attribute")),
        }
    }

    fn parse_map(&mut self, object: &Object) -> Result<Schema> {
        match object.get("values") {
            Some(values) => {
                let values = self.nested(Segment::Key("values"), |ctx| ctx.parse_value(values))?;
                Ok(Schema::map(values))
            }
            None if object.contains_key("items") => Err(self.invalid_attr(
                "items",
                "maps declare their value type with 'values'",
            )),
            None => Err(self.invalid_attr("values", "missing required attribute")),
        }
    }

    fn parse_enum(&mut self, object: &Object) -> Result<Schema> {
        let name = self.parse_type_name(object)?;
        let aliases = self.optional_names(object, "aliases")?;
        let doc = self.optional_str(object, "doc")?.map(str::to_string);
        let raw_symbols = match object.get("symbols") {
            Some(Value::Array(symbols)) => symbols,
            Some(other) => {
                return Err(self.invalid_attr(
                    "symbols",
                    format!("expected an array, found {}", json_kind(other)),
                ));
            }
            None => return Err(self.invalid_attr("symbols", "missing required attribute")),
        };

        let mut symbols = Vec::with_capacity(raw_symbols.len());
        for (i, symbol) in raw_symbols.iter().enumerate() {
            let symbol = self.nested(Segment::Key("symbols"), |ctx| {
                ctx.nested(Segment::Index(i), |ctx| ctx.enum_symbol(symbol, &symbols))
            })?;
            symbols.push(symbol);
        }

        let mut enumeration = EnumSchema::new(name, symbols);
        enumeration.aliases = aliases;
        enumeration.doc = doc;
        let enumeration = Arc::new(enumeration);
        self.define(NamedSchema::Enum(Arc::clone(&enumeration)))?;
        Ok(Schema::Enum(enumeration))
    }

    fn enum_symbol(&self, symbol: &Value, seen: &[String]) -> Result<String> {
        let Value::String(symbol) = symbol else {
            return Err(self.invalid(format!(
                "expected a string symbol, found {}",
                json_kind(symbol)
            )));
        };
        if self.options.validate_names && !is_identifier(symbol) {
            return Err(self.invalid(format!("'{symbol}' is not a valid symbol")));
        }
        if seen.contains(symbol) {
            return Err(self.invalid(format!("duplicate symbol '{symbol}'")));
        }
        Ok(symbol.clone())
    }

    fn parse_fixed(&mut self, object: &Object) -> Result<Schema> {
        let name = self.parse_type_name(object)?;
        let aliases = self.optional_names(object, "aliases")?;
        let doc = self.optional_str(object, "doc")?.map(str::to_string);
        let size = match object.get("size") {
            Some(value) => self.integer_attr(value, "size", 1)?,
            None => return Err(self.invalid_attr("size", "missing required attribute")),
        };
        let size = usize::try_from(size)
            .map_err(|_| self.invalid_attr("size", format!("size {size} is out of range")))?;
        let logical = match object.get("logicalType") {
            Some(value) => Some(self.parse_logical(value, object, Carrier::Fixed(size))?),
            None => None,
        };

        let mut fixed = FixedSchema::new(name, size);
        fixed.aliases = aliases;
        fixed.doc = doc;
        fixed.logical = logical;
        let fixed = Arc::new(fixed);
        self.define(NamedSchema::Fixed(Arc::clone(&fixed)))?;
        Ok(Schema::Fixed(fixed))
    }

    /// Reads `name` and `namespace`, qualifying the name with the enclosing
    /// namespace when neither supplies one.
    fn parse_type_name(&self, object: &Object) -> Result<Name> {
        let raw = self.required_str(object, "name")?;
        let declared = self.optional_str(object, "namespace")?;

        let mut name = Name::new(raw);
        if name.namespace.is_none() {
            match declared {
                Some(namespace) => name = name.with_namespace(namespace),
                None => {
                    if let Some(namespace) = self.enclosing_namespace() {
                        name = name.with_namespace(namespace);
                    }
                }
            }
        }

        if self.options.validate_names {
            if !is_identifier(&name.name) {
                return Err(self.invalid_attr("name", format!("'{raw}' is not a valid name")));
            }
            if let Some(namespace) = &name.namespace {
                if !namespace.split('.').all(is_identifier) {
                    return Err(self.invalid_attr(
                        "namespace",
                        format!("'{namespace}' is not a valid namespace"),
                    ));
                }
            }
        }
        if PrimitiveType::parse(&name.name).is_some() {
            return Err(self.invalid_attr(
                "name",
                format!("'{raw}' would redefine a primitive type"),
            ));
        }
        Ok(name.with_spelling(raw, declared))
    }

    fn define(&mut self, named: NamedSchema) -> Result<()> {
        tracing::trace!(name = %named.name(), kind = %named.kind(), "defined named type");
        self.registry.define(named).map_err(|dup| self.duplicate(dup))
    }

    fn ensure_undefined(&self, name: &Name) -> Result<()> {
        let fullname = name.fullname();
        if self.registry.contains(&fullname) {
            return Err(self.duplicate(DuplicateName { fullname }));
        }
        Ok(())
    }

    fn duplicate(&self, dup: DuplicateName) -> SchemaError {
        self.invalid_attr("name", dup.to_string())
    }

    fn enclosing_namespace(&self) -> Option<&str> {
        self.namespaces.last().and_then(|ns| ns.as_deref())
    }

    /// Looks a name up, trying the enclosing namespace first for bare names.
    fn lookup(&self, name: &str) -> Option<NamedRef> {
        if !name.contains('.') {
            if let Some(namespace) = self.enclosing_namespace() {
                if let Some(found) = self.registry.resolve(&format!("{namespace}.{name}")) {
                    return Some(found);
                }
            }
        }
        self.registry.resolve(name)
    }

    fn required_str<'v>(&self, object: &'v Object, key: &'static str) -> Result<&'v str> {
        match object.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(self.invalid_attr(
                key,
                format!("expected a string, found {}", json_kind(other)),
            )),
            None => Err(self.invalid_attr(key, "missing required attribute")),
        }
    }

    fn optional_str<'v>(&self, object: &'v Object, key: &'static str) -> Result<Option<&'v str>> {
        match object.get(key) {
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(self.invalid_attr(
                key,
                format!("expected a string, found {}", json_kind(other)),
            )),
            None => Ok(None),
        }
    }

    fn optional_names(&self, object: &Object, key: &'static str) -> Result<Option<Vec<String>>> {
        let items = match object.get(key) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(self.invalid_attr(
                    key,
                    format!("expected an array of names, found {}", json_kind(other)),
                ));
            }
            None => return Ok(None),
        };

        let mut names = Vec::with_capacity(items.len());
        for item in items {
            let Value::String(name) = item else {
                return Err(self.invalid_attr(
                    key,
                    format!("expected a string name, found {}", json_kind(item)),
                ));
            };
            if self.options.validate_names && !name.split('.').all(is_identifier) {
                return Err(self.invalid_attr(key, format!("'{name}' is not a valid name")));
            }
            names.push(name.clone());
        }
        Ok(Some(names))
    }

    fn integer_attr(&self, value: &Value, key: &'static str, min: u64) -> Result<u64> {
        let Some(number) = value.as_number() else {
            return Err(self.invalid_attr(
                key,
                format!("expected an integer, found {}", json_kind(value)),
            ));
        };
        match (number.as_u64(), number.as_i64()) {
            (Some(n), _) if n >= min => Ok(n),
            (Some(n), _) => Err(self.invalid_attr(key, format!("must be at least {min}, found {n}"))),
            (None, Some(n)) => Err(self.invalid_attr(key, format!("must be at least {min}, found {n}"))),
            (None, None) => Err(self.invalid_attr(
                key,
                format!("expected an integer, found {number}"),
            )),
        }
    }

    fn to_u32(&self, value: u64, key: &'static str) -> Result<u32> {
        u32::try_from(value)
            .map_err(|_| self.invalid_attr(key, format!("{value} is out of range")))
    }

    fn nested<T>(&mut self, segment: Segment, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    fn location(&self) -> String {
        let mut location = String::from("$");
        for segment in &self.path {
            match segment {
                Segment::Key(key) => {
                    location.push('.');
                    location.push_str(key);
                }
                Segment::Index(i) => {
                    location.push('[');
                    location.push_str(&i.to_string());
                    location.push(']');
                }
            }
        }
        location
    }

    fn location_with(&self, key: &str) -> String {
        format!("{}.{key}", self.location())
    }

    fn invalid(&self, reason: impl Into<String>) -> SchemaError {
        SchemaError::invalid(self.location(), reason)
    }

    fn invalid_attr(&self, key: &str, reason: impl Into<String>) -> SchemaError {
        SchemaError::invalid(self.location_with(key), reason)
    }
}

/// Largest decimal precision a fixed type of `size` bytes can hold.
fn max_decimal_precision(size: usize) -> u64 {
    let bits = size.saturating_mul(8).saturating_sub(1);
    // floor(log10(2^bits - 1)) == floor(bits * log10(2)) for bits > 0
    (bits as f64 * std::f64::consts::LOG10_2).floor() as u64
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
