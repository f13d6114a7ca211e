//! Canonical serializer.
//!
//! Writes a [`Schema`] back to JSON with a fixed key order per variant. The
//! first occurrence of a named type is written in full and every later
//! occurrence as its name, so the output reparses to an equivalent tree.
//!
//! Names that came from a document are written as that document spelled
//! them (dotted names, redundant or empty namespaces) as long as the
//! spelling still denotes the same type where it is written. Otherwise the
//! name is written relative to the enclosing namespace.
//!
//! There is no way to spell a reference to a type without a namespace from
//! inside a namespace that defines a type with the same local name. A
//! constructed tree in that shape is written with the bare name, which
//! reparses to the namespaced type.

use crate::schema::{
    DecimalParams, EnumSchema, Field, FixedSchema, Logical, Name, NamedRef, RecordSchema, Schema,
    Spelling,
};
use crate::types::{ComplexType, PrimitiveType};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// Converts a schema to its canonical JSON value.
#[must_use]
pub fn to_json(schema: &Schema) -> Value {
    CanonicalWriter::default().write(schema)
}

/// Converts a schema to compact canonical JSON text.
#[must_use]
pub fn to_canonical_string(schema: &Schema) -> String {
    to_json(schema).to_string()
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        to_json(self).serialize(serializer)
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", to_json(self))
    }
}

#[derive(Default)]
struct CanonicalWriter {
    emitted: HashSet<String>,
    namespaces: Vec<Option<String>>,
}

impl CanonicalWriter {
    fn write(&mut self, schema: &Schema) -> Value {
        match schema {
            Schema::Primitive(prim) => Value::from(prim.as_str()),
            Schema::Derived(derived) => {
                let mut object = Map::new();
                object.insert("type".into(), derived.carrier.as_str().into());
                write_logical(&mut object, &derived.logical);
                Value::Object(object)
            }
            Schema::Union(union) => {
                Value::Array(union.variants().iter().map(|v| self.write(v)).collect())
            }
            Schema::Record(record) => self.write_record(record),
            Schema::Array(items) => {
                let mut object = Map::new();
                object.insert("type".into(), ComplexType::Array.as_str().into());
                object.insert("items".into(), self.write(items));
                Value::Object(object)
            }
            Schema::Map(values) => {
                let mut object = Map::new();
                object.insert("type".into(), ComplexType::Map.as_str().into());
                object.insert("values".into(), self.write(values));
                Value::Object(object)
            }
            Schema::Enum(enumeration) => self.write_enum(enumeration),
            Schema::Fixed(fixed) => self.write_fixed(fixed),
            // Unresolvable references can only be written by name.
            Schema::Ref(reference) => match reference.resolve() {
                Some(named) if !self.emitted.contains(&named.name().fullname()) => {
                    self.write(&Schema::from(named))
                }
                _ => self.write_reference(reference),
            },
        }
    }

    fn write_record(&mut self, record: &RecordSchema) -> Value {
        let Some(mut object) = self.named_header(ComplexType::Record, &record.name) else {
            return self.reference(&record.name);
        };
        write_doc_and_aliases(&mut object, record.aliases.as_deref(), record.doc.as_deref());

        self.namespaces.push(record.name.namespace.clone());
        let fields = record.fields.iter().map(|f| self.write_field(f)).collect();
        self.namespaces.pop();

        object.insert("fields".into(), Value::Array(fields));
        Value::Object(object)
    }

    fn write_field(&mut self, field: &Field) -> Value {
        let mut object = Map::new();
        object.insert("name".into(), field.name.as_str().into());
        object.insert("type".into(), self.write(&field.schema));
        if let Some(order) = field.order {
            object.insert("order".into(), order.as_str().into());
        }
        if let Some(default) = &field.default {
            object.insert("default".into(), default.clone());
        }
        if let Some(aliases) = &field.aliases {
            object.insert("aliases".into(), string_array(aliases));
        }
        if let Some(doc) = &field.doc {
            object.insert("doc".into(), doc.as_str().into());
        }
        Value::Object(object)
    }

    fn write_enum(&mut self, enumeration: &EnumSchema) -> Value {
        let Some(mut object) = self.named_header(ComplexType::Enum, &enumeration.name) else {
            return self.reference(&enumeration.name);
        };
        write_doc_and_aliases(
            &mut object,
            enumeration.aliases.as_deref(),
            enumeration.doc.as_deref(),
        );
        object.insert("symbols".into(), string_array(&enumeration.symbols));
        Value::Object(object)
    }

    fn write_fixed(&mut self, fixed: &FixedSchema) -> Value {
        let Some(mut object) = self.named_header(ComplexType::Fixed, &fixed.name) else {
            return self.reference(&fixed.name);
        };
        write_doc_and_aliases(&mut object, fixed.aliases.as_deref(), fixed.doc.as_deref());
        object.insert("size".into(), fixed.size.into());
        if let Some(logical) = &fixed.logical {
            write_logical(&mut object, logical);
        }
        Value::Object(object)
    }

    /// Starts a named definition, or returns `None` if the name was
    /// already written.
    fn named_header(&mut self, kind: ComplexType, name: &Name) -> Option<Map<String, Value>> {
        if !self.emitted.insert(name.fullname()) {
            return None;
        }
        let mut object = Map::new();
        object.insert("type".into(), kind.as_str().into());
        match name.spelling().filter(|s| self.declared_name(s) == *name) {
            Some(spelling) => {
                object.insert("name".into(), spelling.name.as_str().into());
                if let Some(namespace) = &spelling.namespace {
                    object.insert("namespace".into(), namespace.as_str().into());
                }
            }
            None => {
                object.insert("name".into(), name.name.as_str().into());
                if name.namespace.as_deref() != self.enclosing_namespace() {
                    let namespace = name.namespace.as_deref().unwrap_or_default();
                    object.insert("namespace".into(), namespace.into());
                }
            }
        }
        Some(object)
    }

    /// Name a definition with this spelling would declare here.
    fn declared_name(&self, spelling: &Spelling) -> Name {
        let name = Name::new(spelling.name.as_str());
        if name.namespace.is_some() {
            return name;
        }
        match (spelling.namespace.as_deref(), self.enclosing_namespace()) {
            (Some(namespace), _) | (None, Some(namespace)) => name.with_namespace(namespace),
            (None, None) => name,
        }
    }

    fn write_reference(&self, reference: &NamedRef) -> Value {
        match reference.spelling() {
            Some(written) if self.resolves_to(written) == reference.name().fullname() => {
                Value::from(written)
            }
            _ => self.reference(reference.name()),
        }
    }

    /// Writes a name relative to the enclosing namespace.
    fn reference(&self, name: &Name) -> Value {
        if name.namespace.as_deref() == self.enclosing_namespace()
            && PrimitiveType::parse(&name.name).is_none()
        {
            return Value::from(name.name.as_str());
        }
        let fullname = name.fullname();
        if self.resolves_to(&fullname) != fullname {
            tracing::debug!(name = %fullname, "reference is shadowed by the enclosing namespace");
        }
        Value::from(fullname)
    }

    /// Fully-qualified name a reference written here resolves to when
    /// reparsed: bare names prefer a type in the enclosing namespace.
    fn resolves_to(&self, written: &str) -> String {
        if !written.contains('.') {
            if let Some(namespace) = self.enclosing_namespace() {
                let qualified = format!("{namespace}.{written}");
                if self.emitted.contains(&qualified) {
                    return qualified;
                }
            }
        }
        written.to_string()
    }

    fn enclosing_namespace(&self) -> Option<&str> {
        self.namespaces.last().and_then(|ns| ns.as_deref())
    }
}

fn write_doc_and_aliases(object: &mut Map<String, Value>, aliases: Option<&[String]>, doc: Option<&str>) {
    if let Some(aliases) = aliases {
        object.insert("aliases".into(), string_array(aliases));
    }
    if let Some(doc) = doc {
        object.insert("doc".into(), doc.into());
    }
}

fn write_logical(object: &mut Map<String, Value>, logical: &Logical) {
    object.insert(
        "logicalType".into(),
        logical.logical_type().as_str().into(),
    );
    if let Logical::Decimal(DecimalParams { precision, scale }) = logical {
        object.insert("precision".into(), (*precision).into());
        if let Some(scale) = scale {
            object.insert("scale".into(), (*scale).into());
        }
    }
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().map(|s| Value::from(s.as_str())).collect())
}
