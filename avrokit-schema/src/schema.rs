//! Schema node definitions.
//!
//! [`Schema`] is a closed set of variants, one per schema form. Named types
//! (records, enums and fixed types) are held behind [`Arc`] so that every
//! reference to them shares the single definition.

use crate::types::{ComplexType, LogicalType, PrimitiveType, TypeName};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

/// A parsed schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Bare primitive type.
    Primitive(PrimitiveType),
    /// Primitive refined by a logical type.
    Derived(DerivedPrimitive),
    /// Ordered alternatives.
    Union(UnionSchema),
    /// Record definition.
    Record(Arc<RecordSchema>),
    /// Array of `items`.
    Array(Box<Schema>),
    /// Map from strings to `values`.
    Map(Box<Schema>),
    /// Enum definition.
    Enum(Arc<EnumSchema>),
    /// Fixed definition.
    Fixed(Arc<FixedSchema>),
    /// Reference by name to a named type defined elsewhere in the tree.
    Ref(NamedRef),
}

impl Schema {
    /// Creates a primitive schema.
    #[must_use]
    pub const fn primitive(primitive: PrimitiveType) -> Self {
        Self::Primitive(primitive)
    }

    /// Creates a logically refined primitive schema.
    #[must_use]
    pub const fn derived(carrier: PrimitiveType, logical: Logical) -> Self {
        Self::Derived(DerivedPrimitive::new(carrier, logical))
    }

    /// Creates a `bytes` schema carrying a decimal logical type.
    #[must_use]
    pub const fn decimal(precision: u32, scale: u32) -> Self {
        Self::derived(
            PrimitiveType::Bytes,
            Logical::Decimal(DecimalParams::new(precision, Some(scale))),
        )
    }

    /// Creates an array schema.
    #[must_use]
    pub fn array(items: Schema) -> Self {
        Self::Array(Box::new(items))
    }

    /// Creates a map schema.
    #[must_use]
    pub fn map(values: Schema) -> Self {
        Self::Map(Box::new(values))
    }

    /// Creates a union schema.
    #[must_use]
    pub fn union(variants: Vec<Schema>) -> Self {
        Self::Union(UnionSchema::new(variants))
    }

    /// Wraps a schema in a `["null", schema]` union.
    #[must_use]
    pub fn nullable(schema: Schema) -> Self {
        Self::Union(UnionSchema::nullable(schema))
    }

    /// Creates a record schema.
    #[must_use]
    pub fn record(record: RecordSchema) -> Self {
        Self::Record(Arc::new(record))
    }

    /// Creates an enum schema.
    #[must_use]
    pub fn enumeration(enumeration: EnumSchema) -> Self {
        Self::Enum(Arc::new(enumeration))
    }

    /// Creates a fixed schema.
    #[must_use]
    pub fn fixed(fixed: FixedSchema) -> Self {
        Self::Fixed(Arc::new(fixed))
    }

    /// Returns the type tag of this schema.
    ///
    /// Refined schemas report their logical type and references report the
    /// kind of the type they name.
    #[must_use]
    pub fn type_name(&self) -> TypeName {
        match self {
            Self::Primitive(p) => TypeName::Primitive(*p),
            Self::Derived(d) => TypeName::Logical(d.logical.logical_type()),
            Self::Union(_) => TypeName::Complex(ComplexType::Union),
            Self::Record(_) => TypeName::Complex(ComplexType::Record),
            Self::Array(_) => TypeName::Complex(ComplexType::Array),
            Self::Map(_) => TypeName::Complex(ComplexType::Map),
            Self::Enum(_) => TypeName::Complex(ComplexType::Enum),
            Self::Fixed(f) => f.logical.as_ref().map_or(
                TypeName::Complex(ComplexType::Fixed),
                |logical| TypeName::Logical(logical.logical_type()),
            ),
            Self::Ref(r) => TypeName::Complex(r.kind()),
        }
    }

    /// Returns the logical refinement, if any.
    #[must_use]
    pub fn logical(&self) -> Option<&Logical> {
        match self {
            Self::Derived(d) => Some(&d.logical),
            Self::Fixed(f) => f.logical.as_ref(),
            _ => None,
        }
    }

    /// Returns the named type this schema defines or references.
    ///
    /// Returns `None` for anonymous schemas, and for a recursive reference
    /// whose enclosing record has been dropped.
    #[must_use]
    pub fn as_named(&self) -> Option<NamedSchema> {
        match self {
            Self::Record(r) => Some(NamedSchema::Record(Arc::clone(r))),
            Self::Enum(e) => Some(NamedSchema::Enum(Arc::clone(e))),
            Self::Fixed(f) => Some(NamedSchema::Fixed(Arc::clone(f))),
            Self::Ref(r) => r.resolve(),
            _ => None,
        }
    }

    /// Returns true for a union with a `null` branch.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        matches!(self, Self::Union(u) if u.is_nullable())
    }
}

impl From<PrimitiveType> for Schema {
    fn from(value: PrimitiveType) -> Self {
        Self::Primitive(value)
    }
}

impl From<RecordSchema> for Schema {
    fn from(value: RecordSchema) -> Self {
        Self::record(value)
    }
}

impl From<EnumSchema> for Schema {
    fn from(value: EnumSchema) -> Self {
        Self::enumeration(value)
    }
}

impl From<FixedSchema> for Schema {
    fn from(value: FixedSchema) -> Self {
        Self::fixed(value)
    }
}

impl From<NamedSchema> for Schema {
    fn from(value: NamedSchema) -> Self {
        match value {
            NamedSchema::Record(r) => Self::Record(r),
            NamedSchema::Enum(e) => Self::Enum(e),
            NamedSchema::Fixed(f) => Self::Fixed(f),
        }
    }
}

/// Name of a named type, split into local name and namespace.
///
/// Equality and hashing consider only the local name and namespace. A name
/// read from a document also remembers how it was written there.
#[derive(Debug, Clone)]
pub struct Name {
    /// Local name.
    pub name: String,
    /// Namespace, if any.
    pub namespace: Option<String>,
    spelling: Option<Spelling>,
}

/// `name` and `namespace` attributes exactly as a document wrote them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Spelling {
    pub(crate) name: String,
    pub(crate) namespace: Option<String>,
}

impl Name {
    /// Creates a name. A dotted name is split at its last dot.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match name.rsplit_once('.') {
            Some((namespace, local)) => Self {
                name: local.to_string(),
                namespace: (!namespace.is_empty()).then(|| namespace.to_string()),
                spelling: None,
            },
            None => Self {
                name,
                namespace: None,
                spelling: None,
            },
        }
    }

    /// Sets the namespace unless the name was already qualified.
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        if self.namespace.is_none() {
            let namespace = namespace.into();
            self.namespace = (!namespace.is_empty()).then_some(namespace);
        }
        self
    }

    /// Records the attributes this name was parsed from.
    pub(crate) fn with_spelling(mut self, name: &str, namespace: Option<&str>) -> Self {
        self.spelling = Some(Spelling {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
        });
        self
    }

    pub(crate) fn spelling(&self) -> Option<&Spelling> {
        self.spelling.as_ref()
    }

    /// Returns `namespace.name`, or the bare name without a namespace.
    #[must_use]
    pub fn fullname(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.namespace == other.namespace
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.namespace.hash(state);
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{ns}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Decimal parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalParams {
    /// Maximum number of significant digits.
    pub precision: u32,
    /// Digits after the decimal point, as written in the document.
    pub scale: Option<u32>,
}

impl DecimalParams {
    /// Creates decimal parameters.
    #[must_use]
    pub const fn new(precision: u32, scale: Option<u32>) -> Self {
        Self { precision, scale }
    }

    /// Returns the scale, defaulting to zero.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        match self.scale {
            Some(scale) => scale,
            None => 0,
        }
    }
}

/// Logical refinement with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Logical {
    /// Decimal number.
    Decimal(DecimalParams),
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Timestamp.
    Timestamp,
    /// Duration; carried by a 12-byte fixed.
    Duration,
}

impl Logical {
    /// Returns the logical type tag.
    #[must_use]
    pub const fn logical_type(&self) -> LogicalType {
        match self {
            Self::Decimal(_) => LogicalType::Decimal,
            Self::Date => LogicalType::Date,
            Self::Time => LogicalType::Time,
            Self::Timestamp => LogicalType::Timestamp,
            Self::Duration => LogicalType::Duration,
        }
    }
}

/// Primitive carrier refined by a logical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedPrimitive {
    /// Underlying encoding.
    pub carrier: PrimitiveType,
    /// Refinement.
    pub logical: Logical,
}

impl DerivedPrimitive {
    /// Creates a derived primitive.
    #[must_use]
    pub const fn new(carrier: PrimitiveType, logical: Logical) -> Self {
        Self { carrier, logical }
    }
}

/// Union of schemas. Branch order is significant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnionSchema {
    variants: Vec<Schema>,
}

impl UnionSchema {
    /// Creates a union from its branches.
    #[must_use]
    pub fn new(variants: Vec<Schema>) -> Self {
        Self { variants }
    }

    /// Creates `["null", schema]`.
    #[must_use]
    pub fn nullable(schema: Schema) -> Self {
        Self::new(vec![Schema::Primitive(PrimitiveType::Null), schema])
    }

    /// Returns the branches.
    #[must_use]
    pub fn variants(&self) -> &[Schema] {
        &self.variants
    }

    /// Returns true if one branch is `null`.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.variants
            .iter()
            .any(|v| matches!(v, Schema::Primitive(PrimitiveType::Null)))
    }
}

/// Sort order of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldOrder {
    /// Ascending order (default).
    #[default]
    Ascending,
    /// Descending order.
    Descending,
    /// Field ignored when sorting.
    Ignore,
}

impl FieldOrder {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
            Self::Ignore => "ignore",
        }
    }

    /// Parses an order directive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ascending" => Some(Self::Ascending),
            "descending" => Some(Self::Descending),
            "ignore" => Some(Self::Ignore),
            _ => None,
        }
    }
}

/// Record field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// Field type.
    pub schema: Schema,
    /// Default value, kept verbatim.
    pub default: Option<Value>,
    /// Sort order, as written in the document.
    pub order: Option<FieldOrder>,
    /// Alternative names.
    pub aliases: Option<Vec<String>>,
    /// Documentation.
    pub doc: Option<String>,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            schema,
            default: None,
            order: None,
            aliases: None,
            doc: None,
        }
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub fn with_order(mut self, order: FieldOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Returns the sort order, ascending when absent.
    #[must_use]
    pub fn effective_order(&self) -> FieldOrder {
        self.order.unwrap_or_default()
    }
}

/// Record definition.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    /// Record name.
    pub name: Name,
    /// Alternative names.
    pub aliases: Option<Vec<String>>,
    /// Documentation.
    pub doc: Option<String>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl RecordSchema {
    /// Creates a record.
    #[must_use]
    pub fn new(name: Name, fields: Vec<Field>) -> Self {
        Self {
            name,
            aliases: None,
            doc: None,
            fields,
        }
    }

    /// Sets the aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Enum definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSchema {
    /// Enum name.
    pub name: Name,
    /// Alternative names.
    pub aliases: Option<Vec<String>>,
    /// Documentation.
    pub doc: Option<String>,
    /// Symbols in declaration order.
    pub symbols: Vec<String>,
}

impl EnumSchema {
    /// Creates an enum.
    #[must_use]
    pub fn new(name: Name, symbols: Vec<String>) -> Self {
        Self {
            name,
            aliases: None,
            doc: None,
            symbols,
        }
    }

    /// Sets the aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Sets the documentation.
    #[must_use]
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Returns the ordinal of a symbol.
    #[must_use]
    pub fn position(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }
}

/// Fixed definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSchema {
    /// Fixed name.
    pub name: Name,
    /// Alternative names.
    pub aliases: Option<Vec<String>>,
    /// Documentation.
    pub doc: Option<String>,
    /// Length in bytes.
    pub size: usize,
    /// Logical refinement (decimal or duration).
    pub logical: Option<Logical>,
}

impl FixedSchema {
    /// Creates a fixed type.
    #[must_use]
    pub fn new(name: Name, size: usize) -> Self {
        Self {
            name,
            aliases: None,
            doc: None,
            size,
            logical: None,
        }
    }

    /// Sets the logical refinement.
    #[must_use]
    pub fn with_logical(mut self, logical: Logical) -> Self {
        self.logical = Some(logical);
        self
    }

    /// Sets the aliases.
    #[must_use]
    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }
}

/// Shared handle to a named type definition.
#[derive(Debug, Clone, PartialEq)]
pub enum NamedSchema {
    /// Record.
    Record(Arc<RecordSchema>),
    /// Enum.
    Enum(Arc<EnumSchema>),
    /// Fixed.
    Fixed(Arc<FixedSchema>),
}

impl NamedSchema {
    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &Name {
        match self {
            Self::Record(r) => &r.name,
            Self::Enum(e) => &e.name,
            Self::Fixed(f) => &f.name,
        }
    }

    /// Returns the kind of named type.
    #[must_use]
    pub const fn kind(&self) -> ComplexType {
        match self {
            Self::Record(_) => ComplexType::Record,
            Self::Enum(_) => ComplexType::Enum,
            Self::Fixed(_) => ComplexType::Fixed,
        }
    }

    /// Returns true if both handles point at the same definition.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Record(a), Self::Record(b)) => Arc::ptr_eq(a, b),
            (Self::Enum(a), Self::Enum(b)) => Arc::ptr_eq(a, b),
            (Self::Fixed(a), Self::Fixed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Reference by name to a named type.
///
/// A reference to a record that encloses it holds a weak handle, so
/// recursive schemas do not form reference cycles. All other references
/// share ownership of their target.
#[derive(Clone)]
pub struct NamedRef {
    name: Name,
    target: RefTarget,
    spelling: Option<String>,
}

#[derive(Clone)]
enum RefTarget {
    Shared(NamedSchema),
    Recursive(Weak<RecordSchema>),
}

impl NamedRef {
    /// Creates a reference to a complete named type.
    #[must_use]
    pub fn to(named: &NamedSchema) -> Self {
        Self {
            name: named.name().clone(),
            target: RefTarget::Shared(named.clone()),
            spelling: None,
        }
    }

    /// Creates a reference to a record that is still being built.
    pub(crate) fn recursive(name: Name, record: Weak<RecordSchema>) -> Self {
        Self {
            name,
            target: RefTarget::Recursive(record),
            spelling: None,
        }
    }

    /// Records the name as the document wrote it.
    pub(crate) fn with_spelling(mut self, written: &str) -> Self {
        self.spelling = Some(written.to_string());
        self
    }

    pub(crate) fn spelling(&self) -> Option<&str> {
        self.spelling.as_deref()
    }

    /// Returns the referenced name.
    #[must_use]
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the kind of the referenced type.
    #[must_use]
    pub fn kind(&self) -> ComplexType {
        match &self.target {
            RefTarget::Shared(named) => named.kind(),
            RefTarget::Recursive(_) => ComplexType::Record,
        }
    }

    /// Returns true if this reference points at an enclosing record.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        matches!(self.target, RefTarget::Recursive(_))
    }

    /// Returns the referenced definition.
    ///
    /// A recursive reference resolves for as long as the enclosing record
    /// is alive.
    #[must_use]
    pub fn resolve(&self) -> Option<NamedSchema> {
        match &self.target {
            RefTarget::Shared(named) => Some(named.clone()),
            RefTarget::Recursive(record) => record.upgrade().map(NamedSchema::Record),
        }
    }
}

impl PartialEq for NamedRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.kind() == other.kind()
    }
}

impl fmt::Debug for NamedRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedRef")
            .field("name", &self.name.fullname())
            .field("kind", &self.kind())
            .field("recursive", &self.is_recursive())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_split() {
        let name = Name::new("org.example.Point");
        assert_eq!(name.name, "Point");
        assert_eq!(name.namespace.as_deref(), Some("org.example"));
        assert_eq!(name.fullname(), "org.example.Point");

        let name = Name::new("Point").with_namespace("geo");
        assert_eq!(name.fullname(), "geo.Point");

        let name = Name::new("a.Point").with_namespace("geo");
        assert_eq!(name.fullname(), "a.Point");

        let name = Name::new("Point").with_namespace("");
        assert_eq!(name.namespace, None);
        assert_eq!(name.to_string(), "Point");
    }

    #[test]
    fn test_name_equality_ignores_spelling() {
        let dotted = Name::new("geo.Point").with_spelling("geo.Point", None);
        let split = Name::new("Point")
            .with_namespace("geo")
            .with_spelling("Point", Some("geo"));
        assert_eq!(dotted, split);
        assert_ne!(dotted.spelling(), split.spelling());
        assert!(Name::new("geo.Point").spelling().is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(
            Schema::from(PrimitiveType::Int).type_name(),
            TypeName::Primitive(PrimitiveType::Int)
        );
        assert_eq!(
            Schema::decimal(10, 2).type_name(),
            TypeName::Logical(LogicalType::Decimal)
        );
        assert_eq!(
            Schema::nullable(PrimitiveType::String.into()).type_name(),
            TypeName::Complex(ComplexType::Union)
        );
        let fixed = FixedSchema::new(Name::new("span"), 12).with_logical(Logical::Duration);
        assert_eq!(
            Schema::fixed(fixed).type_name(),
            TypeName::Logical(LogicalType::Duration)
        );
        let fixed = FixedSchema::new(Name::new("md5"), 16);
        assert_eq!(
            Schema::fixed(fixed).type_name(),
            TypeName::Complex(ComplexType::Fixed)
        );
    }

    #[test]
    fn test_nullable_union() {
        let schema = Schema::nullable(Schema::array(PrimitiveType::Long.into()));
        assert!(schema.is_nullable());
        let Schema::Union(union) = &schema else {
            panic!("expected union");
        };
        assert_eq!(union.variants().len(), 2);
        assert!(!Schema::union(vec![PrimitiveType::Int.into()]).is_nullable());
    }

    #[test]
    fn test_decimal_scale_default() {
        assert_eq!(DecimalParams::new(5, None).scale(), 0);
        assert_eq!(DecimalParams::new(5, Some(2)).scale(), 2);
    }

    #[test]
    fn test_field_order() {
        let field = Field::new("id", PrimitiveType::Long.into());
        assert_eq!(field.effective_order(), FieldOrder::Ascending);
        let field = field.with_order(FieldOrder::Ignore);
        assert_eq!(field.effective_order(), FieldOrder::Ignore);
        assert_eq!(FieldOrder::parse("descending"), Some(FieldOrder::Descending));
        assert_eq!(FieldOrder::parse("DESCENDING"), None);
    }

    #[test]
    fn test_shared_reference() {
        let suit = Schema::enumeration(EnumSchema::new(
            Name::new("Suit"),
            vec!["SPADES".to_string(), "HEARTS".to_string()],
        ));
        let named = suit.as_named().unwrap();
        let reference = Schema::Ref(NamedRef::to(&named));

        assert_eq!(reference.type_name(), TypeName::Complex(ComplexType::Enum));
        assert!(reference.as_named().unwrap().ptr_eq(&named));
    }

    #[test]
    fn test_recursive_reference_outlives_nothing() {
        let record = Arc::new(RecordSchema::new(Name::new("Node"), Vec::new()));
        let reference = NamedRef::recursive(Name::new("Node"), Arc::downgrade(&record));
        assert!(reference.is_recursive());
        assert!(reference.resolve().is_some());

        drop(record);
        assert!(reference.resolve().is_none());
        assert_eq!(reference.kind(), ComplexType::Record);
    }

    #[test]
    fn test_enum_position() {
        let suit = EnumSchema::new(
            Name::new("Suit"),
            vec!["SPADES".to_string(), "HEARTS".to_string()],
        );
        assert_eq!(suit.position("HEARTS"), Some(1));
        assert_eq!(suit.position("CLUBS"), None);
    }

    #[test]
    fn test_schema_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Schema>();
        assert_send_sync::<NamedRef>();
    }
}
