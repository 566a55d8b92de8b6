//! Static per-type metadata: fields, wire keys, semantic types and
//! discriminator tables.
//!
//! Descriptors are declared as `static` items, completing one of the
//! `const fn` templates with struct update syntax, and are never mutated.
//! Composite types that wrap another model (`list[Model]`) are declared as
//! their own `static` so they can be referenced by address. Model names
//! must be unique: descriptors are compared by name.
//!
//! ```rust
//! use oci_models::model::descriptor::{FieldDescriptor, ModelDescriptor, STRING};
//!
//! static TAGGED: ModelDescriptor = ModelDescriptor {
//!     name: "Tagged",
//!     fields: &[
//!         FieldDescriptor::new("display_name", "displayName", STRING),
//!         FieldDescriptor::new("id", "id", STRING).required(),
//!     ],
//!     ..ModelDescriptor::plain()
//! };
//!
//! assert_eq!(TAGGED.field_count(), 2);
//! assert!(TAGGED.field("display_name").is_some());
//! ```

use std::fmt;

use crate::model::Value;

/// Scalar wire types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Integer,
    Float,
    Boolean,
    /// RFC 3339 text on the wire, [`crate::util::DateTime`] in memory.
    DateTime,
    /// Any JSON value, kept verbatim.
    Object,
}

/// How an enum field treats values outside its declared set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumPolicy {
    /// Reject the value.
    Strict,
    /// Replace it with `UNKNOWN_ENUM_VALUE` and report a diagnostic.
    Lenient,
}

/// A closed set of string values.
#[derive(Debug)]
pub struct EnumType {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl EnumType {
    pub const fn new(name: &'static str, values: &'static [&'static str]) -> Self {
        Self { name, values }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}

/// The declared type of a field.
#[derive(Debug, Clone, Copy)]
pub enum SemanticType {
    Primitive(Primitive),
    Enum(&'static EnumType, EnumPolicy),
    Model(&'static ModelDescriptor),
    List(&'static SemanticType),
    /// String-keyed map.
    Map(&'static SemanticType),
}

pub const STRING: SemanticType = SemanticType::Primitive(Primitive::String);
pub const INTEGER: SemanticType = SemanticType::Primitive(Primitive::Integer);
pub const FLOAT: SemanticType = SemanticType::Primitive(Primitive::Float);
pub const BOOLEAN: SemanticType = SemanticType::Primitive(Primitive::Boolean);
pub const DATETIME: SemanticType = SemanticType::Primitive(Primitive::DateTime);
pub const OBJECT: SemanticType = SemanticType::Primitive(Primitive::Object);
pub const STRING_LIST: SemanticType = SemanticType::List(&STRING);
pub const STRING_MAP: SemanticType = SemanticType::Map(&STRING);

impl SemanticType {
    /// Strict enum over `enum_type`.
    pub const fn strict(enum_type: &'static EnumType) -> Self {
        SemanticType::Enum(enum_type, EnumPolicy::Strict)
    }

    /// Lenient enum over `enum_type`.
    pub const fn lenient(enum_type: &'static EnumType) -> Self {
        SemanticType::Enum(enum_type, EnumPolicy::Lenient)
    }
}

impl fmt::Display for SemanticType {
    /// Renders the SDK type notation, e.g. `list[DhcpOption]`, `dict(str, str)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Primitive(Primitive::String) => f.write_str("str"),
            SemanticType::Primitive(Primitive::Integer) => f.write_str("int"),
            SemanticType::Primitive(Primitive::Float) => f.write_str("float"),
            SemanticType::Primitive(Primitive::Boolean) => f.write_str("bool"),
            SemanticType::Primitive(Primitive::DateTime) => f.write_str("datetime"),
            SemanticType::Primitive(Primitive::Object) => f.write_str("object"),
            SemanticType::Enum(enum_type, _) => write!(f, "str ({})", enum_type.name),
            SemanticType::Model(model) => f.write_str(model.name),
            SemanticType::List(inner) => write!(f, "list[{}]", inner),
            SemanticType::Map(inner) => write!(f, "dict(str, {})", inner),
        }
    }
}

/// Value applied when a field is missing from the input entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(&'static str),
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Integer(i) => Value::Integer(i),
            DefaultValue::Float(v) => Value::Float(v),
            DefaultValue::String(s) => Value::String(s.to_string()),
        }
    }
}

/// One declared field.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Logical snake_case name; also accepted as an input key.
    pub name: &'static str,
    /// camelCase key used on the wire.
    pub wire_key: &'static str,
    pub ty: SemanticType,
    pub required: bool,
    pub default: Option<DefaultValue>,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, wire_key: &'static str, ty: SemanticType) -> Self {
        Self {
            name,
            wire_key,
            ty,
            required: false,
            default: None,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    pub const fn with_default(self, default: DefaultValue) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    /// Returns true if the logical name differs from the wire key, i.e. the
    /// field can arrive under two spellings.
    pub fn has_local_key(&self) -> bool {
        self.name != self.wire_key
    }
}

/// Discriminator table of a polymorphic base type.
#[derive(Debug)]
pub struct Discriminator {
    /// Logical name of the discriminator field on the base.
    pub field: &'static str,
    /// Wire key carrying the discriminator literal.
    pub wire_key: &'static str,
    /// Literal to concrete subtype.
    pub subtypes: &'static [(&'static str, &'static ModelDescriptor)],
}

impl Discriminator {
    /// Looks up the subtype registered for `literal`.
    pub fn subtype(&self, literal: &str) -> Option<&'static ModelDescriptor> {
        self.subtypes
            .iter()
            .find(|(lit, _)| *lit == literal)
            .map(|(_, model)| *model)
    }
}

/// Static metadata for one model type.
pub struct ModelDescriptor {
    pub name: &'static str,
    pub parent: Option<&'static ModelDescriptor>,
    /// Own fields, in declaration order. Inherited fields come from `parent`.
    pub fields: &'static [FieldDescriptor],
    /// Set on polymorphic bases.
    pub discriminator: Option<&'static Discriminator>,
    /// Set on subtypes: the literal this type is registered under in its
    /// parent's discriminator table.
    pub discriminator_value: Option<&'static str>,
}

impl ModelDescriptor {
    /// Template for a model with no polymorphism; complete it with struct
    /// update syntax.
    pub const fn plain() -> Self {
        Self {
            name: "",
            parent: None,
            fields: &[],
            discriminator: None,
            discriminator_value: None,
        }
    }

    /// Template for a polymorphic base.
    pub const fn base(discriminator: &'static Discriminator) -> Self {
        Self {
            discriminator: Some(discriminator),
            ..Self::plain()
        }
    }

    /// Template for the subtype of `parent` registered under `literal`.
    pub const fn subtype(parent: &'static ModelDescriptor, literal: &'static str) -> Self {
        Self {
            parent: Some(parent),
            discriminator_value: Some(literal),
            ..Self::plain()
        }
    }

    /// Returns the ancestors of this model, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'static ModelDescriptor> {
        std::iter::successors(self.parent, |model| model.parent)
    }

    /// Returns all fields, ancestor fields (root first) before own fields.
    pub fn all_fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        let mut chain: Vec<&'static [FieldDescriptor]> = self.ancestors().map(|m| m.fields).collect();
        chain.reverse();
        chain.push(self.fields);
        chain.into_iter().flatten()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len() + self.ancestors().map(|m| m.fields.len()).sum::<usize>()
    }

    /// Finds a field by logical name, returning its position in
    /// [`all_fields`](Self::all_fields).
    pub fn field(&self, name: &str) -> Option<(usize, &'static FieldDescriptor)> {
        self.all_fields().enumerate().find(|(_, f)| f.name == name)
    }

    /// Returns true if this model is `other` or descends from it.
    pub fn is_subtype_of(&self, other: &ModelDescriptor) -> bool {
        self.name == other.name || self.ancestors().any(|m| m.name == other.name)
    }

    /// Returns `(field, literal)` pairs that identify this model within every
    /// polymorphic family it belongs to.
    pub fn discriminator_presets(&self) -> Vec<(&'static str, &'static str)> {
        let mut presets = Vec::new();
        let mut current = Some(self);
        while let Some(model) = current {
            if let (Some(literal), Some(parent)) = (model.discriminator_value, model.parent) {
                if let Some(disc) = parent.discriminator {
                    presets.push((disc.field, literal));
                }
            }
            current = model.parent;
        }
        presets
    }
}

impl fmt::Debug for ModelDescriptor {
    // Parent and subtype links form cycles, so only names are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelDescriptor")
            .field("name", &self.name)
            .field("parent", &self.parent.map(|p| p.name))
            .field("fields", &self.all_fields().map(|f| f.name).collect::<Vec<_>>())
            .finish()
    }
}

impl PartialEq for ModelDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ModelDescriptor {}
