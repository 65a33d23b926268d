//! Schema definitions for request/response payloads.
//!
//! A [`Schema`] is a declarative description of an expected JSON shape. It is
//! a plain tagged-variant tree: one recursive validator interprets it at
//! runtime and the code generator projects it into Rust types at build time,
//! so both sides always agree on the shape.
//!
//! ## Building Blocks
//!
//! - Primitives: [`Schema::string`], [`Schema::pattern`], [`Schema::integer`],
//!   [`Schema::number`], [`Schema::boolean`], [`Schema::any`]
//! - Closed string sets: [`Schema::enumeration`], [`Schema::named_enum`]
//! - Wrappers: [`Schema::nullable`], [`Schema::array`], [`Schema::map`]
//! - Structured: [`ObjectSchema`] and [`UnionSchema`]
//! - Composition: [`Schema::reference`] to a registry static
//!
//! ## Examples
//!
//! ```
//! use std::sync::LazyLock;
//! use schematic_define::{ObjectSchema, Schema};
//!
//! static PROTECTION: LazyLock<Schema> = LazyLock::new(|| {
//!     ObjectSchema::named("Protection")
//!         .required("delete", Schema::boolean())
//!         .passthrough()
//!         .into()
//! });
//!
//! let server: Schema = ObjectSchema::named("Server")
//!     .required("id", Schema::integer())
//!     .required("protection", Schema::reference(&PROTECTION))
//!     .optional("placement_group", Schema::nullable(Schema::any()))
//!     .passthrough()
//!     .into();
//!
//! assert_eq!(server.name(), Some("Server"));
//! ```

mod object;
mod primitive;
mod union;

use std::sync::LazyLock;

pub use object::{Field, ObjectSchema, UnknownFields};
pub use primitive::{EnumSchema, Pattern, StringSchema};
pub use union::{UnionSchema, Variant};

/// A reference to a schema declared once as a process-wide static.
///
/// Envelopes embed entities through references rather than copies, so a
/// change to an entity schema is seen by every envelope that uses it.
pub type SchemaRef = &'static LazyLock<Schema>;

/// Declarative description of an expected data shape.
#[derive(Debug, Clone)]
pub enum Schema {
    /// A JSON string, optionally constrained by a pattern.
    String(StringSchema),
    /// A JSON number without a fractional part.
    Integer,
    /// Any JSON number.
    Number,
    /// A JSON boolean.
    Boolean,
    /// Any JSON value, including `null`.
    Any,
    /// A string drawn from a closed set of values.
    Enum(EnumSchema),
    /// The inner schema, or `null`.
    Nullable(Box<Schema>),
    /// A JSON array whose elements all match the inner schema.
    Array(Box<Schema>),
    /// A JSON object with arbitrary keys whose values match the inner schema.
    Map(Box<Schema>),
    /// A JSON object with declared fields.
    Object(ObjectSchema),
    /// A JSON object whose shape is selected by a discriminator field.
    Union(UnionSchema),
    /// A schema declared elsewhere.
    Ref(SchemaRef),
}

impl Schema {
    /// An unconstrained string.
    pub fn string() -> Self {
        Self::String(StringSchema::default())
    }

    /// A string that must match `pattern`.
    ///
    /// ## Panics
    ///
    /// Panics if `pattern` is not a valid regular expression. Schemas are
    /// static declarations, so an invalid pattern is a programming error; use
    /// [`Pattern::new`] to handle the error instead.
    pub fn pattern(pattern: &str) -> Self {
        let pattern = Pattern::new(pattern)
            .unwrap_or_else(|e| panic!("invalid schema pattern `{pattern}`: {e}"));
        Self::String(StringSchema::with_pattern(pattern))
    }

    /// A JSON integer.
    pub fn integer() -> Self {
        Self::Integer
    }

    /// Any JSON number.
    pub fn number() -> Self {
        Self::Number
    }

    /// A JSON boolean.
    pub fn boolean() -> Self {
        Self::Boolean
    }

    /// Any JSON value.
    pub fn any() -> Self {
        Self::Any
    }

    /// An anonymous closed set of string values.
    pub fn enumeration(values: &[&'static str]) -> Self {
        Self::Enum(EnumSchema::new(None, values))
    }

    /// A named closed set of string values.
    pub fn named_enum(name: &'static str, values: &[&'static str]) -> Self {
        Self::Enum(EnumSchema::new(Some(name), values))
    }

    /// Wraps `inner` so that `null` is also accepted.
    pub fn nullable(inner: Schema) -> Self {
        Self::Nullable(Box::new(inner))
    }

    /// An array of `items`.
    pub fn array(items: Schema) -> Self {
        Self::Array(Box::new(items))
    }

    /// A string-keyed record whose values match `values`.
    pub fn map(values: Schema) -> Self {
        Self::Map(Box::new(values))
    }

    /// A reference to a registry static.
    pub fn reference(target: SchemaRef) -> Self {
        Self::Ref(target)
    }

    /// Follows references until a concrete schema is reached.
    pub fn resolve(&self) -> &Schema {
        match self {
            Self::Ref(target) => target.resolve(),
            other => other,
        }
    }

    /// Returns the declared type name of a named object, enum or union.
    ///
    /// References report the name of their target.
    pub fn name(&self) -> Option<&'static str> {
        match self.resolve() {
            Self::Object(object) => object.name,
            Self::Enum(enumeration) => enumeration.name,
            Self::Union(union) => union.name,
            _ => None,
        }
    }

    /// Returns `true` if `null` satisfies this schema.
    pub fn accepts_null(&self) -> bool {
        matches!(self.resolve(), Self::Nullable(_) | Self::Any)
    }

    /// Human-readable description of what this schema expects, for diagnostics.
    pub fn expected(&self) -> String {
        match self {
            Self::String(string) => match &string.pattern {
                Some(pattern) => format!("string matching `{}`", pattern.as_str()),
                None => "string".to_string(),
            },
            Self::Integer => "integer".to_string(),
            Self::Number => "number".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Any => "any value".to_string(),
            Self::Enum(enumeration) => format!("one of {}", enumeration.values.join("|")),
            Self::Nullable(inner) => format!("{} or null", inner.expected()),
            Self::Array(_) => "array".to_string(),
            Self::Map(_) | Self::Object(_) | Self::Union(_) => "object".to_string(),
            Self::Ref(target) => target.expected(),
        }
    }
}

impl From<ObjectSchema> for Schema {
    fn from(object: ObjectSchema) -> Self {
        Self::Object(object)
    }
}

impl From<UnionSchema> for Schema {
    fn from(union: UnionSchema) -> Self {
        Self::Union(union)
    }
}

impl From<EnumSchema> for Schema {
    fn from(enumeration: EnumSchema) -> Self {
        Self::Enum(enumeration)
    }
}
