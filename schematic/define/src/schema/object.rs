//! Object schemas.

use super::Schema;

/// Policy for keys a value carries but the schema does not declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFields {
    /// Undeclared keys are rejected. Used for caller-built request payloads.
    #[default]
    Strict,
    /// Undeclared keys are accepted and preserved. Used for API entities,
    /// which gain fields over time.
    Passthrough,
}

/// A declared field of an [`ObjectSchema`].
#[derive(Debug, Clone)]
pub struct Field {
    /// JSON key.
    pub name: &'static str,
    /// Schema of the value.
    pub schema: Schema,
    /// Whether the key must be present.
    ///
    /// Presence and nullability are independent: an optional field may be
    /// absent, and whether it may be `null` is decided by its schema.
    pub required: bool,
}

/// Schema for a JSON object with declared fields.
///
/// Objects default to [`UnknownFields::Strict`]; entity schemas opt into
/// [`UnknownFields::Passthrough`].
///
/// ## Examples
///
/// ```
/// use schematic_define::{ObjectSchema, Schema, UnknownFields};
///
/// let rule = ObjectSchema::named("FirewallRule")
///     .required("direction", Schema::enumeration(&["in", "out"]))
///     .optional("port", Schema::pattern(r"^\d+(-\d+)?$"));
///
/// assert_eq!(rule.unknown_fields, UnknownFields::Strict);
/// assert!(rule.field("port").is_some_and(|f| !f.required));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    /// Generated type name, if declared.
    pub name: Option<&'static str>,
    /// Short description carried into generated docs.
    pub description: Option<&'static str>,
    /// Fields in declaration order.
    pub fields: Vec<Field>,
    /// Handling of undeclared keys.
    pub unknown_fields: UnknownFields,
}

impl ObjectSchema {
    /// An anonymous, strict object with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// A named, strict object with no fields.
    pub fn named(name: &'static str) -> Self {
        Self {
            name: Some(name),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    /// Adds a field that must be present.
    pub fn required(mut self, name: &'static str, schema: Schema) -> Self {
        self.fields.push(Field {
            name,
            schema,
            required: true,
        });
        self
    }

    /// Adds a field that may be absent.
    pub fn optional(mut self, name: &'static str, schema: Schema) -> Self {
        self.fields.push(Field {
            name,
            schema,
            required: false,
        });
        self
    }

    /// Accepts and preserves undeclared keys.
    pub fn passthrough(mut self) -> Self {
        self.unknown_fields = UnknownFields::Passthrough;
        self
    }

    /// Rejects undeclared keys.
    pub fn strict(mut self) -> Self {
        self.unknown_fields = UnknownFields::Strict;
        self
    }

    /// Looks up a declared field by key.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns `true` if undeclared keys are preserved.
    pub fn is_passthrough(&self) -> bool {
        self.unknown_fields == UnknownFields::Passthrough
    }

    /// Iterates over the keys that must be present.
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_declaration_order() {
        let object = ObjectSchema::named("Firewall")
            .required("id", Schema::integer())
            .required("name", Schema::string())
            .optional("labels", Schema::map(Schema::string()));

        let names: Vec<_> = object.fields.iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["id", "name", "labels"]);
        assert_eq!(object.required_fields().count(), 2);
    }

    #[test]
    fn policy_toggles() {
        let object = ObjectSchema::new().passthrough();
        assert!(object.is_passthrough());
        assert!(!object.strict().is_passthrough());
    }

    #[test]
    fn anonymous_objects_have_no_name() {
        assert!(ObjectSchema::new().name.is_none());
        assert_eq!(ObjectSchema::named("Meta").name, Some("Meta"));
    }
}
