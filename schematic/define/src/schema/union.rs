//! Discriminated unions.

use super::ObjectSchema;

/// One branch of a [`UnionSchema`].
#[derive(Debug, Clone)]
pub struct Variant {
    /// Discriminator value selecting this branch.
    pub tag: &'static str,
    /// Shape of the remaining (non-discriminator) fields.
    pub schema: ObjectSchema,
}

/// Schema for an object whose shape depends on a tag field.
///
/// The discriminator is checked first; the rest of the value is then
/// validated against the selected variant only.
///
/// ## Examples
///
/// ```
/// use schematic_define::{ObjectSchema, Schema, UnionSchema};
///
/// let applied_to = UnionSchema::named("FirewallResource", "type")
///     .variant(
///         "server",
///         ObjectSchema::new().required(
///             "server",
///             ObjectSchema::new().required("id", Schema::integer()).into(),
///         ),
///     )
///     .variant(
///         "label_selector",
///         ObjectSchema::new().required(
///             "label_selector",
///             ObjectSchema::new().required("selector", Schema::string()).into(),
///         ),
///     );
///
/// assert_eq!(applied_to.tags(), vec!["server", "label_selector"]);
/// assert!(applied_to.find("group").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct UnionSchema {
    /// Generated type name, if declared.
    pub name: Option<&'static str>,
    /// Key holding the tag.
    pub discriminator: &'static str,
    /// Branches in declaration order.
    pub variants: Vec<Variant>,
}

impl UnionSchema {
    /// An anonymous union keyed on `discriminator`.
    pub fn new(discriminator: &'static str) -> Self {
        Self {
            name: None,
            discriminator,
            variants: Vec::new(),
        }
    }

    /// A named union keyed on `discriminator`.
    pub fn named(name: &'static str, discriminator: &'static str) -> Self {
        Self {
            name: Some(name),
            ..Self::new(discriminator)
        }
    }

    /// Adds a branch.
    pub fn variant(mut self, tag: &'static str, schema: ObjectSchema) -> Self {
        self.variants.push(Variant { tag, schema });
        self
    }

    /// Finds the branch selected by `tag`.
    pub fn find(&self, tag: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.tag == tag)
    }

    /// Returns every known tag.
    pub fn tags(&self) -> Vec<&'static str> {
        self.variants.iter().map(|v| v.tag).collect()
    }
}
