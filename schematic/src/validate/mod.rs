//! Structural validation of JSON values against schemas.
//!
//! One recursive walk interprets every [`Schema`] variant:
//!
//! - required keys must be present, optional keys may be absent
//! - `null` is accepted only where the schema is nullable (or `Any`)
//! - arrays and maps are checked element by element
//! - unions select their branch by the discriminator before checking the rest
//! - string patterns and enumerations are enforced
//! - undeclared keys are rejected on strict objects and kept on passthrough ones
//!
//! Validation is pure: no I/O, no coercion, and the same schema and input
//! always yield the same outcome. Fields are visited in declaration order,
//! then undeclared keys in map order, so detailed diagnostics are stable.

mod path;

pub use path::{FieldPath, Segment};

use schematic_define::{ObjectSchema, Schema, UnionSchema, UnknownFields};
use serde_json::{Map, Value};

use crate::SchemaType;
use crate::error::{Issue, IssueKind, Stage, ValidationError};

/// Settings for a single validation call.
///
/// ## Examples
///
/// ```
/// use schematic::{Stage, ValidateOptions};
///
/// let options = ValidateOptions::new("firewalls.create")
///     .with_details(true)
///     .at(Stage::RequestBody);
/// assert!(options.detailed);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Label naming the operation, carried by every error.
    pub context: String,
    /// Collect every fault with its path instead of stopping at the first.
    pub detailed: bool,
    /// Which payload is being checked.
    pub stage: Stage,
}

impl ValidateOptions {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            detailed: false,
            stage: Stage::Value,
        }
    }

    pub fn with_details(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    pub fn at(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }
}

/// Validates `value` against `schema`.
///
/// Returns the value unchanged on success, including any undeclared keys a
/// passthrough object admitted.
///
/// ## Errors
///
/// Returns a [`ValidationError`] naming `options.context`. With
/// `options.detailed` set it lists every fault; otherwise validation stops at
/// the first fault and the error carries the context only.
///
/// ## Examples
///
/// ```
/// use serde_json::json;
/// use schematic::{ValidateOptions, validate};
/// use schematic_define::{ObjectSchema, Schema};
///
/// let rule: Schema = ObjectSchema::new()
///     .required("direction", Schema::enumeration(&["in", "out"]))
///     .optional("port", Schema::pattern(r"^\d+(-\d+)?$"))
///     .into();
///
/// let options = ValidateOptions::new("rule").with_details(true);
/// assert!(validate(&rule, &json!({"direction": "in", "port": "80-90"}), &options).is_ok());
///
/// let err = validate(&rule, &json!({"direction": "in", "port": "80-"}), &options).unwrap_err();
/// assert_eq!(err.paths(), vec!["port"]);
/// ```
pub fn validate(
    schema: &Schema,
    value: &Value,
    options: &ValidateOptions,
) -> Result<Value, ValidationError> {
    conform(schema, value, options)?;
    Ok(value.clone())
}

/// Validates `value` against `T`'s schema and decodes it into `T`.
///
/// ## Errors
///
/// Returns a [`ValidationError`] if the value does not match the schema, or
/// if it matches but serde cannot decode it (reported as
/// [`IssueKind::Deserialize`] at the root).
pub fn validate_as<T: SchemaType>(
    value: Value,
    options: &ValidateOptions,
) -> Result<T, ValidationError> {
    conform(T::schema(), &value, options)?;
    serde_json::from_value(value).map_err(|e| {
        failure(
            options,
            vec![Issue {
                path: FieldPath::root(),
                kind: IssueKind::Deserialize(e.to_string()),
            }],
        )
    })
}

fn conform(schema: &Schema, value: &Value, options: &ValidateOptions) -> Result<(), ValidationError> {
    let mut walker = Walker {
        detailed: options.detailed,
        issues: Vec::new(),
    };
    // a halted walk has already recorded its fault
    let _ = walker.check(schema, value, &FieldPath::root());

    if walker.issues.is_empty() {
        Ok(())
    } else {
        Err(failure(options, walker.issues))
    }
}

fn failure(options: &ValidateOptions, issues: Vec<Issue>) -> ValidationError {
    let issues = if options.detailed { issues } else { Vec::new() };
    ValidationError::new(options.context.clone(), options.stage, issues)
}

/// Signals the walk to unwind after the first fault.
struct Halt;

type Step = Result<(), Halt>;

struct Walker {
    detailed: bool,
    issues: Vec<Issue>,
}

impl Walker {
    fn report(&mut self, path: &FieldPath, kind: IssueKind) -> Step {
        self.issues.push(Issue {
            path: path.clone(),
            kind,
        });
        if self.detailed { Ok(()) } else { Err(Halt) }
    }

    fn mismatch(&mut self, schema: &Schema, value: &Value, path: &FieldPath) -> Step {
        self.report(
            path,
            IssueKind::TypeMismatch {
                expected: schema.expected(),
                found: describe(value),
            },
        )
    }

    fn check(&mut self, schema: &Schema, value: &Value, path: &FieldPath) -> Step {
        match schema {
            Schema::Ref(target) => self.check(target, value, path),
            Schema::Any => Ok(()),
            Schema::Nullable(_) if value.is_null() => Ok(()),
            Schema::Nullable(inner) => self.check(inner, value, path),
            Schema::String(string) => match value.as_str() {
                Some(text) => match &string.pattern {
                    Some(pattern) if !pattern.is_match(text) => self.report(
                        path,
                        IssueKind::PatternMismatch {
                            pattern: pattern.as_str().to_string(),
                            found: text.to_string(),
                        },
                    ),
                    _ => Ok(()),
                },
                None => self.mismatch(schema, value, path),
            },
            Schema::Integer if value.is_i64() => Ok(()),
            Schema::Number if value.is_number() => Ok(()),
            Schema::Boolean if value.is_boolean() => Ok(()),
            Schema::Integer | Schema::Number | Schema::Boolean => {
                self.mismatch(schema, value, path)
            }
            Schema::Enum(enumeration) => match value.as_str() {
                Some(text) if enumeration.contains(text) => Ok(()),
                Some(text) => self.report(
                    path,
                    IssueKind::InvalidEnum {
                        allowed: enumeration.values.clone(),
                        found: text.to_string(),
                    },
                ),
                None => self.mismatch(schema, value, path),
            },
            Schema::Array(items) => match value.as_array() {
                Some(elements) => {
                    for (index, element) in elements.iter().enumerate() {
                        self.check(items, element, &path.index(index))?;
                    }
                    Ok(())
                }
                None => self.mismatch(schema, value, path),
            },
            Schema::Map(values) => match value.as_object() {
                Some(entries) => {
                    for (key, entry) in entries {
                        self.check(values, entry, &path.key(key.as_str()))?;
                    }
                    Ok(())
                }
                None => self.mismatch(schema, value, path),
            },
            Schema::Object(object) => match value.as_object() {
                Some(entries) => self.check_object(object, entries, path, None),
                None => self.mismatch(schema, value, path),
            },
            Schema::Union(union) => match value.as_object() {
                Some(entries) => self.check_union(union, entries, path),
                None => self.mismatch(schema, value, path),
            },
        }
    }

    /// `tag` names a discriminator key already consumed by an enclosing union.
    fn check_object(
        &mut self,
        object: &ObjectSchema,
        entries: &Map<String, Value>,
        path: &FieldPath,
        tag: Option<&str>,
    ) -> Step {
        for field in &object.fields {
            match entries.get(field.name) {
                Some(value) => self.check(&field.schema, value, &path.key(field.name))?,
                None if field.required => self.report(&path.key(field.name), IssueKind::Missing)?,
                None => {}
            }
        }

        if object.unknown_fields == UnknownFields::Strict {
            for key in entries.keys() {
                if Some(key.as_str()) != tag && object.field(key).is_none() {
                    self.report(&path.key(key.as_str()), IssueKind::UnknownField)?;
                }
            }
        }
        Ok(())
    }

    fn check_union(
        &mut self,
        union: &UnionSchema,
        entries: &Map<String, Value>,
        path: &FieldPath,
    ) -> Step {
        let tag_path = path.key(union.discriminator);
        let tag = match entries.get(union.discriminator) {
            Some(Value::String(tag)) => tag,
            Some(other) => {
                return self.report(
                    &tag_path,
                    IssueKind::TypeMismatch {
                        expected: format!("one of {}", union.tags().join("|")),
                        found: describe(other),
                    },
                );
            }
            None => return self.report(&tag_path, IssueKind::MissingDiscriminator),
        };

        match union.find(tag) {
            Some(variant) => {
                self.check_object(&variant.schema, entries, path, Some(union.discriminator))
            }
            None => self.report(
                &tag_path,
                IssueKind::UnknownVariant {
                    allowed: union.tags(),
                    found: tag.clone(),
                },
            ),
        }
    }
}

/// Short description of a value for diagnostics.
fn describe(value: &Value) -> String {
    const MAX_CHARS: usize = 40;
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) if n.is_f64() => format!("number {n}"),
        Value::Number(n) if !n.is_i64() => {
            format!("integer {n} outside the 64-bit signed range")
        }
        Value::Number(n) => format!("integer {n}"),
        Value::String(s) if s.chars().count() > MAX_CHARS => {
            let head: String = s.chars().take(MAX_CHARS).collect();
            format!("string {head:?}...")
        }
        Value::String(s) => format!("string {s:?}"),
        Value::Array(items) => format!("array of {} items", items.len()),
        Value::Object(_) => "object".to_string(),
    }
}
