//! String and enumeration schemas.

use regex::Regex;

/// A compiled format constraint on a string value.
///
/// ## Examples
///
/// ```
/// use schematic_define::Pattern;
///
/// let port = Pattern::new(r"^\d+(-\d+)?$").unwrap();
/// assert!(port.is_match("80"));
/// assert!(port.is_match("80-90"));
/// assert!(!port.is_match("80-"));
/// ```
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    /// Compiles a pattern.
    ///
    /// ## Errors
    ///
    /// Returns the regex error if `source` is not a valid expression.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self)
    }

    /// Returns the source expression.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns `true` if `value` satisfies the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Schema for a string value.
#[derive(Debug, Clone, Default)]
pub struct StringSchema {
    /// Optional format constraint.
    pub pattern: Option<Pattern>,
}

impl StringSchema {
    /// A string constrained by `pattern`.
    pub fn with_pattern(pattern: Pattern) -> Self {
        Self {
            pattern: Some(pattern),
        }
    }
}

/// A closed set of allowed string values.
///
/// Named enumerations become standalone Rust enums in generated code;
/// anonymous ones are named after the field that holds them.
#[derive(Debug, Clone)]
pub struct EnumSchema {
    /// Generated type name, if declared.
    pub name: Option<&'static str>,
    /// Allowed values in declaration order.
    pub values: Vec<&'static str>,
}

impl EnumSchema {
    /// Creates an enumeration over `values`.
    pub fn new(name: Option<&'static str>, values: &[&'static str]) -> Self {
        Self {
            name,
            values: values.to_vec(),
        }
    }

    /// Returns `true` if `value` is one of the allowed values.
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }
}
