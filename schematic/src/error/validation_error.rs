//! Shape mismatches reported by the validator.

use std::fmt;

use strum::Display;
use thiserror::Error;

use crate::validate::FieldPath;

/// Which payload of a call was being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Stage {
    /// A standalone value.
    #[default]
    #[strum(serialize = "value")]
    Value,
    /// Query parameters, checked before sending.
    #[strum(serialize = "query")]
    Query,
    /// Request body, checked before sending.
    #[strum(serialize = "request body")]
    RequestBody,
    /// Response body, checked after the round trip.
    #[strum(serialize = "response")]
    Response,
}

/// What went wrong at a single location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// A required key is absent.
    Missing,
    /// The value has the wrong JSON type.
    TypeMismatch {
        /// Description of the accepted shape.
        expected: String,
        /// Description of the value encountered.
        found: String,
    },
    /// A strict object carries an undeclared key.
    UnknownField,
    /// A string outside a closed set.
    InvalidEnum {
        /// Accepted values.
        allowed: Vec<&'static str>,
        /// The value encountered.
        found: String,
    },
    /// A string that does not satisfy its format constraint.
    PatternMismatch {
        /// The regular expression.
        pattern: String,
        /// The value encountered.
        found: String,
    },
    /// A union value lacks its tag field.
    MissingDiscriminator,
    /// A union value carries a tag no branch declares.
    UnknownVariant {
        /// Declared tags.
        allowed: Vec<&'static str>,
        /// The tag encountered.
        found: String,
    },
    /// The value matched its schema but could not be decoded into the
    /// generated type.
    Deserialize(String),
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("missing required field"),
            Self::TypeMismatch { expected, found } => write!(f, "expected {expected}, found {found}"),
            Self::UnknownField => f.write_str("unknown field"),
            Self::InvalidEnum { allowed, found } => {
                write!(f, "expected one of {}, found {found:?}", allowed.join("|"))
            }
            Self::PatternMismatch { pattern, found } => {
                write!(f, "{found:?} does not match `{pattern}`")
            }
            Self::MissingDiscriminator => f.write_str("missing discriminator"),
            Self::UnknownVariant { allowed, found } => {
                write!(f, "unknown variant {found:?}, expected one of {}", allowed.join("|"))
            }
            Self::Deserialize(message) => write!(f, "cannot decode: {message}"),
        }
    }
}

/// A single fault, located by its path from the validated root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub path: FieldPath,
    pub kind: IssueKind,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

/// A value did not match its schema.
///
/// Always carries the context label of the operation. `issues` is populated
/// only when detailed diagnostics were requested; otherwise validation
/// stops at the first fault and the error names the context alone.
///
/// ## Examples
///
/// ```
/// use schematic::{FieldPath, Issue, IssueKind, Stage, ValidationError};
///
/// let err = ValidationError::new(
///     "firewalls.get",
///     Stage::Response,
///     vec![Issue { path: FieldPath::root().key("labels"), kind: IssueKind::Missing }],
/// );
/// assert_eq!(
///     err.to_string(),
///     "firewalls.get: response does not match its schema (labels: missing required field)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: {stage} does not match its schema{}", render_issues(.issues))]
pub struct ValidationError {
    /// Label of the operation being validated, e.g. `firewalls.create`.
    pub context: String,
    /// Which payload failed.
    pub stage: Stage,
    /// Every fault found, in schema declaration order.
    pub issues: Vec<Issue>,
}

fn render_issues(issues: &[Issue]) -> String {
    match issues {
        [] => String::new(),
        [issue] => format!(" ({issue})"),
        issues => {
            let rendered: Vec<String> = issues.iter().map(Issue::to_string).collect();
            format!(" ({} issues: {})", issues.len(), rendered.join("; "))
        }
    }
}

impl ValidationError {
    pub fn new(context: impl Into<String>, stage: Stage, issues: Vec<Issue>) -> Self {
        Self {
            context: context.into(),
            stage,
            issues,
        }
    }

    /// Rendered paths of every issue.
    pub fn paths(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.path.to_string()).collect()
    }

    /// Rendered paths of the required fields that were absent.
    pub fn missing(&self) -> Vec<String> {
        self.issues
            .iter()
            .filter(|i| i.kind == IssueKind::Missing)
            .map(|i| i.path.to_string())
            .collect()
    }

    /// Returns the issue at `path`, if any.
    pub fn issue_at(&self, path: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.path.to_string() == path)
    }

    /// Returns `true` if field-level diagnostics are attached.
    pub fn is_detailed(&self) -> bool {
        !self.issues.is_empty()
    }
}
