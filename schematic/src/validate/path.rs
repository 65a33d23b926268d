//! Locations inside a JSON value.

use std::fmt;

/// One step from a value to a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// An object key.
    Key(String),
    /// An array position.
    Index(usize),
}

/// Path from the validated root to a nested value.
///
/// Renders keys joined by dots and indices in brackets, e.g.
/// `rules.inbound[2].port`. The root renders as `$`. Keys containing `.`,
/// `[`, `]` or `"` are quoted in brackets: `labels["example.com/role"]`.
///
/// ## Examples
///
/// ```
/// use schematic::FieldPath;
///
/// let path = FieldPath::root().key("rules").key("inbound").index(2).key("port");
/// assert_eq!(path.to_string(), "rules.inbound[2].port");
/// assert_eq!(FieldPath::root().to_string(), "$");
/// assert_eq!(FieldPath::root().index(0).to_string(), "[0]");
/// assert_eq!(
///     FieldPath::root().key("labels").key("example.com/role").to_string(),
///     r#"labels["example.com/role"]"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns this path extended by an object key.
    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Key(key.into()));
        Self(segments)
    }

    /// Returns this path extended by an array position.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(Segment::Index(index));
        Self(segments)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if needs_quoting(key) => write!(f, "[{key:?}]")?,
                Segment::Key(key) if i == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{key}")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

fn needs_quoting(key: &str) -> bool {
    key.is_empty() || key.contains(['.', '[', ']', '"'])
}
