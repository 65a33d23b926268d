//! API response type definitions.
//!
//! The response definition decides whether the generated client validates
//! and decodes a body or expects none at all.

use crate::schema::SchemaRef;

/// Describes the expected response from an API endpoint.
///
/// ## Examples
///
/// ```
/// use std::sync::LazyLock;
/// use schematic_define::{ApiResponse, ObjectSchema, Schema};
///
/// static ENVELOPE: LazyLock<Schema> = LazyLock::new(|| {
///     ObjectSchema::named("GetThingResponse").passthrough().into()
/// });
///
/// assert!(ApiResponse::json(&ENVELOPE).is_json());
/// assert!(ApiResponse::Empty.is_empty());
/// ```
#[derive(Debug, Clone)]
pub enum ApiResponse {
    /// JSON body validated against the referenced schema.
    Json(SchemaRef),

    /// No response body expected (204 No Content).
    Empty,
}

impl ApiResponse {
    /// Creates a JSON response described by `schema`.
    pub fn json(schema: SchemaRef) -> Self {
        Self::Json(schema)
    }

    /// Returns the response schema, if a body is expected.
    pub fn schema(&self) -> Option<SchemaRef> {
        match self {
            Self::Json(schema) => Some(*schema),
            Self::Empty => None,
        }
    }

    /// Returns true if this is a JSON response.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns true if this is an empty response.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use super::*;
    use crate::schema::{ObjectSchema, Schema};

    static BODY: LazyLock<Schema> =
        LazyLock::new(|| ObjectSchema::named("Body").passthrough().into());

    #[test]
    fn is_json_returns_true_for_json_response() {
        let response = ApiResponse::json(&BODY);
        assert!(response.is_json());
        assert!(!response.is_empty());
        assert!(response.schema().is_some());
    }

    #[test]
    fn is_empty_returns_true_for_empty_response() {
        let response = ApiResponse::Empty;
        assert!(!response.is_json());
        assert!(response.is_empty());
        assert!(response.schema().is_none());
    }
}
