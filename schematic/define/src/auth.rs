//! Authentication strategies for REST APIs.
//!
//! Credentials are never part of a definition; the strategy only says how a
//! credential obtained from configuration is applied to each request.

use serde::{Deserialize, Serialize};

/// Authentication strategy for an API.
///
/// ## Examples
///
/// ```
/// use schematic_define::AuthStrategy;
///
/// let auth = AuthStrategy::BearerToken { header: None };
/// assert_eq!(auth.header_name(), Some("Authorization"));
/// assert_eq!(AuthStrategy::None.header_name(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthStrategy {
    /// No authentication required.
    #[default]
    None,

    /// Bearer token in the Authorization header.
    ///
    /// Generates: `Authorization: Bearer <token>`
    BearerToken {
        /// Optional header name override.
        ///
        /// Default is "Authorization".
        header: Option<String>,
    },
}

impl AuthStrategy {
    /// Returns the header that carries the credential, if any.
    pub fn header_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::BearerToken { header } => Some(header.as_deref().unwrap_or("Authorization")),
        }
    }

    /// Formats the header value for `token`.
    pub fn header_value(&self, token: &str) -> Option<String> {
        match self {
            Self::None => None,
            Self::BearerToken { .. } => Some(format!("Bearer {token}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_uses_authorization_by_default() {
        let auth = AuthStrategy::BearerToken { header: None };
        assert_eq!(auth.header_name(), Some("Authorization"));
        assert_eq!(auth.header_value("abc").as_deref(), Some("Bearer abc"));
    }

    #[test]
    fn bearer_header_override() {
        let auth = AuthStrategy::BearerToken {
            header: Some("X-Auth-Token".to_string()),
        };
        assert_eq!(auth.header_name(), Some("X-Auth-Token"));
    }

    #[test]
    fn none_applies_nothing() {
        assert_eq!(AuthStrategy::None.header_name(), None);
        assert_eq!(AuthStrategy::None.header_value("abc"), None);
    }

    #[test]
    fn serde_roundtrip() {
        let auth = AuthStrategy::BearerToken { header: None };
        let json = serde_json::to_string(&auth).unwrap();
        let parsed: AuthStrategy = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, auth);
    }
}
