//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These errors occur while building a client, before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// None of the credential environment variables is set.
    #[error("Missing credential: set one of {}", vars.join(", "))]
    MissingCredential {
        /// The variables that were checked, in order.
        vars: Vec<String>,
    },

    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Timeout is not a whole number of seconds.
    #[error("Invalid timeout {value:?}: expected whole seconds")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },

    /// A header name or value cannot be sent over HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The header name.
        name: String,
        /// Why it was rejected.
        message: String,
    },
}

impl ConfigError {
    /// Creates a missing credential error.
    pub fn missing_credential<S: AsRef<str>>(vars: &[S]) -> Self {
        Self::MissingCredential {
            vars: vars.iter().map(|v| v.as_ref().to_string()).collect(),
        }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential() {
        let err = ConfigError::missing_credential(&["HCLOUD_TOKEN"]);
        assert_eq!(err.to_string(), "Missing credential: set one of HCLOUD_TOKEN");
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = ConfigError::InvalidTimeout {
            value: "soon".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid timeout \"soon\": expected whole seconds");
    }
}
