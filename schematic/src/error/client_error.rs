//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the transport layer.
///
/// These errors represent network-level failures, HTTP status errors,
/// and connection issues that occur during request execution. The client
/// core passes them through without interpretation.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Machine-readable error code from the response body, if any.
        code: Option<String>,
        /// Error message from the response body.
        message: String,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// Failed to establish connection to the server.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// A success response carried a body that is not JSON.
    #[error("HTTP {status}: response body is not valid JSON: {message}")]
    Decode {
        /// The HTTP status code returned.
        status: u16,
        /// Parser error message.
        message: String,
    },
}

impl ClientError {
    /// Returns `true` if repeating the request could succeed.
    ///
    /// Timeout and connection errors are typically transient,
    /// while HTTP status errors depend on the status code.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::HttpStatus { status, .. } => {
                // 5xx errors and 429 (rate limit) are retryable
                *status >= 500 || *status == 429
            }
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::Decode { .. } => false,
        }
    }

    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the upstream error code (e.g. `"not_found"`), if reported.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
