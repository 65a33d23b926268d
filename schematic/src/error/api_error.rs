//! Top-level API error type.

use schematic_define::RestMethod;
use thiserror::Error;

use super::{ClientError, ConfigError, ValidationError};

/// Top-level error type for all client calls.
///
/// Request-side validation failures are raised before anything is sent.
/// Response-side validation failures are raised after the round trip, so a
/// mutating call may already have taken effect upstream; see
/// [`ApiError::may_have_applied`].
///
/// ## Examples
///
/// ```rust,ignore
/// use schematic::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::InvalidRequest(e) => eprintln!("Fix the call: {e}"),
///         e @ ApiError::InvalidResponse { .. } if e.may_have_applied() => {
///             eprintln!("Check upstream state: {e}")
///         }
///         ApiError::InvalidResponse { source, .. } => eprintln!("Unexpected response: {source}"),
///         ApiError::Client(e) => eprintln!("Network error: {e}"),
///         ApiError::Config(e) => eprintln!("Configuration error: {e}"),
///         ApiError::Encode(e) => eprintln!("Encoding error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query or body did not match its schema; nothing was sent.
    #[error("request not sent: {0}")]
    InvalidRequest(#[source] ValidationError),

    /// The response did not match its schema.
    #[error("{method} completed but its response was rejected: {source}")]
    InvalidResponse {
        /// Method of the call, deciding whether upstream state may have changed.
        method: RestMethod,
        #[source]
        source: ValidationError,
    },

    /// Transport errors (network, HTTP status, timeout), passed through unchanged.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Client configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A typed payload could not be encoded as JSON.
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns `true` if the call may have changed upstream state even
    /// though it failed.
    ///
    /// This holds for response-validation failures of non-safe methods:
    /// the server accepted the request, but the client could not confirm
    /// the shape of what it returned.
    pub fn may_have_applied(&self) -> bool {
        match self {
            Self::InvalidResponse { method, .. } => !method.is_safe(),
            _ => false,
        }
    }

    /// Returns the validation error, if this is a request or response mismatch.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::InvalidRequest(e) | Self::InvalidResponse { source: e, .. } => Some(e),
            _ => None,
        }
    }
}
