//! Layered error types for the runtime.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for every client call
//! - [`ClientError`] - HTTP client and network errors, produced by transports
//! - [`ValidationError`] - Shape mismatches found by the validator
//! - [`ConfigError`] - Client configuration errors

mod api_error;
mod client_error;
mod config_error;
mod validation_error;

pub use api_error::ApiError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use validation_error::{Issue, IssueKind, Stage, ValidationError};
