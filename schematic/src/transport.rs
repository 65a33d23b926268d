//! The boundary between the client core and the network.
//!
//! The core only needs `request(method, path, query, body) -> JSON`. Anything
//! implementing [`Transport`] can stand in for HTTP, which keeps the core
//! testable without sockets.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use schematic_define::RestMethod;
use serde_json::Value;

use crate::error::ClientError;

/// A boxed future, keeping [`Transport`] object safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A request as handed to the transport, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: RestMethod,
    /// Path below the base URL, with parameters already substituted.
    pub path: String,
    /// Encoded query pairs; repeated keys are allowed.
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl TransportRequest {
    pub fn new(method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }
}

/// Sends requests and returns decoded JSON.
///
/// Implementations report network failures, timeouts and non-2xx statuses as
/// [`ClientError`]; the core passes those through unchanged. An empty body
/// is returned as [`Value::Null`].
pub trait Transport: Send + Sync + fmt::Debug {
    fn request(&self, request: TransportRequest) -> BoxFuture<'_, Result<Value, ClientError>>;
}
