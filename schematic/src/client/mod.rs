//! Client core and HTTP transport.
//!
//! Generated resource clients build [`RequestParts`] and hand them to a
//! shared [`ClientCore`], which validates, sends through a [`Transport`] and
//! validates again.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use schematic::{ClientConfig, ClientCore, HttpTransport, Payload, RequestParts};
//! use schematic_define::RestMethod;
//!
//! let config = ClientConfig::new("https://api.hetzner.cloud/v1")?.with_token("sk-xxx");
//! let core = ClientCore::new(Arc::new(HttpTransport::new(&config)?));
//!
//! let parts = RequestParts::new("firewalls.create", RestMethod::Post, "/firewalls")
//!     .with_body(Payload::typed(&body)?);
//! let created: CreateFirewallResponse = core.execute(parts).await?;
//! ```
//!
//! [`Transport`]: crate::Transport

mod executor;
mod http;
mod query;

pub use executor::{ClientCore, Payload, RequestParts};
pub use http::HttpTransport;
pub use query::encode_query;
