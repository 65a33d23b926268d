//! Typed Hetzner Cloud client.
//!
//! Every type and request in this crate is generated at build time from the
//! schema registry in `schematic-definitions`. Each call validates its query
//! and body before sending and validates the response before decoding it,
//! so a typed value in hand always matched its schema on the wire.
//!
//! ## Example
//!
//! ```no_run
//! use hcloud::{CreateFirewallBody, CreateFirewallRequest, Hcloud};
//!
//! # async fn run() -> Result<(), hcloud::ApiError> {
//! let client = Hcloud::from_env()?;
//!
//! let body = CreateFirewallBody {
//!     name: "web".to_string(),
//!     ..Default::default()
//! };
//! let created = client.firewalls().create(CreateFirewallRequest::new(body)).await?;
//! println!("created firewall {}", created.firewall.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Failures arrive as [`ApiError`]. A rejected response to a mutating call
//! reports [`ApiError::may_have_applied`]; check upstream state before
//! retrying.

pub use schematic::{ApiError, ClientConfig, ClientError, ConfigError, Transport, ValidationError};

include!(concat!(env!("OUT_DIR"), "/hcloud.rs"));
