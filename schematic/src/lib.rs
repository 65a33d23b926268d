//! Schema-validated REST client runtime.
//!
//! The `schematic` crate is the runtime half of a schema-driven API client:
//! schemas declared with [`schematic_define`] are checked at runtime by
//! [`validate`], and projected into Rust types at build time by
//! `schematic-gen`. Generated clients call into [`ClientCore`], which
//! validates every request before it is sent and every response before it
//! is decoded.
//!
//! ## Features
//!
//! - **Structural validation**: one recursive walk over the schema tree, with
//!   field-path diagnostics such as `firewall.rules[2].port`
//! - **Passthrough and strict objects**: entity schemas keep unknown fields,
//!   request payloads reject them
//! - **Pluggable transport**: [`Transport`] decouples the core from HTTP;
//!   [`HttpTransport`] is the `reqwest` implementation
//! - **Layered error handling**: request-side and response-side failures are
//!   distinct, so callers know whether a mutation may have applied
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use schematic::{ValidateOptions, validate};
//! use schematic_define::{ObjectSchema, Schema};
//!
//! let firewall: Schema = ObjectSchema::named("Firewall")
//!     .required("id", Schema::integer())
//!     .required("name", Schema::string())
//!     .passthrough()
//!     .into();
//!
//! let options = ValidateOptions::new("firewalls.get").with_details(true);
//! let value = validate(&firewall, &json!({"id": 1, "name": "fw1", "new": 0}), &options).unwrap();
//! assert_eq!(value["name"], "fw1");
//!
//! let err = validate(&firewall, &json!({"id": 1}), &options).unwrap_err();
//! assert_eq!(err.missing(), vec!["name"]);
//! ```

pub mod client;
pub mod config;
pub mod double_option;
pub mod error;
pub mod schema_type;
pub mod transport;
pub mod validate;

pub use schematic_define;

// Re-exports for convenience
pub use client::{encode_query, ClientCore, HttpTransport, Payload, RequestParts};
pub use config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
pub use error::{ApiError, ClientError, ConfigError, Issue, IssueKind, Stage, ValidationError};
pub use schema_type::SchemaType;
pub use transport::{BoxFuture, Transport, TransportRequest};
pub use validate::{validate, validate_as, FieldPath, Segment, ValidateOptions};
