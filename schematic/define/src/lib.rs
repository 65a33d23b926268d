//! Schematic Definition Library
//!
//! This crate provides the primitives for declaring JSON schemas and the REST
//! APIs that exchange them. The same declarations drive two consumers:
//!
//! - the runtime validator in the `schematic` crate, which checks every
//!   request payload and response body against its schema
//! - the `schematic-gen` code generator, which projects schemas into Rust
//!   types and endpoints into typed request structs and resource clients
//!
//! ## Core Types
//!
//! ### Schema Types
//!
//! - [`Schema`] - Declarative shape of a JSON value
//! - [`SchemaRef`] - Reference to a schema declared as a registry static
//! - [`ObjectSchema`] - Object with declared fields and an [`UnknownFields`] policy
//! - [`UnionSchema`] - Object whose shape is chosen by a discriminator
//! - [`EnumSchema`] - Closed set of string values
//! - [`Pattern`] - Compiled string format constraint
//!
//! ### REST API Types
//!
//! - [`RestApi`] - A complete REST API definition with base URL, auth, and endpoints
//! - [`Endpoint`] - A single API endpoint with method, path, and schemas
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//! - [`AuthStrategy`] - How the credential is applied to requests
//! - [`ApiResponse`] - Expected response (validated JSON or empty)
//!
//! ## Examples
//!
//! ```
//! use std::sync::LazyLock;
//! use schematic_define::prelude::*;
//!
//! static LOCATION: LazyLock<Schema> = LazyLock::new(|| {
//!     ObjectSchema::named("Location")
//!         .required("id", Schema::integer())
//!         .required("name", Schema::string())
//!         .passthrough()
//!         .into()
//! });
//!
//! static GET_LOCATION_RESPONSE: LazyLock<Schema> = LazyLock::new(|| {
//!     ObjectSchema::named("GetLocationResponse")
//!         .required("location", Schema::reference(&LOCATION))
//!         .passthrough()
//!         .into()
//! });
//!
//! let api = RestApi {
//!     name: "Hcloud".to_string(),
//!     description: "Hetzner Cloud API".to_string(),
//!     base_url: "https://api.hetzner.cloud/v1".to_string(),
//!     docs_url: Some("https://docs.hetzner.cloud".to_string()),
//!     auth: AuthStrategy::BearerToken { header: None },
//!     env_auth: vec!["HCLOUD_TOKEN".to_string()],
//!     headers: vec![],
//!     endpoints: vec![Endpoint {
//!         id: "GetLocation".to_string(),
//!         resource: "locations".to_string(),
//!         operation: "get".to_string(),
//!         method: RestMethod::Get,
//!         path: "/locations/{id}".to_string(),
//!         description: "Get a location".to_string(),
//!         query: None,
//!         request: None,
//!         response: ApiResponse::json(&GET_LOCATION_RESPONSE),
//!     }],
//!     module_path: None,
//! };
//!
//! assert_eq!(api.resources(), vec!["locations"]);
//! ```
//!
//! ## API Definitions
//!
//! Actual API definitions are in the separate `schematic-definitions` crate,
//! which uses these primitives to define real-world APIs.

pub mod auth;
pub mod prelude;
pub mod response;
pub mod schema;
pub mod types;

// Re-export main types at crate root
pub use auth::AuthStrategy;
pub use response::ApiResponse;
pub use schema::{
    EnumSchema, Field, ObjectSchema, Pattern, Schema, SchemaRef, StringSchema, UnionSchema,
    UnknownFields, Variant,
};
pub use types::{Endpoint, RestApi, RestMethod};
