//! Code generation modules for schematic.
//!
//! Each generator returns a `proc_macro2::TokenStream`; [`crate::output`]
//! assembles, validates and formats them.
//!
//! ## Generation Flow
//!
//! 1. Every registry schema becomes a Rust type via [`TypeProjection`]
//! 2. Each endpoint gets a request struct via [`generate_request_struct`]
//! 3. Each resource gets a client via [`generate_resource_clients`]
//! 4. The API struct ties them together via [`generate_api_struct`]

pub mod api_struct;
pub mod client;
pub mod request_structs;
pub mod types;

pub use api_struct::generate_api_struct;
pub use client::{generate_resource_clients, resource_client_name};
pub use request_structs::{generate_request_struct, request_struct_name};
pub use types::{EXTRA_FIELD, TypeProjection, registered_name};
