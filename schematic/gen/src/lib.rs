//! Schematic code generator library.
//!
//! Projects a schema registry and a `RestApi` definition from
//! `schematic-definitions` into a typed client:
//!
//! - one Rust type per registry schema, each implementing `schematic::SchemaType`
//! - one request struct per endpoint
//! - one borrowed client per resource group
//! - the API struct that owns the `schematic::ClientCore`
//!
//! ## Modules
//!
//! - [`codegen`] - Code generation for individual components
//! - [`naming`] - Identifier conversion and keyword escaping
//! - [`output`] - Final assembly, validation, and file writing
//! - [`errors`] - Error types for the generator
//!
//! ## Example Usage
//!
//! ```no_run
//! use schematic_definitions::hcloud::{define_hcloud_api, registry};
//! use schematic_gen::output::generate_to_string;
//!
//! let code = generate_to_string(&define_hcloud_api(), &registry()).unwrap();
//! assert!(code.contains("pub struct Hcloud"));
//! ```
//!
//! Build scripts write the file into `OUT_DIR` and `include!` it:
//!
//! ```ignore
//! // build.rs
//! let out_dir = std::env::var("OUT_DIR")?;
//! schematic_gen::output::generate_and_write(&api, &registry, out_dir.as_ref(), false)?;
//!
//! // src/lib.rs
//! include!(concat!(env!("OUT_DIR"), "/hcloud.rs"));
//! ```

pub mod codegen;
pub mod errors;
pub mod naming;
pub mod output;
