//! Schematic API Definitions
//!
//! This crate contains actual REST API definitions that use the primitives
//! from `schematic-define`. Each API is organized in its own module holding
//! its schema registry and endpoint table.
//!
//! ## Available APIs
//!
//! - [`hcloud`] - Hetzner Cloud API (servers, networks, firewalls, catalogue data)
//!
//! ## Examples
//!
//! ```
//! use schematic_definitions::hcloud::{self, define_hcloud_api};
//!
//! let api = define_hcloud_api();
//! assert_eq!(api.name, "Hcloud");
//! assert!(hcloud::registry().iter().any(|(ident, _)| *ident == "FIREWALL"));
//! ```

pub mod hcloud;
pub mod prelude;

// Re-export API definition functions for convenience
pub use hcloud::define_hcloud_api;
