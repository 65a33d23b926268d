//! Convenient re-exports for working with API definitions.
//!
//! ```
//! use schematic_definitions::prelude::*;
//!
//! let api = define_hcloud_api();
//! assert!(!api.endpoints.is_empty());
//! assert!(!hcloud_registry().is_empty());
//! ```

// API definition functions
pub use crate::hcloud::define_hcloud_api;
pub use crate::hcloud::registry as hcloud_registry;
