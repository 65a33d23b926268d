//! Link between generated types and the schemas they were generated from.

use schematic_define::Schema;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A Rust type projected from a registry schema.
///
/// Implemented by generated code only: `schema()` returns the very static the
/// type was generated from, so the runtime check and the static type always
/// describe the same shape.
pub trait SchemaType: Serialize + DeserializeOwned {
    fn schema() -> &'static Schema;
}
