//! Convenient re-exports for declaring schemas and REST APIs.
//!
//! ```
//! use std::sync::LazyLock;
//! use schematic_define::prelude::*;
//!
//! static META: LazyLock<Schema> = LazyLock::new(|| {
//!     ObjectSchema::named("Meta").passthrough().into()
//! });
//!
//! let envelope: Schema = ObjectSchema::named("ListThingsResponse")
//!     .required("things", Schema::array(Schema::any()))
//!     .optional("meta", Schema::reference(&META))
//!     .passthrough()
//!     .into();
//! assert_eq!(envelope.name(), Some("ListThingsResponse"));
//! ```

pub use crate::auth::AuthStrategy;
pub use crate::response::ApiResponse;
pub use crate::schema::{
    EnumSchema, Field, ObjectSchema, Pattern, Schema, SchemaRef, StringSchema, UnionSchema,
    UnknownFields, Variant,
};
pub use crate::types::{Endpoint, RestApi, RestMethod};
