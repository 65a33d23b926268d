//! ISO images that can be attached to servers.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::common::{ARCHITECTURE, collection, entity, list_query};

pub static ISO_TYPE: LazyLock<Schema> =
    LazyLock::new(|| Schema::named_enum("IsoType", &["public", "private"]));

pub static ISO: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Iso")
        .required("id", Schema::integer())
        .required("name", Schema::nullable(Schema::string()))
        .required("description", Schema::string())
        .required("type", Schema::nullable(Schema::reference(&ISO_TYPE)))
        .required("architecture", Schema::nullable(Schema::reference(&ARCHITECTURE)))
        // may be absent or null
        .optional(
            "deprecation",
            Schema::nullable(
                ObjectSchema::new()
                    .required("announced", Schema::string())
                    .required("unavailable_after", Schema::string())
                    .passthrough()
                    .into(),
            ),
        )
        .passthrough()
        .into()
});

pub static LIST_ISOS_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    list_query("ListIsosQuery")
        .optional("name", Schema::string())
        .optional("architecture", Schema::array(Schema::reference(&ARCHITECTURE)))
        .optional("include_architecture_wildcard", Schema::boolean())
        .into()
});

pub static LIST_ISOS_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| collection("ListIsosResponse", "isos", &ISO));

pub static ISO_RESPONSE: LazyLock<Schema> = LazyLock::new(|| entity("IsoResponse", "iso", &ISO));
