//! Shapes shared across resources: pagination, protection, prices and
//! the small reference objects used by several entities.

use std::sync::LazyLock;

use schematic_define::prelude::*;

/// Labels attached to most resources.
pub fn labels() -> Schema {
    Schema::map(Schema::string())
}

/// Pagination block inside [`META`].
pub static PAGINATION: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Pagination")
        .required("page", Schema::integer())
        .required("per_page", Schema::integer())
        .required("previous_page", Schema::nullable(Schema::integer()))
        .required("next_page", Schema::nullable(Schema::integer()))
        .required("last_page", Schema::nullable(Schema::integer()))
        .required("total_entries", Schema::nullable(Schema::integer()))
        .passthrough()
        .into()
});

/// Side-channel metadata on collection envelopes.
pub static META: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Meta")
        .required("pagination", Schema::reference(&PAGINATION))
        .passthrough()
        .into()
});

pub static PROTECTION: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Protection")
        .describe("Guards against accidental deletion or rebuild")
        .required("delete", Schema::boolean())
        .optional("rebuild", Schema::boolean())
        .passthrough()
        .into()
});

/// A price as decimal strings, to avoid float rounding.
pub static PRICE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Price")
        .required("net", Schema::string())
        .required("gross", Schema::string())
        .passthrough()
        .into()
});

/// Adds the per-location hourly and monthly price fields.
pub(crate) fn price_per_time_fields(object: ObjectSchema) -> ObjectSchema {
    object
        .required("location", Schema::string())
        .required("price_hourly", Schema::reference(&PRICE))
        .required("price_monthly", Schema::reference(&PRICE))
}

pub static PRICE_PER_TIME: LazyLock<Schema> = LazyLock::new(|| {
    price_per_time_fields(ObjectSchema::named("PricePerTime"))
        .passthrough()
        .into()
});

pub static ARCHITECTURE: LazyLock<Schema> =
    LazyLock::new(|| Schema::named_enum("Architecture", &["x86", "arm"]));

pub static NETWORK_ZONE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::named_enum(
        "NetworkZone",
        &["eu-central", "us-east", "us-west", "ap-southeast"],
    )
});

/// Reference to another resource by id.
pub static RESOURCE_ID: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ResourceId")
        .required("id", Schema::integer())
        .passthrough()
        .into()
});

pub static LABEL_SELECTOR: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("LabelSelector")
        .required("selector", Schema::string())
        .passthrough()
        .into()
});

/// Query parameters every list endpoint accepts.
pub(crate) fn list_query(name: &'static str) -> ObjectSchema {
    ObjectSchema::named(name)
        .optional("sort", Schema::array(Schema::string()))
        .optional("page", Schema::integer())
        .optional("per_page", Schema::integer())
}

/// Collection envelope: `{ <plural>: [item], meta?: Meta }`.
pub(crate) fn collection(name: &'static str, plural: &'static str, item: SchemaRef) -> Schema {
    ObjectSchema::named(name)
        .required(plural, Schema::array(Schema::reference(item)))
        .optional("meta", Schema::reference(&META))
        .passthrough()
        .into()
}

/// Entity envelope: `{ <singular>: item }`.
pub(crate) fn entity(name: &'static str, singular: &'static str, item: SchemaRef) -> Schema {
    ObjectSchema::named(name)
        .required(singular, Schema::reference(item))
        .passthrough()
        .into()
}
