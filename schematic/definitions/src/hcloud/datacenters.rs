//! Datacenters: a location plus the server types offered there.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::common::{META, entity, list_query};
use super::locations::LOCATION;

pub static DATACENTER: LazyLock<Schema> = LazyLock::new(|| {
    let ids = || Schema::array(Schema::integer());
    ObjectSchema::named("Datacenter")
        .required("id", Schema::integer())
        .required("name", Schema::string())
        .required("description", Schema::string())
        .required("location", Schema::reference(&LOCATION))
        .required(
            "server_types",
            ObjectSchema::new()
                .required("supported", ids())
                .required("available", ids())
                .required("available_for_migration", ids())
                .passthrough()
                .into(),
        )
        .passthrough()
        .into()
});

pub static LIST_DATACENTERS_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    list_query("ListDatacentersQuery")
        .optional("name", Schema::string())
        .into()
});

pub static LIST_DATACENTERS_RESPONSE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ListDatacentersResponse")
        .required("datacenters", Schema::array(Schema::reference(&DATACENTER)))
        .optional("recommendation", Schema::integer())
        .optional("meta", Schema::reference(&META))
        .passthrough()
        .into()
});

pub static DATACENTER_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| entity("DatacenterResponse", "datacenter", &DATACENTER));
