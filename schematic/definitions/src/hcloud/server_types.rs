//! Server types: the hardware plans a server is created from.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::common::{ARCHITECTURE, PRICE, collection, entity, list_query, price_per_time_fields};

pub static CPU_TYPE: LazyLock<Schema> =
    LazyLock::new(|| Schema::named_enum("CpuType", &["shared", "dedicated"]));

pub static SERVER_TYPE_PRICE: LazyLock<Schema> = LazyLock::new(|| {
    price_per_time_fields(ObjectSchema::named("ServerTypePrice"))
        .required("included_traffic", Schema::integer())
        .required("price_per_tb_traffic", Schema::reference(&PRICE))
        .passthrough()
        .into()
});

pub static SERVER_TYPE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ServerType")
        .required("id", Schema::integer())
        .required("name", Schema::string())
        .required("description", Schema::string())
        .required("cores", Schema::integer())
        .required("memory", Schema::number())
        .required("disk", Schema::integer())
        .required("prices", Schema::array(Schema::reference(&SERVER_TYPE_PRICE)))
        .required("storage_type", Schema::enumeration(&["local", "network"]))
        .required("cpu_type", Schema::reference(&CPU_TYPE))
        .required("architecture", Schema::reference(&ARCHITECTURE))
        .optional("deprecated", Schema::nullable(Schema::boolean()))
        .passthrough()
        .into()
});

pub static LIST_SERVER_TYPES_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    list_query("ListServerTypesQuery")
        .optional("name", Schema::string())
        .into()
});

pub static LIST_SERVER_TYPES_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| collection("ListServerTypesResponse", "server_types", &SERVER_TYPE));

pub static SERVER_TYPE_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| entity("ServerTypeResponse", "server_type", &SERVER_TYPE));
