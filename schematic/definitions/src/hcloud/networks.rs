//! Private networks with their subnets and routes.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::actions::mutation;
use super::common::{NETWORK_ZONE, PROTECTION, collection, entity, labels, list_query};

pub static SUBNET_TYPE: LazyLock<Schema> =
    LazyLock::new(|| Schema::named_enum("SubnetType", &["cloud", "server", "vswitch"]));

fn subnet_fields(object: ObjectSchema) -> ObjectSchema {
    object
        .required("type", Schema::reference(&SUBNET_TYPE))
        .optional("ip_range", Schema::string())
        .required("network_zone", Schema::reference(&NETWORK_ZONE))
        .optional("vswitch_id", Schema::nullable(Schema::integer()))
}

fn route_fields(object: ObjectSchema) -> ObjectSchema {
    object
        .required("destination", Schema::string())
        .required("gateway", Schema::string())
}

pub static SUBNET: LazyLock<Schema> = LazyLock::new(|| {
    subnet_fields(ObjectSchema::named("Subnet"))
        .required("gateway", Schema::string())
        .passthrough()
        .into()
});

/// Subnet as sent when creating a network.
pub static SUBNET_SPEC: LazyLock<Schema> =
    LazyLock::new(|| subnet_fields(ObjectSchema::named("SubnetSpec")).into());

pub static ROUTE: LazyLock<Schema> = LazyLock::new(|| {
    route_fields(ObjectSchema::named("Route"))
        .passthrough()
        .into()
});

/// Route as sent when creating a network.
pub static ROUTE_SPEC: LazyLock<Schema> =
    LazyLock::new(|| route_fields(ObjectSchema::named("RouteSpec")).into());

pub static NETWORK: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Network")
        .required("id", Schema::integer())
        .required("name", Schema::string())
        .required("ip_range", Schema::string())
        .required("subnets", Schema::array(Schema::reference(&SUBNET)))
        .required("routes", Schema::array(Schema::reference(&ROUTE)))
        .required("servers", Schema::array(Schema::integer()))
        .required("protection", Schema::reference(&PROTECTION))
        .required("labels", labels())
        .required("created", Schema::string())
        .optional("expose_routes_to_vswitch", Schema::boolean())
        .passthrough()
        .into()
});

pub static LIST_NETWORKS_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    list_query("ListNetworksQuery")
        .optional("name", Schema::string())
        .optional("label_selector", Schema::string())
        .into()
});

pub static CREATE_NETWORK_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("CreateNetworkBody")
        .required("name", Schema::string())
        .required("ip_range", Schema::string())
        .optional("labels", labels())
        .optional("subnets", Schema::array(Schema::reference(&SUBNET_SPEC)))
        .optional("routes", Schema::array(Schema::reference(&ROUTE_SPEC)))
        .optional("expose_routes_to_vswitch", Schema::boolean())
        .into()
});

pub static UPDATE_NETWORK_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("UpdateNetworkBody")
        .optional("name", Schema::string())
        .optional("labels", labels())
        .optional("expose_routes_to_vswitch", Schema::boolean())
        .into()
});

pub static LIST_NETWORKS_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| collection("ListNetworksResponse", "networks", &NETWORK));

pub static NETWORK_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| entity("NetworkResponse", "network", &NETWORK));

pub static CREATE_NETWORK_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| mutation("CreateNetworkResponse", "network", &NETWORK).into());
