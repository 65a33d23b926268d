//! Servers and the images they boot from.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::actions::{ACTION, mutation};
use super::common::{ARCHITECTURE, PROTECTION, collection, entity, labels, list_query};
use super::datacenters::DATACENTER;
use super::isos::ISO;
use super::server_types::SERVER_TYPE;

pub static SERVER_STATUS: LazyLock<Schema> = LazyLock::new(|| {
    Schema::named_enum(
        "ServerStatus",
        &[
            "running",
            "initializing",
            "starting",
            "stopping",
            "off",
            "deleting",
            "migrating",
            "rebuilding",
            "unknown",
        ],
    )
});

pub static IPV4: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Ipv4")
        .optional("id", Schema::integer())
        .required("ip", Schema::string())
        .required("blocked", Schema::boolean())
        .required("dns_ptr", Schema::string())
        .passthrough()
        .into()
});

pub static IPV6: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Ipv6")
        .optional("id", Schema::integer())
        .required("ip", Schema::string())
        .required("blocked", Schema::boolean())
        .required(
            "dns_ptr",
            Schema::nullable(Schema::array(
                ObjectSchema::new()
                    .required("ip", Schema::string())
                    .required("dns_ptr", Schema::string())
                    .passthrough()
                    .into(),
            )),
        )
        .passthrough()
        .into()
});

pub static SERVER_PUBLIC_NET: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ServerPublicNet")
        .required("ipv4", Schema::nullable(Schema::reference(&IPV4)))
        .required("ipv6", Schema::nullable(Schema::reference(&IPV6)))
        .required("floating_ips", Schema::array(Schema::integer()))
        .optional(
            "firewalls",
            Schema::array(
                ObjectSchema::new()
                    .required("id", Schema::integer())
                    .required("status", Schema::enumeration(&["applied", "pending"]))
                    .passthrough()
                    .into(),
            ),
        )
        .passthrough()
        .into()
});

pub static SERVER_PRIVATE_NET: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ServerPrivateNet")
        .required("network", Schema::integer())
        .required("ip", Schema::string())
        .required("alias_ips", Schema::array(Schema::string()))
        .required("mac_address", Schema::string())
        .passthrough()
        .into()
});

pub static IMAGE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Image")
        .required("id", Schema::integer())
        .required(
            "type",
            Schema::named_enum("ImageType", &["system", "app", "snapshot", "backup"]),
        )
        .required(
            "status",
            Schema::named_enum("ImageStatus", &["available", "creating", "unavailable"]),
        )
        .required("name", Schema::nullable(Schema::string()))
        .required("description", Schema::string())
        .required("image_size", Schema::nullable(Schema::number()))
        .required("disk_size", Schema::number())
        .required("created", Schema::string())
        .required("os_flavor", Schema::string())
        .required("os_version", Schema::nullable(Schema::string()))
        .required("rapid_deploy", Schema::boolean())
        .required("protection", Schema::reference(&PROTECTION))
        .required("deprecated", Schema::nullable(Schema::string()))
        .required("labels", labels())
        .required("architecture", Schema::reference(&ARCHITECTURE))
        .passthrough()
        .into()
});

pub static SERVER: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Server")
        .required("id", Schema::integer())
        .required("name", Schema::string())
        .required("status", Schema::reference(&SERVER_STATUS))
        .required("created", Schema::string())
        .required("public_net", Schema::reference(&SERVER_PUBLIC_NET))
        .required(
            "private_net",
            Schema::array(Schema::reference(&SERVER_PRIVATE_NET)),
        )
        .required("server_type", Schema::reference(&SERVER_TYPE))
        .required("datacenter", Schema::reference(&DATACENTER))
        .required("image", Schema::nullable(Schema::reference(&IMAGE)))
        .required("iso", Schema::nullable(Schema::reference(&ISO)))
        .required("rescue_enabled", Schema::boolean())
        .required("locked", Schema::boolean())
        .required("backup_window", Schema::nullable(Schema::string()))
        .required("outgoing_traffic", Schema::nullable(Schema::integer()))
        .required("ingoing_traffic", Schema::nullable(Schema::integer()))
        .required("included_traffic", Schema::nullable(Schema::integer()))
        .required("protection", Schema::reference(&PROTECTION))
        .required("labels", labels())
        .required("primary_disk_size", Schema::integer())
        .optional("placement_group", Schema::nullable(Schema::any()))
        .passthrough()
        .into()
});

pub static LIST_SERVERS_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    list_query("ListServersQuery")
        .optional("name", Schema::string())
        .optional("label_selector", Schema::string())
        .optional("status", Schema::array(Schema::reference(&SERVER_STATUS)))
        .into()
});

pub static CREATE_SERVER_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("CreateServerBody")
        .required("name", Schema::string())
        .required("server_type", Schema::string())
        .required("image", Schema::string())
        .optional("location", Schema::string())
        .optional("datacenter", Schema::string())
        .optional("start_after_create", Schema::boolean())
        .optional("ssh_keys", Schema::array(Schema::string()))
        .optional("user_data", Schema::string())
        .optional("labels", labels())
        .optional("networks", Schema::array(Schema::integer()))
        .optional(
            "firewalls",
            Schema::array(
                ObjectSchema::new()
                    .required("firewall", Schema::integer())
                    .into(),
            ),
        )
        .optional(
            "public_net",
            ObjectSchema::new()
                .optional("enable_ipv4", Schema::boolean())
                .optional("enable_ipv6", Schema::boolean())
                .into(),
        )
        .optional("automount", Schema::boolean())
        .into()
});

pub static UPDATE_SERVER_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("UpdateServerBody")
        .optional("name", Schema::string())
        .optional("labels", labels())
        .into()
});

pub static CHANGE_SERVER_PROTECTION_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ChangeServerProtectionBody")
        .optional("delete", Schema::boolean())
        .optional("rebuild", Schema::boolean())
        .into()
});

pub static ATTACH_ISO_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("AttachIsoBody")
        .required("iso", Schema::string())
        .into()
});

pub static LIST_SERVERS_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| collection("ListServersResponse", "servers", &SERVER));

pub static SERVER_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| entity("ServerResponse", "server", &SERVER));

pub static UPDATE_SERVER_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| mutation("UpdateServerResponse", "server", &SERVER).into());

/// Creation also returns the follow-up actions and, without SSH keys, a root password.
pub static CREATE_SERVER_RESPONSE: LazyLock<Schema> = LazyLock::new(|| {
    mutation("CreateServerResponse", "server", &SERVER)
        .optional("next_actions", Schema::array(Schema::reference(&ACTION)))
        .optional("root_password", Schema::nullable(Schema::string()))
        .into()
});
