//! Schema registry for the Hetzner Cloud API.
//!
//! Every payload the client sends or receives is declared here exactly once
//! as a `static LazyLock<Schema>`. Larger envelopes embed entities by
//! reference, so a change to `FIREWALL` is seen by every envelope that
//! carries a firewall.
//!
//! Entity and envelope schemas are passthrough: fields added upstream are
//! accepted and preserved. Query and request-body schemas are strict.

mod actions;
mod common;
mod datacenters;
mod endpoints;
mod firewalls;
mod isos;
mod locations;
mod networks;
mod pricing;
mod server_types;
mod servers;

pub use actions::*;
pub use common::*;
pub use datacenters::*;
pub use endpoints::define_hcloud_api;
pub use firewalls::*;
pub use isos::*;
pub use locations::*;
pub use networks::*;
pub use pricing::*;
pub use server_types::*;
pub use servers::*;

use schematic_define::SchemaRef;

macro_rules! registry {
    ($($ident:ident),* $(,)?) => {
        /// Lists every top-level schema with the name of its static.
        ///
        /// The code generator emits one Rust type per entry and points its
        /// `SchemaType` impl back at the static.
        pub fn registry() -> Vec<(&'static str, SchemaRef)> {
            vec![$((stringify!($ident), &$ident)),*]
        }
    };
}

registry![
    // common
    PAGINATION,
    META,
    PROTECTION,
    PRICE,
    PRICE_PER_TIME,
    ARCHITECTURE,
    NETWORK_ZONE,
    RESOURCE_ID,
    LABEL_SELECTOR,
    // actions
    ACTION_STATUS,
    ACTION_ERROR,
    RESOURCE,
    ACTION,
    LIST_ACTIONS_QUERY,
    LIST_ACTIONS_RESPONSE,
    ACTION_RESPONSE,
    // locations
    LOCATION,
    LIST_LOCATIONS_QUERY,
    LIST_LOCATIONS_RESPONSE,
    LOCATION_RESPONSE,
    // datacenters
    DATACENTER,
    LIST_DATACENTERS_QUERY,
    LIST_DATACENTERS_RESPONSE,
    DATACENTER_RESPONSE,
    // isos
    ISO_TYPE,
    ISO,
    LIST_ISOS_QUERY,
    LIST_ISOS_RESPONSE,
    ISO_RESPONSE,
    // server types
    CPU_TYPE,
    SERVER_TYPE_PRICE,
    SERVER_TYPE,
    LIST_SERVER_TYPES_QUERY,
    LIST_SERVER_TYPES_RESPONSE,
    SERVER_TYPE_RESPONSE,
    // pricing
    SERVER_TYPE_PRICING,
    PRICING,
    PRICING_RESPONSE,
    // networks
    SUBNET_TYPE,
    SUBNET,
    SUBNET_SPEC,
    ROUTE,
    ROUTE_SPEC,
    NETWORK,
    LIST_NETWORKS_QUERY,
    CREATE_NETWORK_BODY,
    UPDATE_NETWORK_BODY,
    LIST_NETWORKS_RESPONSE,
    NETWORK_RESPONSE,
    CREATE_NETWORK_RESPONSE,
    // firewalls
    FIREWALL_RULE_DIRECTION,
    FIREWALL_RULE_PROTOCOL,
    FIREWALL_RULE,
    FIREWALL_RULE_SPEC,
    FIREWALL_APPLIED_TO_RESOURCE,
    FIREWALL_RESOURCE,
    RESOURCE_ID_SPEC,
    LABEL_SELECTOR_SPEC,
    FIREWALL_RESOURCE_SPEC,
    FIREWALL,
    LIST_FIREWALLS_QUERY,
    CREATE_FIREWALL_BODY,
    UPDATE_FIREWALL_BODY,
    SET_FIREWALL_RULES_BODY,
    APPLY_FIREWALL_BODY,
    REMOVE_FIREWALL_BODY,
    LIST_FIREWALLS_RESPONSE,
    FIREWALL_RESPONSE,
    CREATE_FIREWALL_RESPONSE,
    // servers
    SERVER_STATUS,
    IPV4,
    IPV6,
    SERVER_PUBLIC_NET,
    SERVER_PRIVATE_NET,
    IMAGE,
    SERVER,
    LIST_SERVERS_QUERY,
    CREATE_SERVER_BODY,
    UPDATE_SERVER_BODY,
    CHANGE_SERVER_PROTECTION_BODY,
    ATTACH_ISO_BODY,
    LIST_SERVERS_RESPONSE,
    SERVER_RESPONSE,
    UPDATE_SERVER_RESPONSE,
    CREATE_SERVER_RESPONSE,
];
