//! Firewalls: rule sets applied to servers directly or through label selectors.

use std::sync::LazyLock;

use schematic_define::prelude::*;

use super::actions::ACTION;
use super::common::{LABEL_SELECTOR, RESOURCE_ID, collection, entity, labels, list_query};

pub static FIREWALL_RULE_DIRECTION: LazyLock<Schema> =
    LazyLock::new(|| Schema::named_enum("FirewallRuleDirection", &["in", "out"]));

pub static FIREWALL_RULE_PROTOCOL: LazyLock<Schema> = LazyLock::new(|| {
    Schema::named_enum(
        "FirewallRuleProtocol",
        &["tcp", "udp", "icmp", "esp", "gre"],
    )
});

/// A single port (`"80"`) or an inclusive range (`"80-90"`).
pub const PORT_PATTERN: &str = r"^\d+(-\d+)?$";

fn rule_fields(object: ObjectSchema) -> ObjectSchema {
    object
        .required("direction", Schema::reference(&FIREWALL_RULE_DIRECTION))
        .required("protocol", Schema::reference(&FIREWALL_RULE_PROTOCOL))
        .optional("port", Schema::nullable(Schema::pattern(PORT_PATTERN)))
        .optional("source_ips", Schema::array(Schema::string()))
        .optional("destination_ips", Schema::array(Schema::string()))
        .optional("description", Schema::nullable(Schema::string()))
}

pub static FIREWALL_RULE: LazyLock<Schema> = LazyLock::new(|| {
    rule_fields(ObjectSchema::named("FirewallRule"))
        .passthrough()
        .into()
});

/// Rule as sent by the caller.
pub static FIREWALL_RULE_SPEC: LazyLock<Schema> =
    LazyLock::new(|| rule_fields(ObjectSchema::named("FirewallRuleSpec")).into());

/// A server the firewall ended up applied to through a label selector.
pub static FIREWALL_APPLIED_TO_RESOURCE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("FirewallAppliedToResource")
        .required("type", Schema::string())
        .optional("server", Schema::reference(&RESOURCE_ID))
        .passthrough()
        .into()
});

/// Where a firewall is applied, keyed on `type`.
pub static FIREWALL_RESOURCE: LazyLock<Schema> = LazyLock::new(|| {
    UnionSchema::named("FirewallResource", "type")
        .variant(
            "server",
            ObjectSchema::new()
                .required("server", Schema::reference(&RESOURCE_ID))
                .passthrough(),
        )
        .variant(
            "label_selector",
            ObjectSchema::new()
                .required("label_selector", Schema::reference(&LABEL_SELECTOR))
                .optional(
                    "applied_to_resources",
                    Schema::array(Schema::reference(&FIREWALL_APPLIED_TO_RESOURCE)),
                )
                .passthrough(),
        )
        .into()
});

pub static RESOURCE_ID_SPEC: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ResourceIdSpec")
        .required("id", Schema::integer())
        .into()
});

pub static LABEL_SELECTOR_SPEC: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("LabelSelectorSpec")
        .required("selector", Schema::string())
        .into()
});

/// Application target as sent by the caller.
pub static FIREWALL_RESOURCE_SPEC: LazyLock<Schema> = LazyLock::new(|| {
    UnionSchema::named("FirewallResourceSpec", "type")
        .variant(
            "server",
            ObjectSchema::new().required("server", Schema::reference(&RESOURCE_ID_SPEC)),
        )
        .variant(
            "label_selector",
            ObjectSchema::new()
                .required("label_selector", Schema::reference(&LABEL_SELECTOR_SPEC)),
        )
        .into()
});

pub static FIREWALL: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("Firewall")
        .required("id", Schema::integer())
        .required("name", Schema::string())
        .required("labels", labels())
        .required("created", Schema::string())
        .optional("rules", Schema::array(Schema::reference(&FIREWALL_RULE)))
        .optional(
            "applied_to",
            Schema::array(Schema::reference(&FIREWALL_RESOURCE)),
        )
        .passthrough()
        .into()
});

pub static LIST_FIREWALLS_QUERY: LazyLock<Schema> = LazyLock::new(|| {
    list_query("ListFirewallsQuery")
        .optional("name", Schema::string())
        .optional("label_selector", Schema::string())
        .into()
});

pub static CREATE_FIREWALL_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("CreateFirewallBody")
        .required("name", Schema::string())
        .optional("labels", labels())
        .optional("rules", Schema::array(Schema::reference(&FIREWALL_RULE_SPEC)))
        .optional(
            "apply_to",
            Schema::array(Schema::reference(&FIREWALL_RESOURCE_SPEC)),
        )
        .into()
});

pub static UPDATE_FIREWALL_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("UpdateFirewallBody")
        .optional("name", Schema::string())
        .optional("labels", labels())
        .into()
});

pub static SET_FIREWALL_RULES_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("SetFirewallRulesBody")
        .required("rules", Schema::array(Schema::reference(&FIREWALL_RULE_SPEC)))
        .into()
});

pub static APPLY_FIREWALL_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("ApplyFirewallBody")
        .required(
            "apply_to",
            Schema::array(Schema::reference(&FIREWALL_RESOURCE_SPEC)),
        )
        .into()
});

pub static REMOVE_FIREWALL_BODY: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("RemoveFirewallBody")
        .required(
            "remove_from",
            Schema::array(Schema::reference(&FIREWALL_RESOURCE_SPEC)),
        )
        .into()
});

pub static LIST_FIREWALLS_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| collection("ListFirewallsResponse", "firewalls", &FIREWALL));

pub static FIREWALL_RESPONSE: LazyLock<Schema> =
    LazyLock::new(|| entity("FirewallResponse", "firewall", &FIREWALL));

/// `{ firewall: Firewall, actions: [Action] }`
pub static CREATE_FIREWALL_RESPONSE: LazyLock<Schema> = LazyLock::new(|| {
    ObjectSchema::named("CreateFirewallResponse")
        .required("firewall", Schema::reference(&FIREWALL))
        .required("actions", Schema::array(Schema::reference(&ACTION)))
        .passthrough()
        .into()
});
