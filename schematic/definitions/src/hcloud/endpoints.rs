//! Endpoint table for the cloud API.

use schematic_define::prelude::*;

use super::*;

fn endpoint(
    id: &str,
    resource: &str,
    operation: &str,
    method: RestMethod,
    path: &str,
    description: &str,
) -> Endpoint {
    Endpoint {
        id: id.to_string(),
        resource: resource.to_string(),
        operation: operation.to_string(),
        method,
        path: path.to_string(),
        description: description.to_string(),
        query: None,
        request: None,
        response: ApiResponse::Empty,
    }
}

fn actions() -> Vec<Endpoint> {
    vec![
        Endpoint {
            query: Some(&LIST_ACTIONS_QUERY),
            response: ApiResponse::json(&LIST_ACTIONS_RESPONSE),
            ..endpoint("ListActions", "actions", "list", RestMethod::Get, "/actions", "List actions")
        },
        Endpoint {
            response: ApiResponse::json(&ACTION_RESPONSE),
            ..endpoint("GetAction", "actions", "get", RestMethod::Get, "/actions/{id}", "Get an action")
        },
    ]
}

fn firewalls() -> Vec<Endpoint> {
    use RestMethod::*;
    vec![
        Endpoint {
            query: Some(&LIST_FIREWALLS_QUERY),
            response: ApiResponse::json(&LIST_FIREWALLS_RESPONSE),
            ..endpoint("ListFirewalls", "firewalls", "list", Get, "/firewalls", "List firewalls")
        },
        Endpoint {
            response: ApiResponse::json(&FIREWALL_RESPONSE),
            ..endpoint("GetFirewall", "firewalls", "get", Get, "/firewalls/{id}", "Get a firewall")
        },
        Endpoint {
            request: Some(&CREATE_FIREWALL_BODY),
            response: ApiResponse::json(&CREATE_FIREWALL_RESPONSE),
            ..endpoint("CreateFirewall", "firewalls", "create", Post, "/firewalls", "Create a firewall")
        },
        Endpoint {
            request: Some(&UPDATE_FIREWALL_BODY),
            response: ApiResponse::json(&FIREWALL_RESPONSE),
            ..endpoint(
                "UpdateFirewall",
                "firewalls",
                "update",
                Put,
                "/firewalls/{id}",
                "Update a firewall's name or labels",
            )
        },
        endpoint("DeleteFirewall", "firewalls", "delete", Delete, "/firewalls/{id}", "Delete a firewall"),
        Endpoint {
            request: Some(&SET_FIREWALL_RULES_BODY),
            response: ApiResponse::json(&LIST_ACTIONS_RESPONSE),
            ..endpoint(
                "SetFirewallRules",
                "firewalls",
                "set_rules",
                Post,
                "/firewalls/{id}/actions/set_rules",
                "Replace all rules of a firewall",
            )
        },
        Endpoint {
            request: Some(&APPLY_FIREWALL_BODY),
            response: ApiResponse::json(&LIST_ACTIONS_RESPONSE),
            ..endpoint(
                "ApplyFirewallToResources",
                "firewalls",
                "apply_to_resources",
                Post,
                "/firewalls/{id}/actions/apply_to_resources",
                "Apply a firewall to servers or label selectors",
            )
        },
        Endpoint {
            request: Some(&REMOVE_FIREWALL_BODY),
            response: ApiResponse::json(&LIST_ACTIONS_RESPONSE),
            ..endpoint(
                "RemoveFirewallFromResources",
                "firewalls",
                "remove_from_resources",
                Post,
                "/firewalls/{id}/actions/remove_from_resources",
                "Remove a firewall from servers or label selectors",
            )
        },
    ]
}

/// The read-only `list` + `get` pair most catalogue resources expose.
fn catalogue(
    resource: &str,
    singular: &str,
    query: SchemaRef,
    list: SchemaRef,
    get: SchemaRef,
) -> Vec<Endpoint> {
    let pascal_plural = pascal(resource);
    let pascal_singular = pascal(singular);
    vec![
        Endpoint {
            query: Some(query),
            response: ApiResponse::json(list),
            ..endpoint(
                &format!("List{pascal_plural}"),
                resource,
                "list",
                RestMethod::Get,
                &format!("/{resource}"),
                &format!("List {}", resource.replace('_', " ")),
            )
        },
        Endpoint {
            response: ApiResponse::json(get),
            ..endpoint(
                &format!("Get{pascal_singular}"),
                resource,
                "get",
                RestMethod::Get,
                &format!("/{resource}/{{id}}"),
                &format!("Get a {}", singular.replace('_', " ")),
            )
        },
    ]
}

fn pascal(snake: &str) -> String {
    snake
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

fn networks() -> Vec<Endpoint> {
    use RestMethod::*;
    vec![
        Endpoint {
            query: Some(&LIST_NETWORKS_QUERY),
            response: ApiResponse::json(&LIST_NETWORKS_RESPONSE),
            ..endpoint("ListNetworks", "networks", "list", Get, "/networks", "List networks")
        },
        Endpoint {
            response: ApiResponse::json(&NETWORK_RESPONSE),
            ..endpoint("GetNetwork", "networks", "get", Get, "/networks/{id}", "Get a network")
        },
        Endpoint {
            request: Some(&CREATE_NETWORK_BODY),
            response: ApiResponse::json(&CREATE_NETWORK_RESPONSE),
            ..endpoint("CreateNetwork", "networks", "create", Post, "/networks", "Create a network")
        },
        Endpoint {
            request: Some(&UPDATE_NETWORK_BODY),
            response: ApiResponse::json(&NETWORK_RESPONSE),
            ..endpoint("UpdateNetwork", "networks", "update", Put, "/networks/{id}", "Update a network")
        },
        endpoint("DeleteNetwork", "networks", "delete", Delete, "/networks/{id}", "Delete a network"),
    ]
}

fn pricing() -> Vec<Endpoint> {
    vec![Endpoint {
        response: ApiResponse::json(&PRICING_RESPONSE),
        ..endpoint("GetPricing", "pricing", "get", RestMethod::Get, "/pricing", "Get all prices")
    }]
}

fn servers() -> Vec<Endpoint> {
    use RestMethod::*;

    let action = |id: &str, operation: &str, path_action: &str, description: &str| Endpoint {
        response: ApiResponse::json(&ACTION_RESPONSE),
        ..endpoint(
            id,
            "servers",
            operation,
            Post,
            &format!("/servers/{{id}}/actions/{path_action}"),
            description,
        )
    };

    vec![
        Endpoint {
            query: Some(&LIST_SERVERS_QUERY),
            response: ApiResponse::json(&LIST_SERVERS_RESPONSE),
            ..endpoint("ListServers", "servers", "list", Get, "/servers", "List servers")
        },
        Endpoint {
            response: ApiResponse::json(&SERVER_RESPONSE),
            ..endpoint("GetServer", "servers", "get", Get, "/servers/{id}", "Get a server")
        },
        Endpoint {
            request: Some(&CREATE_SERVER_BODY),
            response: ApiResponse::json(&CREATE_SERVER_RESPONSE),
            ..endpoint("CreateServer", "servers", "create", Post, "/servers", "Create a server")
        },
        Endpoint {
            request: Some(&UPDATE_SERVER_BODY),
            response: ApiResponse::json(&UPDATE_SERVER_RESPONSE),
            ..endpoint("UpdateServer", "servers", "update", Put, "/servers/{id}", "Update a server")
        },
        Endpoint {
            response: ApiResponse::json(&ACTION_RESPONSE),
            ..endpoint("DeleteServer", "servers", "delete", Delete, "/servers/{id}", "Delete a server")
        },
        action("PowerOnServer", "power_on", "poweron", "Power on a server"),
        action("PowerOffServer", "power_off", "poweroff", "Cut power to a server"),
        action("RebootServer", "reboot", "reboot", "Hard-reset a server"),
        Endpoint {
            request: Some(&ATTACH_ISO_BODY),
            ..action("AttachIsoToServer", "attach_iso", "attach_iso", "Attach an ISO to a server")
        },
        action("DetachIsoFromServer", "detach_iso", "detach_iso", "Detach the ISO from a server"),
        Endpoint {
            request: Some(&CHANGE_SERVER_PROTECTION_BODY),
            ..action(
                "ChangeServerProtection",
                "change_protection",
                "change_protection",
                "Change the protection flags of a server",
            )
        },
    ]
}

/// Creates the cloud API definition.
///
/// ## Examples
///
/// ```rust
/// use schematic_definitions::hcloud::define_hcloud_api;
///
/// let api = define_hcloud_api();
/// assert_eq!(api.name, "Hcloud");
/// assert!(api.endpoint("SetFirewallRules").is_some());
/// ```
pub fn define_hcloud_api() -> RestApi {
    let endpoints = [
        actions(),
        firewalls(),
        catalogue("isos", "iso", &LIST_ISOS_QUERY, &LIST_ISOS_RESPONSE, &ISO_RESPONSE),
        catalogue(
            "locations",
            "location",
            &LIST_LOCATIONS_QUERY,
            &LIST_LOCATIONS_RESPONSE,
            &LOCATION_RESPONSE,
        ),
        catalogue(
            "datacenters",
            "datacenter",
            &LIST_DATACENTERS_QUERY,
            &LIST_DATACENTERS_RESPONSE,
            &DATACENTER_RESPONSE,
        ),
        networks(),
        pricing(),
        catalogue(
            "server_types",
            "server_type",
            &LIST_SERVER_TYPES_QUERY,
            &LIST_SERVER_TYPES_RESPONSE,
            &SERVER_TYPE_RESPONSE,
        ),
        servers(),
    ]
    .into_iter()
    .flatten()
    .collect();

    RestApi {
        name: "Hcloud".to_string(),
        description: "Hetzner Cloud REST API".to_string(),
        base_url: "https://api.hetzner.cloud/v1".to_string(),
        docs_url: Some("https://docs.hetzner.cloud".to_string()),
        auth: AuthStrategy::BearerToken { header: None },
        env_auth: vec!["HCLOUD_TOKEN".to_string()],
        headers: vec![],
        endpoints,
        module_path: Some("hcloud".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_has_correct_metadata() {
        let api = define_hcloud_api();

        assert_eq!(api.name, "Hcloud");
        assert_eq!(api.base_url, "https://api.hetzner.cloud/v1");
        assert_eq!(api.env_auth, vec!["HCLOUD_TOKEN"]);
        assert_eq!(api.module(), "hcloud");
    }

    #[test]
    fn api_uses_bearer_auth() {
        let api = define_hcloud_api();
        match &api.auth {
            AuthStrategy::BearerToken { header } => assert!(header.is_none()),
            _ => panic!("Expected BearerToken auth strategy"),
        }
    }

    #[test]
    fn every_resource_has_its_operations() {
        let api = define_hcloud_api();
        let ops = |resource: &str| -> Vec<String> {
            api.endpoints_for(resource)
                .map(|e| e.operation.clone())
                .collect()
        };

        assert_eq!(ops("actions"), vec!["list", "get"]);
        assert_eq!(
            ops("firewalls"),
            vec![
                "list",
                "get",
                "create",
                "update",
                "delete",
                "set_rules",
                "apply_to_resources",
                "remove_from_resources"
            ]
        );
        assert_eq!(ops("isos"), vec!["list", "get"]);
        assert_eq!(ops("locations"), vec!["list", "get"]);
        assert_eq!(ops("datacenters"), vec!["list", "get"]);
        assert_eq!(ops("networks"), vec!["list", "get", "create", "update", "delete"]);
        assert_eq!(ops("pricing"), vec!["get"]);
        assert_eq!(ops("server_types"), vec!["list", "get"]);
        assert_eq!(
            ops("servers"),
            vec![
                "list",
                "get",
                "create",
                "update",
                "delete",
                "power_on",
                "power_off",
                "reboot",
                "attach_iso",
                "detach_iso",
                "change_protection"
            ]
        );
    }

    #[test]
    fn endpoint_ids_are_unique() {
        let api = define_hcloud_api();
        let mut ids: Vec<_> = api.endpoints.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn catalogue_endpoints_use_resource_paths() {
        let api = define_hcloud_api();
        let get = api.endpoint("GetServerType").unwrap();
        assert_eq!(get.path, "/server_types/{id}");
        assert_eq!(get.path_params(), vec!["id"]);
        assert_eq!(api.endpoint("ListServerTypes").unwrap().path, "/server_types");
    }

    #[test]
    fn every_list_endpoint_returns_a_collection_with_meta() {
        let api = define_hcloud_api();
        for endpoint in api.endpoints.iter().filter(|e| e.operation == "list") {
            let schema = endpoint.response.schema().unwrap();
            let Schema::Object(envelope) = schema.resolve() else {
                panic!("{} envelope is not an object", endpoint.id);
            };
            assert!(
                envelope.field("meta").is_some_and(|f| !f.required),
                "{} lacks optional meta",
                endpoint.id
            );
            assert!(endpoint.query.is_some(), "{} has no query schema", endpoint.id);
        }
    }

    #[test]
    fn request_schemas_are_strict() {
        let api = define_hcloud_api();
        for endpoint in &api.endpoints {
            for schema in [endpoint.query, endpoint.request].into_iter().flatten() {
                let Schema::Object(object) = schema.resolve() else {
                    panic!("{} payload is not an object", endpoint.id);
                };
                assert!(!object.is_passthrough(), "{} payload is permissive", endpoint.id);
            }
        }
    }

    #[test]
    fn deletes_of_firewalls_and_networks_have_no_body() {
        let api = define_hcloud_api();
        assert!(api.endpoint("DeleteFirewall").unwrap().response.is_empty());
        assert!(api.endpoint("DeleteNetwork").unwrap().response.is_empty());
        assert!(api.endpoint("DeleteServer").unwrap().response.is_json());
    }

    #[test]
    fn pascal_joins_snake_case_parts() {
        assert_eq!(pascal("server_types"), "ServerTypes");
        assert_eq!(pascal("isos"), "Isos");
    }
}
