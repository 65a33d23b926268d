//! Core types for REST API definitions.
//!
//! This module provides the fundamental types for defining REST APIs:
//!
//! - [`RestApi`] - The top-level API definition
//! - [`Endpoint`] - Individual API endpoint definitions
//! - [`RestMethod`] - HTTP method enumeration

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::auth::AuthStrategy;
use crate::response::ApiResponse;
use crate::schema::SchemaRef;

/// HTTP methods supported by REST APIs.
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use schematic_define::RestMethod;
///
/// let method = RestMethod::from_str("GET").unwrap();
/// assert_eq!(method, RestMethod::Get);
/// ```
///
/// Display as uppercase:
///
/// ```
/// use schematic_define::RestMethod;
///
/// assert_eq!(RestMethod::Post.to_string(), "POST");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource or trigger an action
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

impl RestMethod {
    /// Returns `true` if this method is safe (read-only).
    ///
    /// A failed call using a safe method never leaves upstream state changed.
    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Get | Self::Head | Self::Options)
    }
}

/// A complete REST API definition.
///
/// ## Examples
///
/// ```
/// use schematic_define::{RestApi, AuthStrategy};
///
/// let api = RestApi {
///     name: "SimpleApi".to_string(),
///     description: "A simple REST API".to_string(),
///     base_url: "https://api.example.com/v1".to_string(),
///     docs_url: None,
///     auth: AuthStrategy::None,
///     env_auth: vec![],
///     headers: vec![],
///     endpoints: vec![],
///     module_path: None,
/// };
///
/// assert_eq!(api.name, "SimpleApi");
/// assert!(api.resources().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RestApi {
    /// Unique identifier for this API; becomes the generated client struct name.
    pub name: String,
    /// Human-readable description of the API.
    pub description: String,
    /// Base URL for all endpoints (e.g., `https://api.hetzner.cloud/v1`).
    pub base_url: String,
    /// Link to API documentation (optional).
    pub docs_url: Option<String>,
    /// Authentication strategy for this API.
    pub auth: AuthStrategy,
    /// Environment variable names for the credential.
    ///
    /// A fallback chain: the first variable that is set is used.
    pub env_auth: Vec<String>,
    /// Default HTTP headers to include with every request.
    pub headers: Vec<(String, String)>,
    /// All endpoints defined for this API.
    pub endpoints: Vec<Endpoint>,
    /// Module inside `schematic-definitions` that holds the registry statics.
    ///
    /// Falls back to the lowercased API name.
    pub module_path: Option<String>,
}

impl RestApi {
    /// Returns the resource names in first-seen order.
    pub fn resources(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for endpoint in &self.endpoints {
            if !seen.contains(&endpoint.resource.as_str()) {
                seen.push(endpoint.resource.as_str());
            }
        }
        seen
    }

    /// Returns the endpoints belonging to `resource`.
    pub fn endpoints_for<'a>(&'a self, resource: &'a str) -> impl Iterator<Item = &'a Endpoint> {
        self.endpoints.iter().filter(move |e| e.resource == resource)
    }

    /// Finds an endpoint by its identifier.
    pub fn endpoint(&self, id: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.id == id)
    }

    /// Returns the registry module name.
    pub fn module(&self) -> String {
        self.module_path
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase())
    }
}

/// A single API endpoint definition.
///
/// Paths support template parameters using curly braces: `/firewalls/{id}`.
/// These become fields in the generated request struct.
///
/// ## Examples
///
/// ```
/// use std::sync::LazyLock;
/// use schematic_define::{ApiResponse, Endpoint, ObjectSchema, RestMethod, Schema};
///
/// static GET_USER_RESPONSE: LazyLock<Schema> = LazyLock::new(|| {
///     ObjectSchema::named("GetUserResponse").passthrough().into()
/// });
///
/// let endpoint = Endpoint {
///     id: "GetUser".to_string(),
///     resource: "users".to_string(),
///     operation: "get".to_string(),
///     method: RestMethod::Get,
///     path: "/users/{id}".to_string(),
///     description: "Retrieve a user by ID".to_string(),
///     query: None,
///     request: None,
///     response: ApiResponse::json(&GET_USER_RESPONSE),
/// };
///
/// assert_eq!(endpoint.context(), "users.get");
/// ```
#[derive(Debug, Clone)]
pub struct Endpoint {
    /// Identifier for this endpoint (becomes the request struct name).
    ///
    /// Should be PascalCase (e.g., "ListFirewalls", "CreateServer").
    pub id: String,
    /// Resource group (e.g., "firewalls"); one generated client per group.
    pub resource: String,
    /// Operation name inside the resource group (e.g., "list").
    pub operation: String,
    /// HTTP method for this endpoint.
    pub method: RestMethod,
    /// Path template (e.g., "/firewalls/{id}").
    pub path: String,
    /// Human-readable description of what this endpoint does.
    pub description: String,
    /// Strict schema for query parameters.
    pub query: Option<SchemaRef>,
    /// Strict schema for the JSON request body.
    pub request: Option<SchemaRef>,
    /// Expected response.
    pub response: ApiResponse,
}

impl Endpoint {
    /// Returns the label used in diagnostics, e.g. `firewalls.create`.
    pub fn context(&self) -> String {
        format!("{}.{}", self.resource, self.operation)
    }

    /// Extracts parameter names from the path template.
    ///
    /// ## Examples
    ///
    /// ```
    /// use schematic_define::{ApiResponse, Endpoint, RestMethod};
    ///
    /// let endpoint = Endpoint {
    ///     id: "SetFirewallRules".to_string(),
    ///     resource: "firewalls".to_string(),
    ///     operation: "set_rules".to_string(),
    ///     method: RestMethod::Post,
    ///     path: "/firewalls/{id}/actions/set_rules".to_string(),
    ///     description: String::new(),
    ///     query: None,
    ///     request: None,
    ///     response: ApiResponse::Empty,
    /// };
    /// assert_eq!(endpoint.path_params(), vec!["id"]);
    /// ```
    pub fn path_params(&self) -> Vec<&str> {
        extract_path_params(&self.path)
    }
}

/// Extracts `{param}` names from a path template, in order of appearance.
pub fn extract_path_params(path: &str) -> Vec<&str> {
    let mut params = Vec::new();
    let mut pos = 0;

    for (idx, c) in path.char_indices() {
        if c == '{' {
            pos = idx + 1; // Start after '{'
        } else if c == '}' && pos > 0 {
            let param = &path[pos..idx];
            if !param.is_empty() {
                params.push(param);
            }
            pos = 0;
        }
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    fn endpoint(id: &str, resource: &str) -> Endpoint {
        Endpoint {
            id: id.to_string(),
            resource: resource.to_string(),
            operation: "list".to_string(),
            method: RestMethod::Get,
            path: format!("/{resource}"),
            description: String::new(),
            query: None,
            request: None,
            response: ApiResponse::Empty,
        }
    }

    fn api(endpoints: Vec<Endpoint>) -> RestApi {
        RestApi {
            name: "Hcloud".to_string(),
            description: String::new(),
            base_url: "https://api.example.com".to_string(),
            docs_url: None,
            auth: AuthStrategy::None,
            env_auth: vec![],
            headers: vec![],
            endpoints,
            module_path: None,
        }
    }

    #[test]
    fn rest_method_display_uppercase() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!(RestMethod::Put.to_string(), "PUT");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn rest_method_from_str_invalid() {
        assert!(RestMethod::from_str("INVALID").is_err());
        assert!(RestMethod::from_str("get").is_err()); // Case-sensitive
        assert!(RestMethod::from_str("").is_err());
    }

    #[test]
    fn rest_method_iter_all_variants() {
        assert_eq!(RestMethod::iter().count(), 7);
    }

    #[test]
    fn rest_method_safety() {
        assert!(RestMethod::Get.is_safe());
        assert!(!RestMethod::Post.is_safe());
        assert!(!RestMethod::Put.is_safe());
        assert!(!RestMethod::Delete.is_safe());
    }

    #[test]
    fn rest_method_serde_roundtrip() {
        let serialized = serde_json::to_string(&RestMethod::Post).unwrap();
        assert_eq!(serialized, "\"POST\"");

        let deserialized: RestMethod = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, RestMethod::Post);
    }

    #[test]
    fn resources_are_unique_in_first_seen_order() {
        let api = api(vec![
            endpoint("ListServers", "servers"),
            endpoint("ListFirewalls", "firewalls"),
            endpoint("GetServer", "servers"),
        ]);
        assert_eq!(api.resources(), vec!["servers", "firewalls"]);
        assert_eq!(api.endpoints_for("servers").count(), 2);
        assert!(api.endpoint("GetServer").is_some());
    }

    #[test]
    fn module_falls_back_to_lowercase_name() {
        let mut api = api(vec![]);
        assert_eq!(api.module(), "hcloud");
        api.module_path = Some("cloud".to_string());
        assert_eq!(api.module(), "cloud");
    }

    #[test]
    fn extract_no_params() {
        assert_eq!(extract_path_params("/servers"), Vec::<&str>::new());
        assert_eq!(extract_path_params("/"), Vec::<&str>::new());
    }

    #[test]
    fn extract_multiple_params() {
        assert_eq!(
            extract_path_params("/networks/{id}/actions/{action_id}"),
            vec!["id", "action_id"]
        );
        assert_eq!(extract_path_params("/{a}/{b}"), vec!["a", "b"]);
    }

    #[test]
    fn extract_ignores_empty_braces() {
        assert_eq!(extract_path_params("/servers/{}"), Vec::<&str>::new());
    }

    #[test]
    fn context_joins_resource_and_operation() {
        assert_eq!(endpoint("ListServers", "servers").context(), "servers.list");
    }
}
