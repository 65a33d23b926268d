//! Request struct generation for API endpoints.
//!
//! Each endpoint gets a `{Id}Request` struct holding its path parameters,
//! optional query and body, with `into_parts()` producing the
//! `schematic::RequestParts` the client core executes.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use schematic_define::{Endpoint, RestMethod, SchemaRef};

use crate::codegen::types::registered_name;
use crate::errors::GeneratorError;
use crate::naming::{field_ident, format_path};

/// Suffix appended to the endpoint id.
pub const REQUEST_SUFFIX: &str = "Request";

/// Returns the request struct name for `endpoint`.
pub fn request_struct_name(endpoint: &Endpoint) -> String {
    format!("{}{}", endpoint.id, REQUEST_SUFFIX)
}

/// Generates the request struct for `endpoint`.
///
/// ## Examples
///
/// For `POST /firewalls/{id}/actions/set_rules`:
///
/// ```ignore
/// /// Sets the rules of a firewall, replacing existing ones.
/// ///
/// /// `POST /firewalls/{id}/actions/set_rules`
/// #[derive(Debug, Clone, PartialEq)]
/// pub struct SetFirewallRulesRequest {
///     pub id: String,
///     pub body: SetFirewallRulesBody,
/// }
///
/// impl SetFirewallRulesRequest {
///     pub fn new(id: impl ToString, body: SetFirewallRulesBody) -> Self { ... }
///
///     pub fn into_parts(self) -> Result<::schematic::RequestParts, ::serde_json::Error> {
///         let path = format!("/firewalls/{}/actions/set_rules", self.id);
///         ...
///     }
/// }
/// ```
///
/// ## Errors
///
/// Returns an error if the endpoint's query or body schema is not a
/// registered, named schema.
pub fn generate_request_struct(
    endpoint: &Endpoint,
    registry: &[(&'static str, SchemaRef)],
) -> Result<TokenStream, GeneratorError> {
    let struct_name = format_ident!("{}", request_struct_name(endpoint));
    let (template, params) = format_path(&endpoint.path);
    let param_idents: Vec<_> = params.iter().map(|p| field_ident(p)).collect();

    let query_type = payload_type(registry, endpoint.query, endpoint, "query")?;
    let body_type = payload_type(registry, endpoint.request, endpoint, "body")?;

    let mut fields = vec![quote! { #(pub #param_idents: String,)* }];
    let mut new_args = vec![quote! { #(#param_idents: impl ToString),* }];
    let mut init = vec![quote! { #(#param_idents: #param_idents.to_string(),)* }];
    let mut builders = Vec::new();
    let mut attach = Vec::new();

    if let Some(query_type) = &query_type {
        fields.push(quote! {
            /// Query parameters; omitted from the URL when `None`.
            pub query: Option<#query_type>,
        });
        init.push(quote! { query: None, });
        builders.push(quote! {
            /// Sets the query parameters.
            pub fn with_query(mut self, query: #query_type) -> Self {
                self.query = Some(query);
                self
            }
        });
        attach.push(quote! {
            if let Some(query) = &self.query {
                parts = parts.with_query(::schematic::Payload::typed(query)?);
            }
        });
    }

    if let Some(body_type) = &body_type {
        fields.push(quote! { pub body: #body_type, });
        new_args.push(quote! { body: #body_type });
        init.push(quote! { body, });
        attach.push(quote! {
            parts = parts.with_body(::schematic::Payload::typed(&self.body)?);
        });
    }

    let new_args = new_args.into_iter().filter(|t| !t.is_empty());
    let derive_default = (params.is_empty() && body_type.is_none()).then(|| quote! { Default, });

    let path = if params.is_empty() {
        quote! { let path = String::from(#template); }
    } else {
        quote! { let path = format!(#template, #(self.#param_idents),*); }
    };
    let mutable = (!attach.is_empty()).then(|| quote! { mut });

    let context = endpoint.context();
    let method = format_ident!("{}", method_variant(endpoint.method));
    let docs = doc_lines(endpoint);

    Ok(quote! {
        #(#[doc = #docs])*
        #[derive(Debug, Clone, PartialEq, #derive_default)]
        pub struct #struct_name {
            #(#fields)*
        }

        impl #struct_name {
            /// Creates the request.
            pub fn new(#(#new_args),*) -> Self {
                Self {
                    #(#init)*
                }
            }

            #(#builders)*

            /// Encodes the request for the client core.
            ///
            /// ## Errors
            ///
            /// Returns the serde error if the query or body cannot be encoded.
            pub fn into_parts(self) -> Result<::schematic::RequestParts, ::serde_json::Error> {
                #path
                let #mutable parts = ::schematic::RequestParts::new(
                    #context,
                    ::schematic::schematic_define::RestMethod::#method,
                    path,
                );
                #(#attach)*
                Ok(parts)
            }
        }
    })
}

fn payload_type(
    registry: &[(&'static str, SchemaRef)],
    schema: Option<SchemaRef>,
    endpoint: &Endpoint,
    role: &str,
) -> Result<Option<proc_macro2::Ident>, GeneratorError> {
    schema
        .map(|schema| {
            let context = format!("{} {role}", endpoint.id);
            registered_name(registry, schema, &context).map(|name| format_ident!("{}", name))
        })
        .transpose()
}

/// Variant name of `RestMethod` as written in generated paths.
fn method_variant(method: RestMethod) -> &'static str {
    match method {
        RestMethod::Get => "Get",
        RestMethod::Post => "Post",
        RestMethod::Put => "Put",
        RestMethod::Patch => "Patch",
        RestMethod::Delete => "Delete",
        RestMethod::Head => "Head",
        RestMethod::Options => "Options",
    }
}

fn doc_lines(endpoint: &Endpoint) -> Vec<String> {
    let mut lines = Vec::new();
    if !endpoint.description.is_empty() {
        lines.push(format!(" {}", endpoint.description));
        lines.push(String::new());
    }
    lines.push(format!(" `{} {}`", endpoint.method, endpoint.path));
    lines
}
