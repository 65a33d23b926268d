//! Resource client generation.
//!
//! Each resource group of the API gets a borrowed client with one async
//! method per operation:
//!
//! ```ignore
//! impl<'a> FirewallsClient<'a> {
//!     pub async fn create(
//!         &self,
//!         request: CreateFirewallRequest,
//!     ) -> Result<CreateFirewallResponse, ::schematic::ApiError> {
//!         self.core.execute(request.into_parts()?).await
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use schematic_define::{Endpoint, RestApi, SchemaRef};

use crate::codegen::request_structs::request_struct_name;
use crate::codegen::types::registered_name;
use crate::errors::GeneratorError;
use crate::naming::{field_ident, pascal_case};

/// Returns the client struct name for `resource` (`server_types` → `ServerTypesClient`).
pub fn resource_client_name(resource: &str) -> String {
    format!("{}Client", pascal_case(resource))
}

/// Generates one client struct per resource of `api`.
///
/// ## Errors
///
/// Returns an error if a response schema is not registered, or two
/// operations of one resource share a method name.
pub fn generate_resource_clients(
    api: &RestApi,
    registry: &[(&'static str, SchemaRef)],
) -> Result<TokenStream, GeneratorError> {
    let mut clients = Vec::new();
    for resource in api.resources() {
        let endpoints: Vec<&Endpoint> = api.endpoints_for(resource).collect();
        clients.push(generate_resource_client(resource, &endpoints, registry)?);
    }
    Ok(quote! { #(#clients)* })
}

fn generate_resource_client(
    resource: &str,
    endpoints: &[&Endpoint],
    registry: &[(&'static str, SchemaRef)],
) -> Result<TokenStream, GeneratorError> {
    let client_name = format_ident!("{}", resource_client_name(resource));
    let doc = format!(" Operations on `{resource}`.");

    let mut seen: Vec<&str> = Vec::new();
    let mut methods = Vec::new();
    for endpoint in endpoints {
        if seen.contains(&endpoint.operation.as_str()) {
            return Err(GeneratorError::FieldCollision {
                type_name: resource_client_name(resource),
                field: endpoint.operation.clone(),
            });
        }
        seen.push(&endpoint.operation);
        methods.push(generate_operation(endpoint, registry)?);
    }

    Ok(quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy)]
        pub struct #client_name<'a> {
            core: &'a ::schematic::ClientCore,
        }

        impl<'a> #client_name<'a> {
            #(#methods)*
        }
    })
}

fn generate_operation(
    endpoint: &Endpoint,
    registry: &[(&'static str, SchemaRef)],
) -> Result<TokenStream, GeneratorError> {
    let method_name = field_ident(&endpoint.operation);
    let request_type = format_ident!("{}", request_struct_name(endpoint));
    let doc = format!(" {}", endpoint.description);
    let call = format!(" `{} {}`", endpoint.method, endpoint.path);

    let (output, execute) = match endpoint.response.schema() {
        Some(schema) => {
            let context = format!("{} response", endpoint.id);
            let name = format_ident!("{}", registered_name(registry, schema, &context)?);
            (quote! { #name }, quote! { execute })
        }
        None => (quote! { () }, quote! { execute_empty }),
    };

    Ok(quote! {
        #[doc = #doc]
        #[doc = ""]
        #[doc = #call]
        pub async fn #method_name(
            &self,
            request: #request_type,
        ) -> Result<#output, ::schematic::ApiError> {
            self.core.#execute(request.into_parts()?).await
        }
    })
}
