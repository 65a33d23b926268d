//! API struct generation.
//!
//! The API struct owns the shared `schematic::ClientCore` and hands out the
//! per-resource clients.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use schematic_define::RestApi;

use crate::codegen::client::resource_client_name;
use crate::naming::field_ident;

/// Generates the API struct for the given API definition.
///
/// ## Examples
///
/// For the cloud API:
/// ```ignore
/// /// Hetzner Cloud REST API client.
/// #[derive(Debug, Clone)]
/// pub struct Hcloud {
///     core: ::schematic::ClientCore,
/// }
///
/// impl Hcloud {
///     pub const BASE_URL: &'static str = "https://api.hetzner.cloud/v1";
///
///     pub fn new(config: &::schematic::ClientConfig) -> Result<Self, ::schematic::ApiError> { ... }
///     pub fn from_env() -> Result<Self, ::schematic::ApiError> { ... }
///     pub fn with_transport(transport: Arc<dyn ::schematic::Transport>) -> Self { ... }
///
///     pub fn firewalls(&self) -> FirewallsClient<'_> { ... }
/// }
/// ```
pub fn generate_api_struct(api: &RestApi) -> TokenStream {
    let struct_name = format_ident!("{}", api.name);
    let base_url = &api.base_url;
    let description = format!(" {} client.", api.description);
    let module = format_ident!("{}", api.module());
    let define_fn = format_ident!("define_{}_api", api.module());

    let docs_link = api
        .docs_url
        .as_ref()
        .map(|url| {
            let line = format!(" Upstream documentation: <{url}>");
            quote! {
                #[doc = ""]
                #[doc = #line]
            }
        })
        .unwrap_or_default();

    let accessors = api.resources().into_iter().map(|resource| {
        let method = field_ident(resource);
        let client = format_ident!("{}", resource_client_name(resource));
        let doc = format!(" Operations on `{resource}`.");
        quote! {
            #[doc = #doc]
            pub fn #method(&self) -> #client<'_> {
                #client { core: &self.core }
            }
        }
    });

    quote! {
        #[doc = #description]
        #docs_link
        #[derive(Debug, Clone)]
        pub struct #struct_name {
            core: ::schematic::ClientCore,
        }

        impl #struct_name {
            /// Default base URL.
            pub const BASE_URL: &'static str = #base_url;

            /// Creates a client over HTTP from `config`.
            ///
            /// ## Errors
            ///
            /// Returns an error if the configured headers are invalid or the
            /// HTTP client cannot be built.
            pub fn new(config: &::schematic::ClientConfig) -> Result<Self, ::schematic::ApiError> {
                let transport = ::schematic::HttpTransport::new(config)?;
                Ok(Self::with_transport(::std::sync::Arc::new(transport)))
            }

            /// Creates a client configured from the process environment.
            ///
            /// ## Errors
            ///
            /// Returns [`::schematic::ConfigError`] (wrapped) when the credential
            /// is missing or an override variable is malformed.
            pub fn from_env() -> Result<Self, ::schematic::ApiError> {
                let api = ::schematic_definitions::#module::#define_fn();
                let config = ::schematic::ClientConfig::from_env(&api)?;
                Self::new(&config)
            }

            /// Creates a client over a custom transport.
            pub fn with_transport(
                transport: ::std::sync::Arc<dyn ::schematic::Transport>,
            ) -> Self {
                Self {
                    core: ::schematic::ClientCore::new(transport),
                }
            }

            /// Returns the shared client core.
            pub fn core(&self) -> &::schematic::ClientCore {
                &self.core
            }

            #(#accessors)*
        }
    }
}
