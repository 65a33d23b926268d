//! Output assembly and file writing for generated code.
//!
//! All generated pieces for one API land in a single `{module}.rs` file,
//! meant to be pulled into the consuming crate with `include!`. The file
//! therefore carries no inner attributes or module docs.
//!
//! ## Safety Guarantees
//!
//! - **Validation**: All generated code is validated with `syn` before writing
//! - **Formatting**: Output is formatted with `prettyplease` for consistent style
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;
use quote::quote;
use schematic_define::{RestApi, SchemaRef};
use tracing::{debug, info};

use crate::codegen::{
    TypeProjection, generate_api_struct, generate_request_struct, generate_resource_clients,
};
use crate::errors::GeneratorError;

/// Assembles the complete client code for `api`.
///
/// `registry` lists every schema the API's types are projected from; its
/// statics must live in `schematic_definitions::{api.module()}`.
///
/// ## Errors
///
/// Returns an error if a type cannot be projected or an endpoint refers to
/// a schema missing from `registry`.
pub fn assemble_api_module(
    api: &RestApi,
    registry: &[(&'static str, SchemaRef)],
) -> Result<TokenStream, GeneratorError> {
    let module = api.module();
    debug!(api = %api.name, %module, schemas = registry.len(), "projecting types");
    let types = TypeProjection::new(&module, registry).project()?;

    debug!(endpoints = api.endpoints.len(), "generating request structs");
    let requests = api
        .endpoints
        .iter()
        .map(|endpoint| generate_request_struct(endpoint, registry))
        .collect::<Result<Vec<_>, _>>()?;

    let clients = generate_resource_clients(api, registry)?;
    let api_struct = generate_api_struct(api);

    Ok(quote! {
        #types

        #(#requests)*

        #clients

        #api_struct
    })
}

/// Validates that the generated code is syntactically correct Rust.
///
/// ## Errors
///
/// Returns `GeneratorError::CodeGenError` if the code fails to parse.
pub fn validate_code(tokens: &TokenStream) -> Result<syn::File, GeneratorError> {
    syn::parse2(tokens.clone())
        .map_err(|e| GeneratorError::CodeGenError(format!("Generated code is invalid: {}", e)))
}

/// Formats generated code using prettyplease.
///
/// Prepends an auto-generated notice as a regular comment.
pub fn format_code(file: &syn::File) -> String {
    let formatted = prettyplease::unparse(file);
    format!(
        "// This code was automatically generated by schematic-gen. Do not edit manually.\n\n{}",
        formatted
    )
}

/// Writes content to a file atomically using temp file + rename.
///
/// ## Errors
///
/// Returns `GeneratorError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), GeneratorError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GeneratorError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| GeneratorError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| GeneratorError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Generates, validates and formats the client code for `api`.
///
/// ## Errors
///
/// Returns an error if generation fails or produces invalid Rust.
pub fn generate_to_string(
    api: &RestApi,
    registry: &[(&'static str, SchemaRef)],
) -> Result<String, GeneratorError> {
    let tokens = assemble_api_module(api, registry)?;
    let file = validate_code(&tokens)?;
    Ok(format_code(&file))
}

/// Returns the file the code for `api` is written to inside `output_dir`.
pub fn output_path(api: &RestApi, output_dir: &Path) -> PathBuf {
    output_dir.join(format!("{}.rs", api.module()))
}

/// Generates the client code for `api` and writes it to `{output_dir}/{module}.rs`.
///
/// With `dry_run` set, nothing is written.
///
/// ## Returns
///
/// The formatted code.
///
/// ## Errors
///
/// Returns an error if:
/// - Code generation produces invalid Rust
/// - File writing fails
pub fn generate_and_write(
    api: &RestApi,
    registry: &[(&'static str, SchemaRef)],
    output_dir: &Path,
    dry_run: bool,
) -> Result<String, GeneratorError> {
    let code = generate_to_string(api, registry)?;

    if dry_run {
        debug!(bytes = code.len(), "dry run, nothing written");
    } else {
        let path = output_path(api, output_dir);
        write_atomic(&path, &code)?;
        info!(path = %path.display(), "generated client written");
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;

    use schematic_define::{ApiResponse, AuthStrategy, Endpoint, ObjectSchema, RestMethod, Schema};
    use tempfile::TempDir;

    use super::*;

    static ITEM: LazyLock<Schema> = LazyLock::new(|| {
        ObjectSchema::named("Item")
            .required("id", Schema::integer())
            .passthrough()
            .into()
    });

    static ITEM_RESPONSE: LazyLock<Schema> = LazyLock::new(|| {
        ObjectSchema::named("ItemResponse")
            .required("item", Schema::reference(&ITEM))
            .passthrough()
            .into()
    });

    static CREATE_ITEM_BODY: LazyLock<Schema> = LazyLock::new(|| {
        ObjectSchema::named("CreateItemBody")
            .required("name", Schema::string())
            .into()
    });

    fn registry() -> Vec<(&'static str, SchemaRef)> {
        vec![
            ("ITEM", &ITEM),
            ("ITEM_RESPONSE", &ITEM_RESPONSE),
            ("CREATE_ITEM_BODY", &CREATE_ITEM_BODY),
        ]
    }

    fn make_api() -> RestApi {
        RestApi {
            name: "Shop".to_string(),
            description: "Shop API".to_string(),
            base_url: "https://shop.example.com".to_string(),
            docs_url: None,
            auth: AuthStrategy::None,
            env_auth: vec![],
            headers: vec![],
            endpoints: vec![
                Endpoint {
                    id: "CreateItem".to_string(),
                    resource: "items".to_string(),
                    operation: "create".to_string(),
                    method: RestMethod::Post,
                    path: "/items".to_string(),
                    description: "Create an item".to_string(),
                    query: None,
                    request: Some(&CREATE_ITEM_BODY),
                    response: ApiResponse::json(&ITEM_RESPONSE),
                },
                Endpoint {
                    id: "DeleteItem".to_string(),
                    resource: "items".to_string(),
                    operation: "delete".to_string(),
                    method: RestMethod::Delete,
                    path: "/items/{id}".to_string(),
                    description: "Delete an item".to_string(),
                    query: None,
                    request: None,
                    response: ApiResponse::Empty,
                },
            ],
            module_path: None,
        }
    }

    // ===== assembly =====

    #[test]
    fn assembled_module_is_valid_rust() {
        let tokens = assemble_api_module(&make_api(), &registry()).unwrap();
        assert!(validate_code(&tokens).is_ok());
    }

    #[test]
    fn assembled_module_includes_all_components() {
        let code = generate_to_string(&make_api(), &registry()).unwrap();

        assert!(code.contains("pub struct Item {"), "{code}");
        assert!(code.contains("pub struct ItemResponse {"), "{code}");
        assert!(code.contains("pub struct CreateItemBody {"), "{code}");
        assert!(code.contains("pub struct CreateItemRequest {"), "{code}");
        assert!(code.contains("pub struct DeleteItemRequest {"), "{code}");
        assert!(code.contains("pub struct ItemsClient<'a>"), "{code}");
        assert!(code.contains("pub struct Shop {"), "{code}");
        assert!(code.contains("::schematic_definitions::shop::ITEM"), "{code}");
    }

    #[test]
    fn assembled_module_has_no_inner_attributes() {
        let code = generate_to_string(&make_api(), &registry()).unwrap();
        assert!(!code.contains("//!"), "{code}");
        assert!(!code.contains("#!["), "{code}");
        assert!(code.starts_with("// This code was automatically generated"));
    }

    #[test]
    fn unregistered_response_fails_assembly() {
        let registry: Vec<(&'static str, SchemaRef)> =
            vec![("ITEM", &ITEM), ("CREATE_ITEM_BODY", &CREATE_ITEM_BODY)];
        let err = assemble_api_module(&make_api(), &registry).unwrap_err();
        assert!(matches!(err, GeneratorError::UnknownReference { .. }));
    }

    // ===== validate_code =====

    #[test]
    fn validate_code_rejects_invalid_code() {
        let invalid = quote! { pub struct { } };
        let result = validate_code(&invalid);
        assert!(matches!(result, Err(GeneratorError::CodeGenError(_))));
    }

    #[test]
    fn format_code_produces_readable_output() {
        let tokens = quote! { pub struct Foo { pub bar: String } };
        let code = format_code(&validate_code(&tokens).unwrap());
        assert!(code.contains("pub struct Foo {\n    pub bar: String,\n}"), "{code}");
    }

    // ===== write_atomic =====

    #[test]
    fn write_atomic_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested/deep/test.rs");

        write_atomic(&file_path, "// Nested content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// Nested content");
    }

    #[test]
    fn write_atomic_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("existing.rs");
        fs::write(&file_path, "// Old content").unwrap();

        write_atomic(&file_path, "// New content").unwrap();

        assert_eq!(fs::read_to_string(&file_path).unwrap(), "// New content");
        assert!(!file_path.with_extension("tmp").exists());
    }

    // ===== generate_and_write =====

    #[test]
    fn dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let code = generate_and_write(&make_api(), &registry(), temp_dir.path(), true).unwrap();

        assert!(code.contains("pub struct Shop"));
        assert!(!output_path(&make_api(), temp_dir.path()).exists());
    }

    #[test]
    fn written_file_matches_returned_code() {
        let temp_dir = TempDir::new().unwrap();
        let api = make_api();
        let code = generate_and_write(&api, &registry(), temp_dir.path(), false).unwrap();

        let path = output_path(&api, temp_dir.path());
        assert!(path.ends_with("shop.rs"));
        assert_eq!(fs::read_to_string(path).unwrap(), code);
    }
}
