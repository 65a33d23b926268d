//! Projection of registry schemas into Rust types.
//!
//! Every registry entry becomes one Rust type with a `SchemaType` impl
//! pointing back at the static it came from:
//!
//! | Schema | Rust |
//! |--------|------|
//! | object | struct (`extra` bag when passthrough, `deny_unknown_fields` when strict) |
//! | enum | fieldless enum with `#[serde(rename)]` per value |
//! | union | `#[serde(tag = "...")]` enum over one struct per branch |
//! | string / integer / number / boolean / any | `String` / `i64` / `f64` / `bool` / `Value` |
//! | array / map | `Vec<T>` / `BTreeMap<String, T>` |
//!
//! Anonymous nested shapes are named after their parent and field
//! (`Datacenter.server_types` → `DatacenterServerTypes`); union branches after
//! the union and tag (`FirewallResourceLabelSelector`).
//!
//! Field presence maps as follows:
//!
//! - required → `T`
//! - required and nullable → `Option<T>`
//! - optional → `Option<T>`, omitted when `None`
//! - optional and nullable → `Option<Option<T>>` through `schematic::double_option`

use std::collections::BTreeMap;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use schematic_define::{EnumSchema, Field, ObjectSchema, Schema, SchemaRef, UnionSchema};

use crate::errors::GeneratorError;
use crate::naming::{field_ident, needs_rename, type_ident};

/// Field name reserved for undeclared keys on passthrough structs.
pub const EXTRA_FIELD: &str = "extra";

/// Generates Rust types for a schema registry.
///
/// ## Examples
///
/// ```
/// use std::sync::LazyLock;
/// use schematic_define::{ObjectSchema, Schema, SchemaRef};
/// use schematic_gen::codegen::TypeProjection;
///
/// static META: LazyLock<Schema> = LazyLock::new(|| {
///     ObjectSchema::named("Meta").required("page", Schema::integer()).passthrough().into()
/// });
///
/// let registry: Vec<(&'static str, SchemaRef)> = vec![("META", &META)];
/// let tokens = TypeProjection::new("hcloud", &registry).project().unwrap();
/// assert!(tokens.to_string().contains("pub struct Meta"));
/// ```
#[derive(Debug)]
pub struct TypeProjection<'r> {
    module: String,
    registry: &'r [(&'static str, SchemaRef)],
    /// Type name -> where it was declared.
    defined: BTreeMap<String, String>,
    items: Vec<TokenStream>,
}

impl<'r> TypeProjection<'r> {
    /// Creates a projection over `registry`, whose statics live in
    /// `schematic_definitions::{module}`.
    pub fn new(module: &str, registry: &'r [(&'static str, SchemaRef)]) -> Self {
        Self {
            module: module.to_string(),
            registry,
            defined: BTreeMap::new(),
            items: Vec::new(),
        }
    }

    /// Generates every registry type, in registry order.
    ///
    /// ## Errors
    ///
    /// Returns an error if an entry has no name, two shapes claim the same
    /// type name, a struct has colliding fields, or a reference points
    /// outside the registry.
    pub fn project(mut self) -> Result<TokenStream, GeneratorError> {
        for (ident, schema) in self.registry {
            let schema: &Schema = schema;
            let name = schema.name().ok_or_else(|| GeneratorError::UnnamedSchema {
                ident: ident.to_string(),
            })?;
            self.define(name, schema, ident)?;

            let type_name = type_ident(name);
            let module = format_ident!("{}", self.module);
            let static_ident = format_ident!("{}", ident);
            self.items.push(quote! {
                impl ::schematic::SchemaType for #type_name {
                    fn schema() -> &'static ::schematic::schematic_define::Schema {
                        &::schematic_definitions::#module::#static_ident
                    }
                }
            });
        }

        let items = self.items;
        Ok(quote! { #(#items)* })
    }

    /// Emits the type for a named or inline object, enum or union.
    fn define(&mut self, name: &str, schema: &Schema, origin: &str) -> Result<(), GeneratorError> {
        if let Some(first) = self.defined.get(name) {
            return Err(GeneratorError::DuplicateType {
                name: name.to_string(),
                first: first.clone(),
                second: origin.to_string(),
            });
        }
        self.defined.insert(name.to_string(), origin.to_string());

        match schema.resolve() {
            Schema::Object(object) => {
                let item = self.object(name, object, None)?;
                self.items.push(item);
            }
            Schema::Enum(enumeration) => self.items.push(enumeration_item(name, enumeration)),
            Schema::Union(union) => {
                let item = self.union(name, union)?;
                self.items.push(item);
            }
            _ => {
                return Err(GeneratorError::CodeGenError(format!(
                    "{origin} is named '{name}' but is not an object, enum or union"
                )));
            }
        }
        Ok(())
    }

    /// Returns the Rust type of `schema`, emitting inline shapes as needed.
    ///
    /// `hint` names an anonymous object, enum or union found here.
    fn type_of(&mut self, schema: &Schema, hint: &str) -> Result<TokenStream, GeneratorError> {
        Ok(match schema {
            Schema::Ref(target) => {
                let ident = type_ident(registered_name(self.registry, *target, hint)?);
                quote! { #ident }
            }
            Schema::String(_) => quote! { String },
            Schema::Integer => quote! { i64 },
            Schema::Number => quote! { f64 },
            Schema::Boolean => quote! { bool },
            Schema::Any => quote! { ::serde_json::Value },
            Schema::Nullable(inner) => {
                let inner = self.type_of(inner, hint)?;
                quote! { Option<#inner> }
            }
            Schema::Array(items) => {
                let items = self.type_of(items, hint)?;
                quote! { Vec<#items> }
            }
            Schema::Map(values) => {
                let values = self.type_of(values, hint)?;
                quote! { ::std::collections::BTreeMap<String, #values> }
            }
            Schema::Object(_) | Schema::Enum(_) | Schema::Union(_) => {
                let name = schema.name().unwrap_or(hint);
                self.define(name, schema, hint)?;
                let ident = type_ident(name);
                quote! { #ident }
            }
        })
    }

    /// Generates a struct. `tag` is the discriminator consumed by an enclosing union.
    fn object(
        &mut self,
        name: &str,
        object: &ObjectSchema,
        tag: Option<&str>,
    ) -> Result<TokenStream, GeneratorError> {
        let type_name = type_ident(name);
        let mut seen: Vec<String> = Vec::new();
        let mut fields = Vec::new();
        let mut defaultable = true;

        for field in &object.fields {
            if Some(field.name) == tag {
                continue;
            }
            let ident = field_ident(field.name);
            let key = ident.to_string();
            if seen.contains(&key) || (object.is_passthrough() && field.name == EXTRA_FIELD) {
                return Err(GeneratorError::FieldCollision {
                    type_name: name.to_string(),
                    field: field.name.to_string(),
                });
            }
            seen.push(key);

            let hint = format!("{name}{}", type_ident(field.name));
            let (tokens, default) = self.field(&ident, field, &hint)?;
            defaultable &= default;
            fields.push(tokens);
        }

        let docs = object.description.map(|d| format!(" {d}"));
        let docs = docs.iter();
        let default = defaultable.then(|| quote! { Default, });

        let (policy, extra) = if object.is_passthrough() {
            let extra = format_ident!("{}", EXTRA_FIELD);
            (
                quote! {},
                quote! {
                    /// Fields not declared by the schema, preserved as received.
                    #[serde(flatten)]
                    pub #extra: ::serde_json::Map<String, ::serde_json::Value>,
                },
            )
        } else {
            (quote! { #[serde(deny_unknown_fields)] }, quote! {})
        };

        Ok(quote! {
            #(#[doc = #docs])*
            #[derive(Debug, Clone, PartialEq, #default ::serde::Serialize, ::serde::Deserialize)]
            #policy
            pub struct #type_name {
                #(#fields)*
                #extra
            }
        })
    }

    /// Generates one struct field; also reports whether its type has a `Default`.
    fn field(
        &mut self,
        ident: &proc_macro2::Ident,
        field: &Field,
        hint: &str,
    ) -> Result<(TokenStream, bool), GeneratorError> {
        let (nullable, inner) = match &field.schema {
            Schema::Nullable(inner) => (true, inner.as_ref()),
            other => (false, other),
        };
        let inner_type = self.type_of(inner, hint)?;
        let rename = needs_rename(field.name).then(|| {
            let key = field.name;
            quote! { #[serde(rename = #key)] }
        });

        let tokens = match (field.required, nullable) {
            (true, false) => quote! {
                #rename
                pub #ident: #inner_type,
            },
            (true, true) => quote! {
                #rename
                pub #ident: Option<#inner_type>,
            },
            (false, false) => quote! {
                #rename
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub #ident: Option<#inner_type>,
            },
            (false, true) => quote! {
                #rename
                #[serde(
                    default,
                    skip_serializing_if = "Option::is_none",
                    with = "::schematic::double_option"
                )]
                pub #ident: Option<Option<#inner_type>>,
            },
        };

        let defaultable = nullable || !field.required || has_default(inner);
        Ok((tokens, defaultable))
    }

    /// Generates an internally tagged enum plus one struct per branch.
    fn union(&mut self, name: &str, union: &UnionSchema) -> Result<TokenStream, GeneratorError> {
        let type_name = type_ident(name);
        let discriminator = union.discriminator;
        let mut variants = Vec::new();

        for variant in &union.variants {
            let variant_name = format!("{name}{}", type_ident(variant.tag));
            if let Some(first) = self.defined.get(&variant_name) {
                return Err(GeneratorError::DuplicateType {
                    name: variant_name,
                    first: first.clone(),
                    second: name.to_string(),
                });
            }
            self.defined.insert(variant_name.clone(), name.to_string());

            let item = self.object(&variant_name, &variant.schema, Some(discriminator))?;
            self.items.push(item);

            let tag = variant.tag;
            let variant_ident = type_ident(variant.tag);
            let struct_ident = type_ident(&variant_name);
            variants.push(quote! {
                #[serde(rename = #tag)]
                #variant_ident(#struct_ident),
            });
        }

        Ok(quote! {
            #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
            #[serde(tag = #discriminator)]
            pub enum #type_name {
                #(#variants)*
            }
        })
    }
}

/// Returns the type name generated for the registered static `target`.
///
/// ## Errors
///
/// Returns [`GeneratorError::UnknownReference`] if `target` is not in
/// `registry`, naming `context` as the place it was referenced from.
pub fn registered_name(
    registry: &[(&'static str, SchemaRef)],
    target: SchemaRef,
    context: &str,
) -> Result<&'static str, GeneratorError> {
    let registered = registry
        .iter()
        .find(|(_, entry)| std::ptr::eq(*entry, target));
    match registered {
        Some((ident, schema)) => schema.name().ok_or_else(|| GeneratorError::UnnamedSchema {
            ident: ident.to_string(),
        }),
        None => Err(GeneratorError::UnknownReference {
            context: context.to_string(),
            name: target.name(),
        }),
    }
}

fn enumeration_item(name: &str, enumeration: &EnumSchema) -> TokenStream {
    let type_name = type_ident(name);
    let variants = enumeration.values.iter().map(|value| {
        let ident = type_ident(value);
        quote! {
            #[serde(rename = #value)]
            #ident,
        }
    });
    let values = enumeration.values.iter();
    let idents = enumeration.values.iter().map(|value| type_ident(value));

    quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum #type_name {
            #(#variants)*
        }

        impl #type_name {
            /// Returns the wire value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    #(Self::#idents => #values,)*
                }
            }
        }

        impl ::std::fmt::Display for #type_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    }
}

/// Returns `true` if the Rust type projected from `schema` implements `Default`.
fn has_default(schema: &Schema) -> bool {
    matches!(
        schema,
        Schema::String(_)
            | Schema::Integer
            | Schema::Number
            | Schema::Boolean
            | Schema::Any
            | Schema::Nullable(_)
            | Schema::Array(_)
            | Schema::Map(_)
    )
}
