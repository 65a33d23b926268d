//! Error types for the schematic generator.

use thiserror::Error;

/// Errors that can occur during code generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A schema references a static that is not in the registry.
    #[error("{context} references a schema that is not registered{}", render_name(.name))]
    UnknownReference {
        /// Where the reference was found, e.g. `Firewall.rules`.
        context: String,
        /// Declared name of the target, if it has one.
        name: Option<&'static str>,
    },

    /// Two different schemas project to the same Rust type name.
    #[error("Duplicate type name '{name}': declared by {first} and {second}")]
    DuplicateType {
        name: String,
        first: String,
        second: String,
    },

    /// Two fields of one struct map to the same Rust field name.
    ///
    /// Passthrough structs reserve `extra` for undeclared keys.
    #[error("Field '{field}' of '{type_name}' collides with another generated field")]
    FieldCollision { type_name: String, field: String },

    /// A registry entry or endpoint payload has no type name.
    #[error("Schema '{ident}' has no type name; give it one with ObjectSchema::named or Schema::named_enum")]
    UnnamedSchema { ident: String },

    /// Failed to generate code
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

fn render_name(name: &Option<&'static str>) -> String {
    name.map(|n| format!(" ({n})")).unwrap_or_default()
}
