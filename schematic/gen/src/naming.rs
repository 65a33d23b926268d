//! Identifier conventions for generated code.
//!
//! Wire names (JSON keys, enum values, resource names) are turned into Rust
//! identifiers here, so every generator agrees on the spelling.

use proc_macro2::{Ident, Span};

/// Keywords that can be used as raw identifiers (`r#type`).
const RAW_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self", "_"];

/// Converts a wire name to PascalCase.
///
/// `_`, `-`, `.` and spaces separate words. A leading digit gets a `V`
/// prefix so the result is always a valid identifier.
///
/// ## Examples
///
/// ```
/// use schematic_gen::naming::pascal_case;
///
/// assert_eq!(pascal_case("label_selector"), "LabelSelector");
/// assert_eq!(pascal_case("eu-central"), "EuCentral");
/// assert_eq!(pascal_case("x86"), "X86");
/// assert_eq!(pascal_case("4k"), "V4k");
/// ```
pub fn pascal_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for word in name.split(['_', '-', '.', ' ']).filter(|w| !w.is_empty()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, 'V');
    }
    result
}

/// Converts a wire name to snake_case, keeping existing underscores.
///
/// ## Examples
///
/// ```
/// use schematic_gen::naming::snake_case;
///
/// assert_eq!(snake_case("server_types"), "server_types");
/// assert_eq!(snake_case("dns-ptr"), "dns_ptr");
/// assert_eq!(snake_case("ServerTypes"), "server_types");
/// ```
pub fn snake_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        match c {
            '-' | '.' | ' ' => result.push('_'),
            c if c.is_uppercase() => {
                if i > 0 && !result.ends_with('_') {
                    result.push('_');
                }
                result.extend(c.to_lowercase());
            }
            c => result.push(c),
        }
    }
    if result.starts_with(|c: char| c.is_ascii_digit()) {
        result.insert(0, '_');
    }
    result
}

/// Returns the identifier for a struct field or method named `name`.
///
/// Keywords become raw identifiers (`type` → `r#type`), which serde
/// serializes under the original key.
pub fn field_ident(name: &str) -> Ident {
    let snake = snake_case(name);
    if RAW_KEYWORDS.contains(&snake.as_str()) {
        Ident::new_raw(&snake, Span::call_site())
    } else if RESERVED.contains(&snake.as_str()) {
        Ident::new(&format!("{snake}_"), Span::call_site())
    } else {
        Ident::new(&snake, Span::call_site())
    }
}

/// Returns `true` if a field generated for `name` needs `#[serde(rename)]`.
pub fn needs_rename(name: &str) -> bool {
    let ident = field_ident(name).to_string();
    ident.strip_prefix("r#").unwrap_or(&ident) != name
}

/// Returns a PascalCase type identifier for `name`.
pub fn type_ident(name: &str) -> Ident {
    Ident::new(&pascal_case(name), Span::call_site())
}

/// Splits a path template into a `format!` string and its parameters.
///
/// ## Examples
///
/// ```
/// use schematic_gen::naming::format_path;
///
/// let (template, params) = format_path("/firewalls/{id}/actions/set_rules");
/// assert_eq!(template, "/firewalls/{}/actions/set_rules");
/// assert_eq!(params, vec!["id"]);
/// ```
pub fn format_path(path: &str) -> (String, Vec<&str>) {
    let params = schematic_define::types::extract_path_params(path);
    let mut template = path.to_string();
    for param in &params {
        template = template.replace(&format!("{{{param}}}"), "{}");
    }
    (template, params)
}
