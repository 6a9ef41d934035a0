//! TypeScript naming rules for generated classes and members.

use tsclass_core::TypeRef;

use crate::error::ConvertError;

/// Class name for a struct: `prefix + suffix + bare name`.
pub fn entity_name(prefix: &str, suffix: &str, ty: &TypeRef) -> Result<String, ConvertError> {
    let name = format!("{}{}{}", prefix, suffix, ty.name());
    if name.is_empty() {
        return Err(ConvertError::EmptyEntityName {
            type_name: ty.qualified().to_string(),
        });
    }
    Ok(name)
}

/// Returns true if `name` can be used as a bare TypeScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Single-quoted string literal.
pub fn quote(name: &str) -> String {
    format!("'{}'", name.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Property name in a class body: bare when possible, quoted otherwise.
pub fn property(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        quote(name)
    }
}

/// Member access on `object`: `object.name` or `object['name']`.
pub fn member(object: &str, name: &str) -> String {
    if is_identifier(name) {
        format!("{}.{}", object, name)
    } else {
        format!("{}[{}]", object, quote(name))
    }
}

/// Indexed access on `object`, always quoted: `object['name']`.
pub fn index(object: &str, name: &str) -> String {
    format!("{}[{}]", object, quote(name))
}
