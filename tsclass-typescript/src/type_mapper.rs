//! TypeScript type mapper implementation.

use indexmap::IndexMap;
use tsclass_core::{Primitive, TypeMapper};

/// TypeScript type mapper implementation.
///
/// Primitives follow the fixed baseline mapping. Opaque types resolve only
/// through the extra mappings supplied by configuration.
#[derive(Debug, Clone, Default)]
pub struct TypeScriptTypeMapper {
    extra: IndexMap<String, String>,
}

impl TypeScriptTypeMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add mappings for opaque type spellings (e.g. `DateTime<Utc>` to `string`).
    pub fn with_types<K, V>(mut self, types: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.extra
            .extend(types.into_iter().map(|(k, v)| (normalize(&k.into()), v.into())));
        self
    }

    /// Extra mappings in insertion order.
    pub fn extra(&self) -> &IndexMap<String, String> {
        &self.extra
    }
}

impl TypeMapper for TypeScriptTypeMapper {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn map_primitive(&self, primitive: Primitive) -> Option<&'static str> {
        let ts = match primitive {
            Primitive::Bool => "boolean",
            Primitive::String | Primitive::Char => "string",
            Primitive::Any => "any",
            p if p.is_numeric() => "number",
            _ => return None,
        };
        Some(ts)
    }

    fn map_opaque(&self, spelling: &str) -> Option<String> {
        self.extra.get(&normalize(spelling)).cloned()
    }
}

/// Spellings are compared without whitespace so `DateTime < Utc >` matches
/// `DateTime<Utc>`.
fn normalize(spelling: &str) -> String {
    spelling.chars().filter(|c| !c.is_whitespace()).collect()
}
