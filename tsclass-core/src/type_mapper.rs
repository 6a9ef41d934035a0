//! Mapping between field kinds and target-language type spellings.

use crate::descriptor::{Kind, Primitive};

/// Trait for mapping scalar field kinds to language-specific type strings.
///
/// Implement this trait for each target language. Containers and nested
/// structs are handled by the converters; the mapper only names scalars.
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Map a primitive, or `None` if the language has no spelling for it.
    fn map_primitive(&self, primitive: Primitive) -> Option<&'static str>;

    /// Map an opaque type by its source spelling.
    fn map_opaque(&self, _spelling: &str) -> Option<String> {
        None
    }

    /// Map a scalar kind, looking through pointer layers.
    ///
    /// Structs, slices and maps are not scalars and yield `None`.
    fn map_kind(&self, kind: &Kind) -> Option<String> {
        match kind.peel() {
            Kind::Primitive(p) => self.map_primitive(*p).map(str::to_string),
            Kind::Opaque(spelling) => self.map_opaque(spelling),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyBool;

    impl TypeMapper for OnlyBool {
        fn language(&self) -> &'static str {
            "test"
        }

        fn map_primitive(&self, primitive: Primitive) -> Option<&'static str> {
            (primitive == Primitive::Bool).then_some("flag")
        }
    }

    #[test]
    fn test_map_kind_peels_pointers() {
        let mapper = OnlyBool;
        assert_eq!(
            mapper.map_kind(&Kind::pointer(Kind::bool())),
            Some("flag".to_string())
        );
        assert_eq!(mapper.map_kind(&Kind::i64()), None);
        assert_eq!(mapper.map_kind(&Kind::opaque("Uuid")), None);
        assert_eq!(mapper.map_kind(&Kind::slice(Kind::bool())), None);
    }
}
