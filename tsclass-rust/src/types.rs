//! Mapping of `syn` types onto field kinds.

use std::collections::HashMap;

use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type, TypePath};
use tsclass_core::{Kind, Primitive};

const POINTERS: &[&str] = &["Option", "Box", "Rc", "Arc", "Cow"];
const SEQUENCES: &[&str] = &["Vec", "VecDeque", "LinkedList", "HashSet", "BTreeSet", "IndexSet"];
const MAPS: &[&str] = &["HashMap", "BTreeMap", "IndexMap"];

/// Resolves type syntax against the set of parsed structs.
pub struct TypeResolver<'a> {
    /// Bare struct name to qualified name.
    structs: &'a HashMap<String, String>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(structs: &'a HashMap<String, String>) -> Self {
        Self { structs }
    }

    pub fn kind(&self, ty: &Type) -> Kind {
        match ty {
            Type::Path(path) if path.qself.is_none() => self.path_kind(path),
            Type::Reference(reference) => Kind::pointer(self.kind(&reference.elem)),
            Type::Slice(slice) => Kind::slice(self.kind(&slice.elem)),
            Type::Array(array) => Kind::slice(self.kind(&array.elem)),
            Type::Paren(paren) => self.kind(&paren.elem),
            Type::Group(group) => self.kind(&group.elem),
            other => Kind::opaque(render(other)),
        }
    }

    fn path_kind(&self, path: &TypePath) -> Kind {
        let Some(segment) = path.path.segments.last() else {
            return Kind::opaque(render(path));
        };
        let ident = segment.ident.to_string();
        let args = type_args(&segment.arguments);

        if args.is_empty() {
            if let Some(primitive) = Primitive::from_ident(&ident) {
                return Kind::primitive(primitive);
            }
            if let Some(qualified) = self.structs.get(&ident) {
                return Kind::struct_(qualified.as_str());
            }
            if ident == "Value" {
                return Kind::any();
            }
        }

        let name = ident.as_str();
        match args.as_slice() {
            [inner, ..] if POINTERS.contains(&name) => Kind::pointer(self.kind(inner)),
            [element] if SEQUENCES.contains(&name) => Kind::slice(self.kind(element)),
            [key, value] if MAPS.contains(&name) => Kind::map(self.kind(key), self.kind(value)),
            _ => Kind::opaque(render(path)),
        }
    }
}

/// Type arguments of a path segment, skipping lifetimes and constants.
fn type_args(arguments: &PathArguments) -> Vec<&Type> {
    match arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Source spelling of a type with token spacing removed around punctuation.
pub fn render(tokens: &impl ToTokens) -> String {
    tokens
        .to_token_stream()
        .to_string()
        .replace(" :: ", "::")
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace("& ", "&")
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn kind(ty: Type) -> Kind {
        let structs = HashMap::from([("Address".to_string(), "models::Address".to_string())]);
        TypeResolver::new(&structs).kind(&ty)
    }

    #[test]
    fn test_primitives() {
        assert_eq!(kind(parse_quote!(u32)), Kind::primitive(Primitive::U32));
        assert_eq!(kind(parse_quote!(String)), Kind::string());
        assert_eq!(kind(parse_quote!(std::string::String)), Kind::string());
        assert_eq!(kind(parse_quote!(serde_json::Value)), Kind::any());
        assert_eq!(kind(parse_quote!(&'a str)), Kind::pointer(Kind::string()));
    }

    #[test]
    fn test_wrappers_become_pointers() {
        assert_eq!(
            kind(parse_quote!(Option<Box<Address>>)),
            Kind::pointer(Kind::pointer(Kind::struct_("models::Address")))
        );
        assert_eq!(
            kind(parse_quote!(Cow<'static, str>)),
            Kind::pointer(Kind::string())
        );
    }

    #[test]
    fn test_containers() {
        assert_eq!(kind(parse_quote!(Vec<i64>)), Kind::slice(Kind::i64()));
        assert_eq!(kind(parse_quote!([f64; 3])), Kind::slice(Kind::f64()));
        assert_eq!(
            kind(parse_quote!(HashMap<String, Address>)),
            Kind::map(Kind::string(), Kind::struct_("models::Address"))
        );
        assert_eq!(
            kind(parse_quote!(BTreeMap<u32, bool>)),
            Kind::map(Kind::primitive(Primitive::U32), Kind::bool())
        );
    }

    #[test]
    fn test_unknown_types_are_opaque() {
        assert_eq!(
            kind(parse_quote!(DateTime<Utc>)),
            Kind::opaque("DateTime<Utc>")
        );
        assert_eq!(kind(parse_quote!(uuid::Uuid)), Kind::opaque("uuid::Uuid"));
        assert_eq!(kind(parse_quote!((u8, u8))), Kind::opaque("(u8, u8)"));
    }
}
