//! The seam between host-language type metadata and the converters.

use indexmap::IndexMap;
use thiserror::Error;

use crate::descriptor::{FieldDescriptor, Kind, TypeDescriptor, TypeRef};

/// Errors raised while describing a type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescribeError {
    #[error("no declaration found for type `{0}`")]
    UnknownType(String),

    #[error("field `{field}` of `{type_name}` is flattened but its type `{kind}` is not a struct")]
    FlattenNonStruct {
        type_name: String,
        field: String,
        kind: String,
    },

    #[error("`{0}` flattens itself")]
    CyclicFlatten(String),
}

/// Anything that can describe struct types by reference.
///
/// Implementations must be pure: describing the same reference twice yields
/// the same descriptor.
pub trait TypeSource {
    /// Describe a struct type with embedded struct fields flattened in place.
    fn describe(&self, ty: &TypeRef) -> Result<TypeDescriptor, DescribeError>;
}

impl<T: TypeSource + ?Sized> TypeSource for &T {
    fn describe(&self, ty: &TypeRef) -> Result<TypeDescriptor, DescribeError> {
        (*self).describe(ty)
    }
}

/// In-memory collection of struct declarations.
///
/// Declarations keep their embedded fields; [`TypeSource::describe`] flattens
/// them on demand.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: IndexMap<String, TypeDescriptor>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, replacing any previous one with the same
    /// qualified name.
    pub fn insert(&mut self, declaration: TypeDescriptor) {
        self.types
            .insert(declaration.ty.qualified().to_string(), declaration);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, declaration: TypeDescriptor) -> Self {
        self.insert(declaration);
        self
    }

    /// Look up a declaration by qualified name.
    pub fn get(&self, qualified: &str) -> Option<&TypeDescriptor> {
        self.types.get(qualified)
    }

    /// Find declarations whose bare name matches.
    pub fn find_by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a TypeDescriptor> {
        self.types.values().filter(move |decl| decl.name() == name)
    }

    /// Resolve a bare or qualified name to a single reference.
    pub fn resolve(&self, name: &str) -> Option<TypeRef> {
        if let Some(decl) = self.types.get(name) {
            return Some(decl.ty.clone());
        }
        let mut matches = self.find_by_name(name);
        let first = matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(first.ty.clone()),
        }
    }

    /// References to every declaration in insertion order.
    pub fn roots(&self) -> Vec<TypeRef> {
        self.types.values().map(|decl| decl.ty.clone()).collect()
    }

    /// Iterate declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    fn flatten_into(
        &self,
        ty: &TypeRef,
        stack: &mut Vec<String>,
        out: &mut Vec<FieldDescriptor>,
    ) -> Result<(), DescribeError> {
        if stack.iter().any(|seen| seen == ty.qualified()) {
            return Err(DescribeError::CyclicFlatten(ty.qualified().to_string()));
        }
        let decl = self
            .types
            .get(ty.qualified())
            .ok_or_else(|| DescribeError::UnknownType(ty.qualified().to_string()))?;

        stack.push(ty.qualified().to_string());
        for field in &decl.fields {
            if !field.embedded {
                out.push(field.clone());
                continue;
            }
            // A skipped field contributes nothing, flattened or not.
            if field.is_suppressed() {
                continue;
            }
            match field.kind.peel() {
                Kind::Struct(inner) => self.flatten_into(inner, stack, out)?,
                other => {
                    return Err(DescribeError::FlattenNonStruct {
                        type_name: ty.qualified().to_string(),
                        field: field.name.clone(),
                        kind: other.to_string(),
                    });
                }
            }
        }
        stack.pop();
        Ok(())
    }
}

impl TypeSource for Catalog {
    fn describe(&self, ty: &TypeRef) -> Result<TypeDescriptor, DescribeError> {
        let mut fields = Vec::new();
        self.flatten_into(ty, &mut Vec::new(), &mut fields)?;
        Ok(TypeDescriptor {
            ty: ty.clone(),
            fields,
        })
    }
}
