//! Collection of struct declarations from Rust source files.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use syn::{Fields, Item, ItemStruct, ext::IdentExt};
use tsclass_core::{Catalog, FieldDescriptor, TypeDescriptor};

use crate::{
    attrs::{ContainerAttrs, FieldAttrs},
    error::{Error, Result},
    types::TypeResolver,
};

/// A struct declaration found while walking a source file.
struct Declaration {
    path: PathBuf,
    module: String,
    item: ItemStruct,
}

impl Declaration {
    fn qualified(&self) -> String {
        if self.module.is_empty() {
            self.item.ident.to_string()
        } else {
            format!("{}::{}", self.module, self.item.ident)
        }
    }
}

/// Reads struct declarations from Rust source into a [`Catalog`].
///
/// Sources are collected first and resolved together, so a field may refer
/// to a struct declared in another file. Only non-generic structs with named
/// fields are collected.
///
/// # Example
///
/// ```
/// use tsclass_core::TypeSource;
/// use tsclass_rust::RustSource;
///
/// let catalog = RustSource::parse_str(
///     r#"
///     #[derive(Serialize)]
///     #[serde(rename_all = "camelCase")]
///     pub struct Person {
///         first_name: String,
///         home: Option<Address>,
///     }
///
///     pub struct Address {
///         city: String,
///     }
///     "#,
///     "models",
/// )?;
///
/// let person = catalog.resolve("Person").unwrap();
/// let desc = catalog.describe(&person).unwrap();
/// assert_eq!(desc.fields[0].external_name, "firstName");
/// # Ok::<(), tsclass_rust::Error>(())
/// ```
#[derive(Default)]
pub struct RustSource {
    declarations: Vec<Declaration>,
}

impl RustSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse source text whose items live in `module`.
    pub fn parse_str(src: &str, module: &str) -> Result<Catalog> {
        let mut source = Self::new();
        source.add_str(src, module)?;
        source.into_catalog()
    }

    /// Parse a single file.
    pub fn parse_file(path: impl AsRef<Path>) -> Result<Catalog> {
        Self::parse_files([path])
    }

    /// Parse several files into one catalog, in the given order.
    pub fn parse_files<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Catalog> {
        let mut source = Self::new();
        for path in paths {
            source.add_file(path)?;
        }
        source.into_catalog()
    }

    /// Collect the structs of a file. The module is the file stem.
    pub fn add_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let module = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.add_source(&src, &module, path.to_path_buf())
    }

    /// Collect the structs of source text whose items live in `module`.
    pub fn add_str(&mut self, src: &str, module: &str) -> Result<()> {
        self.add_source(src, module, PathBuf::from(format!("<{}>", module)))
    }

    fn add_source(&mut self, src: &str, module: &str, path: PathBuf) -> Result<()> {
        let file = syn::parse_file(src).map_err(|source| Error::Parse {
            path: path.clone(),
            source,
        })?;
        let before = self.declarations.len();
        self.collect(&file.items, module, &path);
        tracing::debug!(
            path = %path.display(),
            structs = self.declarations.len() - before,
            "parsed source"
        );
        Ok(())
    }

    fn collect(&mut self, items: &[Item], module: &str, path: &Path) {
        for item in items {
            match item {
                Item::Struct(item)
                    if item.generics.params.is_empty()
                        && matches!(item.fields, Fields::Named(_)) =>
                {
                    self.declarations.push(Declaration {
                        path: path.to_path_buf(),
                        module: module.to_string(),
                        item: item.clone(),
                    });
                }
                Item::Mod(inner) => {
                    if let Some((_, items)) = &inner.content {
                        let nested = if module.is_empty() {
                            inner.ident.to_string()
                        } else {
                            format!("{}::{}", module, inner.ident)
                        };
                        self.collect(items, &nested, path);
                    }
                }
                _ => {}
            }
        }
    }

    /// Resolve every collected struct into a catalog.
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut names: HashMap<String, String> = HashMap::new();
        let mut origins: HashMap<String, &Path> = HashMap::new();
        for decl in &self.declarations {
            let name = decl.item.ident.to_string();
            if let Some(first) = origins.get(&name) {
                return Err(Error::DuplicateStruct {
                    name,
                    first: first.to_path_buf(),
                    second: decl.path.clone(),
                });
            }
            origins.insert(name.clone(), &decl.path);
            names.insert(name, decl.qualified());
        }

        let resolver = TypeResolver::new(&names);
        let mut catalog = Catalog::new();
        for decl in &self.declarations {
            catalog.insert(describe(decl, &resolver)?);
        }
        Ok(catalog)
    }
}

fn describe(decl: &Declaration, resolver: &TypeResolver<'_>) -> Result<TypeDescriptor> {
    let attribute_error = |item: String| {
        move |source: syn::Error| Error::Attribute {
            path: decl.path.clone(),
            item,
            source,
        }
    };

    let container = ContainerAttrs::parse(&decl.item.attrs)
        .map_err(attribute_error(decl.item.ident.to_string()))?;

    let mut descriptor = TypeDescriptor::new(decl.qualified());
    let Fields::Named(fields) = &decl.item.fields else {
        return Ok(descriptor);
    };

    for field in &fields.named {
        let Some(ident) = &field.ident else {
            continue;
        };
        let name = ident.unraw().to_string();
        let attrs = FieldAttrs::parse(&field.attrs)
            .map_err(attribute_error(format!("{}.{}", decl.item.ident, name)))?;

        let kind = resolver.kind(&field.ty);
        let mut converted = if attrs.flatten {
            FieldDescriptor::embedded(name.as_str(), kind)
        } else {
            FieldDescriptor::new(name.as_str(), kind)
        };

        if attrs.skip {
            converted = converted.skip();
        } else if let Some(rename) = attrs.rename {
            converted = converted.rename(rename);
        } else if let Some(rule) = container.rename_all {
            converted = converted.rename(rule.apply(&name));
        }
        if let Some(ty) = attrs.ts_type {
            converted = converted.with_type(ty);
        }
        if let Some(transform) = attrs.transform {
            converted = converted.with_transform(transform);
        }

        descriptor.fields.push(converted);
    }

    Ok(descriptor)
}
