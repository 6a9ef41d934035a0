//! Core operations.
//!
//! This module contains the business logic for tsclass commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;

pub use check::check;
use eyre::{Context, Result, bail};
pub use generate::{GenerateOptions, generate};
pub use list::list;
use tsclass_core::{Catalog, TypeRef};
use tsclass_manifest::Manifest;
use tsclass_rust::RustSource;
use tsclass_typescript::{Generator, Options, TypeScriptTypeMapper};

/// A parsed manifest together with the structs of its sources.
pub struct Project {
    manifest: Manifest,
    catalog: Catalog,
}

impl Project {
    /// Parse every source file the manifest lists.
    pub fn load(manifest: Manifest) -> Result<Self> {
        let sources = manifest.source_paths();
        let catalog =
            RustSource::parse_files(&sources).wrap_err("failed to read struct definitions")?;
        tracing::debug!(
            sources = sources.len(),
            structs = catalog.len(),
            "loaded sources"
        );
        Ok(Self { manifest, catalog })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Root types to convert: the configured roots, or every parsed struct.
    pub fn roots(&self) -> Result<Vec<TypeRef>> {
        let names = &self.manifest.input.roots;
        if names.is_empty() {
            return Ok(self.catalog.roots());
        }

        names
            .iter()
            .map(|name| match self.catalog.resolve(name) {
                Some(root) => Ok(root),
                None => {
                    let candidates: Vec<_> = self
                        .catalog
                        .find_by_name(name)
                        .map(|decl| decl.ty.qualified())
                        .collect();
                    if candidates.is_empty() {
                        bail!("root type '{}' is not declared in any source", name)
                    }
                    bail!(
                        "root type '{}' is ambiguous, use one of: {}",
                        name,
                        candidates.join(", ")
                    )
                }
            })
            .collect()
    }

    /// A generator over the parsed structs, configured from the manifest.
    pub fn generator(&self) -> Result<Generator<&Catalog>> {
        let output = &self.manifest.output;
        let options = Options {
            prefix: output.prefix.clone(),
            suffix: output.suffix.clone(),
            indent: self.manifest.indent(),
            create_from_method: output.create_from,
            export: output.export,
        };
        let mapper = TypeScriptTypeMapper::new().with_types(self.manifest.type_mappings());

        Ok(Generator::new(&self.catalog)
            .with_options(options)
            .with_mapper(mapper)
            .add_all(self.roots()?))
    }
}


#[cfg(test)]
mod tests {
    use super::testing::project;

    #[test]
    fn test_all_structs_are_roots_by_default() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(temp.path(), "", "");
        let roots: Vec<_> = project
            .roots()
            .unwrap()
            .iter()
            .map(|r| r.qualified().to_string())
            .collect();
        assert_eq!(roots, ["models::Address", "models::Person"]);
    }

    #[test]
    fn test_configured_roots() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(temp.path(), "roots = [\"Person\"]", "");
        let roots = project.roots().unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].name(), "Person");
    }

    #[test]
    fn test_unknown_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(temp.path(), "roots = [\"Order\"]", "");
        let err = project.roots().unwrap_err();
        assert_eq!(
            err.to_string(),
            "root type 'Order' is not declared in any source"
        );
    }

    #[test]
    fn test_generator_uses_output_options() {
        let temp = tempfile::TempDir::new().unwrap();
        let project = project(
            temp.path(),
            "roots = [\"Address\"]",
            "prefix = \"I\"\nindent = \"tab\"\ncreate_from = false",
        );
        let code = project.generator().unwrap().convert(None).unwrap();
        assert_eq!(code, "export class IAddress {\n\tstreet: string;\n}\n");
    }

    #[test]
    fn test_missing_source_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = temp.path().join("tsclass.toml");
        std::fs::write(
            &config,
            "[input]\nsources = [\"missing.rs\"]\n\n[output]\npath = \"models.ts\"\n",
        )
        .unwrap();
        let manifest = tsclass_manifest::Manifest::from_file(&config).unwrap();
        let err = super::Project::load(manifest).err().unwrap();
        assert_eq!(err.to_string(), "failed to read struct definitions");
    }
}
