//! Manifest types and parsing for tsclass.toml files.

mod parse;
mod validate;

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use toml::Spanned;
use tsclass_codegen::Indent;
pub use validate::ParseContext;

/// Root manifest for tsclass.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where struct definitions are read from
    pub input: InputConfig,

    /// Where and how the classes are written
    pub output: OutputConfig,

    /// Extra mappings for types without a built-in TypeScript spelling,
    /// in file order
    #[serde(default)]
    pub types: IndexMap<String, Spanned<String>>,

    /// Directory of the manifest file; relative paths resolve against it
    #[serde(skip)]
    base_dir: PathBuf,
}

/// The `[input]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Rust source files, read in order
    pub sources: Spanned<Vec<PathBuf>>,

    /// Struct names to convert; empty means every parsed struct
    #[serde(default)]
    pub roots: Vec<String>,
}

/// The `[output]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: Spanned<PathBuf>,

    #[serde(default)]
    pub prefix: String,

    #[serde(default)]
    pub suffix: String,

    /// Space width or `"tab"`
    #[serde(default)]
    pub indent: Option<Spanned<IndentValue>>,

    #[serde(default = "default_true")]
    pub create_from: bool,

    #[serde(default = "default_true")]
    pub export: bool,

    /// Directory for copies of the previous output; no backup when unset
    #[serde(default)]
    pub backup_dir: Option<PathBuf>,
}

/// Raw `indent` value as written in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentValue {
    Width(i64),
    Name(String),
}

impl IndentValue {
    /// Interpret the value, or `None` when it names no supported indent.
    pub fn to_indent(&self) -> Option<Indent> {
        match self {
            Self::Width(width @ 1..=8) => u8::try_from(*width).ok().map(Indent::Spaces),
            Self::Width(_) => None,
            Self::Name(name) if name.eq_ignore_ascii_case("tab") => Some(Indent::Tab),
            Self::Name(_) => None,
        }
    }
}

impl std::fmt::Display for IndentValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width(width) => write!(f, "{}", width),
            Self::Name(name) => f.write_str(name),
        }
    }
}

fn default_true() -> bool {
    true
}

impl Manifest {
    /// Indentation for generated code.
    pub fn indent(&self) -> Indent {
        self.output
            .indent
            .as_ref()
            .and_then(|value| value.get_ref().to_indent())
            .unwrap_or_default()
    }

    /// Source files, resolved against the manifest directory.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        self.input
            .sources
            .get_ref()
            .iter()
            .map(|path| self.resolve(path))
            .collect()
    }

    /// Output file, resolved against the manifest directory.
    pub fn output_path(&self) -> PathBuf {
        self.resolve(self.output.path.get_ref())
    }

    /// Backup directory, resolved against the manifest directory.
    pub fn backup_dir(&self) -> Option<PathBuf> {
        self.output.backup_dir.as_deref().map(|dir| self.resolve(dir))
    }

    /// Configured type mappings as `(rust spelling, typescript type)` pairs.
    pub fn type_mappings(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types
            .iter()
            .map(|(rust, ts)| (rust.as_str(), ts.get_ref().as_str()))
    }

    /// Directory relative paths resolve against.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_values() {
        assert_eq!(IndentValue::Width(2).to_indent(), Some(Indent::TWO));
        assert_eq!(IndentValue::Width(8).to_indent(), Some(Indent::Spaces(8)));
        assert_eq!(IndentValue::Width(0).to_indent(), None);
        assert_eq!(IndentValue::Width(9).to_indent(), None);
        assert_eq!(IndentValue::Name("Tab".into()).to_indent(), Some(Indent::Tab));
        assert_eq!(IndentValue::Name("wide".into()).to_indent(), None);
    }

    #[test]
    fn test_defaults() {
        let manifest: Manifest = r#"
            [input]
            sources = ["models.rs"]

            [output]
            path = "models.ts"
        "#
        .parse()
        .unwrap();

        assert_eq!(manifest.indent(), Indent::FOUR);
        assert!(manifest.output.create_from);
        assert!(manifest.output.export);
        assert!(manifest.output.prefix.is_empty());
        assert!(manifest.input.roots.is_empty());
        assert_eq!(manifest.backup_dir(), None);
        assert_eq!(manifest.type_mappings().count(), 0);
    }

    #[test]
    fn test_type_mappings_keep_file_order() {
        let manifest: Manifest = r#"
            [input]
            sources = ["models.rs"]

            [output]
            path = "models.ts"
            indent = "tab"

            [types]
            Uuid = "string"
            "DateTime<Utc>" = "string"
            Decimal = "number"
        "#
        .parse()
        .unwrap();

        let mappings: Vec<_> = manifest.type_mappings().collect();
        assert_eq!(
            mappings,
            [
                ("Uuid", "string"),
                ("DateTime<Utc>", "string"),
                ("Decimal", "number")
            ]
        );
        assert_eq!(manifest.indent(), Indent::Tab);
    }
}
