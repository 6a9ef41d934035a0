//! Hand-written code blocks preserved across regeneration.
//!
//! A generated class carries a section delimited by `//[<ClassName>:]` and
//! `//[end]`. Whatever sits between the markers in a previous output file is
//! carried over into the same class on the next run.

use std::path::Path;

use eyre::{Context, Result};
use indexmap::IndexMap;

/// End marker of a custom-code section.
pub const END_MARKER: &str = "//[end]";

/// Custom code keyed by class name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomCode {
    blocks: IndexMap<String, String>,
}

impl CustomCode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract every custom-code section from generated text.
    ///
    /// Markers are matched after trimming. Trailing whitespace of each block
    /// is dropped; a section without an end marker is ignored.
    pub fn extract(text: &str) -> Self {
        let mut blocks = IndexMap::new();
        let mut current: Option<(String, Vec<&str>)> = None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed == END_MARKER {
                if let Some((name, lines)) = current.take() {
                    blocks.insert(name, lines.join("\n").trim_end().to_string());
                }
            } else if let Some(name) = start_marker(trimmed) {
                current = Some((name.to_string(), Vec::new()));
            } else if let Some((_, lines)) = current.as_mut() {
                lines.push(line);
            }
        }

        Self { blocks }
    }

    /// Read and extract a previously generated file.
    ///
    /// A missing file yields an empty mapping.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        Ok(Self::extract(&text))
    }

    /// Custom code for a class.
    pub fn get(&self, class: &str) -> Option<&str> {
        self.blocks.get(class).map(String::as_str)
    }

    pub fn insert(&mut self, class: impl Into<String>, code: impl Into<String>) {
        self.blocks.insert(class.into(), code.into());
    }

    /// Iterate `(class, code)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.blocks.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Class name of a `//[<ClassName>:]` line.
fn start_marker(line: &str) -> Option<&str> {
    let name = line.strip_prefix("//[")?.strip_suffix(":]")?;
    (!name.is_empty()).then_some(name)
}
