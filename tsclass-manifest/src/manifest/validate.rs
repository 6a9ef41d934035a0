//! Validation context and checks for manifest parsing.

use std::{ops::Range, path::PathBuf, sync::Arc};

use miette::SourceSpan;
use toml::Spanned;

use super::IndentValue;
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// Holds the source content and filename plus the current table path, so
/// errors can name where in the manifest they occurred.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "tsclass.toml");
/// ctx.push("output").validate_output_path(&manifest.output.path)?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Table path segments (e.g., ["output"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Qualify a key with the current path, e.g. `output.path`.
    pub fn key(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", self.path_string(), name)
        }
    }

    /// At least one source file, none of them empty.
    pub fn validate_sources(&self, sources: &Spanned<Vec<PathBuf>>) -> Result<()> {
        let span = to_source_span(sources.span());
        if sources.get_ref().is_empty() {
            return Err(self.source.validation_error_at(
                format!("'{}' must list at least one file", self.key("sources")),
                span,
            ));
        }
        if sources.get_ref().iter().any(|path| path.as_os_str().is_empty()) {
            return Err(self.source.validation_error_at(
                format!("'{}' contains an empty path", self.key("sources")),
                span,
            ));
        }
        Ok(())
    }

    /// The output path must not be empty.
    pub fn validate_output_path(&self, path: &Spanned<PathBuf>) -> Result<()> {
        if path.get_ref().as_os_str().is_empty() {
            return Err(self.source.validation_error_at(
                format!("'{}' must not be empty", self.key("path")),
                to_source_span(path.span()),
            ));
        }
        Ok(())
    }

    /// Indent must be a width between 1 and 8, or `"tab"`.
    pub fn validate_indent(&self, indent: &Spanned<IndentValue>) -> Result<()> {
        if indent.get_ref().to_indent().is_none() {
            return Err(self
                .source
                .invalid_indent_error(indent.get_ref().to_string(), to_source_span(indent.span())));
        }
        Ok(())
    }

    /// Type mapping keys and values must not be empty.
    pub fn validate_type_mapping(&self, rust: &str, ts: &Spanned<String>) -> Result<()> {
        if rust.trim().is_empty() {
            let message = format!("'{}' has an empty type name", self.path_string());
            return Err(match find_empty_key_span(self.source.src()) {
                Some(span) => self.source.validation_error_at(message, span),
                None => self.source.validation_error(message),
            });
        }
        if ts.get_ref().trim().is_empty() {
            return Err(self.source.validation_error_at(
                format!("'{}' maps to an empty TypeScript type", self.key(rust)),
                to_source_span(ts.span()),
            ));
        }
        Ok(())
    }
}

/// Convert a byte range from the TOML parser into a miette span.
pub(crate) fn to_source_span(range: Range<usize>) -> SourceSpan {
    (range.start, range.end - range.start).into()
}

/// Find a quoted empty key such as `"" = "string"`.
fn find_empty_key_span(src: &str) -> Option<SourceSpan> {
    ["\"\"", "''"].iter().find_map(|pattern| {
        src.lines()
            .scan(0usize, |offset, line| {
                let start = *offset;
                *offset += line.len() + 1;
                Some((start, line))
            })
            .find(|(_, line)| line.trim_start().starts_with(pattern))
            .map(|(start, line)| {
                let indent = line.len() - line.trim_start().len();
                SourceSpan::from((start + indent, pattern.len()))
            })
    })
}
