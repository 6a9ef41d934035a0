//! CodeFile abstraction for the generated TypeScript output file.

use tsclass_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// Header written at the top of every generated file.
pub const GENERATED_HEADER: &str = "/* Do not change, this code is generated from Rust structs */";

/// A structured representation of a TypeScript file.
///
/// Organizes code into an optional header comment followed by body
/// elements separated by blank lines.
///
/// # Example
///
/// ```
/// use tsclass_typescript::{ClassSpec, CodeFile, GENERATED_HEADER};
///
/// let code = CodeFile::new()
///     .header(GENERATED_HEADER)
///     .add(ClassSpec::new("Empty").without_factory())
///     .render();
///
/// assert_eq!(
///     code,
///     "/* Do not change, this code is generated from Rust structs */\n\nexport class Empty {\n}\n"
/// );
/// ```
#[derive(Default)]
pub struct CodeFile {
    header: Option<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    /// Create a new empty CodeFile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header comment line.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Add multiple body elements.
    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render the file with the default indentation (4 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::default())
    }

    /// Render the file with custom indentation.
    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        if let Some(header) = &self.header {
            builder.push_line(header);
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Check if the file has no body.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{ClassField, ClassSpec, Statement, TsType};

    #[test]
    fn test_empty_file() {
        let file = CodeFile::new();
        assert!(file.is_empty());
        assert_eq!(file.render(), "");
    }

    #[test]
    fn test_header_only() {
        let file = CodeFile::new().header(GENERATED_HEADER);
        assert_eq!(file.render(), format!("{}\n\n", GENERATED_HEADER));
    }

    #[test]
    fn test_blank_lines_between_classes() {
        let file = CodeFile::new().add_all([
            ClassSpec::new("A").without_factory(),
            ClassSpec::new("B").without_factory(),
        ]);
        assert_eq!(
            file.render(),
            "export class A {\n}\n\nexport class B {\n}\n"
        );
    }

    #[test]
    fn test_tab_indentation() {
        let file = CodeFile::new().add(
            ClassSpec::new("Point").without_factory().field(
                ClassField::new("x", TsType::named("number")),
                Statement::pass_through("x"),
            ),
        );
        assert_eq!(
            file.render_with_indent(Indent::Tab),
            "export class Point {\n\tx: number;\n}\n"
        );
    }
}
