//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Accumulates rendered fragments with proper indentation.
///
/// # Example
///
/// ```
/// use tsclass_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};
///
/// struct Main;
///
/// impl Renderable for Main {
///     fn to_fragments(&self) -> Vec<CodeFragment> {
///         vec![CodeFragment::block(
///             "function main() {",
///             vec![CodeFragment::line("console.log(\"Hello\");")],
///             "}",
///         )]
///     }
/// }
///
/// let mut builder = CodeBuilder::new(Indent::TWO);
/// builder.emit(&Main);
///
/// assert_eq!(builder.build(), "function main() {\n  console.log(\"Hello\");\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            unit: indent.as_string(),
            buffer: String::new(),
        }
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Raw(s) => {
                self.push_raw(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                self.push_line(&close);
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::default();
        builder.push_line("let x = 1;");
        assert_eq!(builder.build(), "let x = 1;\n");
    }

    #[test]
    fn test_tab_indentation() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.apply_fragment(CodeFragment::block("{", vec![CodeFragment::line("x;")], "}"));
        assert_eq!(builder.build(), "{\n\tx;\n}\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::default();
        builder.push_indent().push_line("a;").push_blank().push_line("b;");
        assert_eq!(builder.build(), "    a;\n\n    b;\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_dedent().push_line("top;");
        assert_eq!(builder.build(), "top;\n");
    }

    #[test]
    fn test_nested_blocks() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::block(
                    "class A {",
                    vec![CodeFragment::block(
                        "if (ok) {",
                        vec![CodeFragment::line("run();")],
                        "}",
                    )],
                    "}",
                )]
            }
        }

        let mut builder = CodeBuilder::new(Indent::TWO);
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "class A {\n  if (ok) {\n    run();\n  }\n}\n"
        );
    }

    #[test]
    fn test_raw_fragment_keeps_own_indentation() {
        let mut builder = CodeBuilder::default();
        builder.push_indent();
        builder.apply_fragment(CodeFragment::raw("  custom();\n"));
        builder.apply_fragment(CodeFragment::line("next();"));
        assert_eq!(builder.build(), "  custom();\n    next();\n");
    }
}
