//! Code builder utility for generating properly indented code.

use super::Indent;

/// Line-oriented builder for indented code.
///
/// Every method returns `&mut Self` so calls chain inside render loops.
///
/// ```
/// use trellis_codegen::builder::CodeBuilder;
///
/// let mut b = CodeBuilder::java();
/// b.push_line("public class Foo {")
///     .push_indent()
///     .push_line("private final int x = 1;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(b.build(), "public class Foo {\n    private final int x = 1;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent: indent.to_string(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
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

    /// Add a Javadoc comment.
    ///
    /// Always renders a block; empty lines become a bare ` *`.
    pub fn push_javadoc(&mut self, text: &str) -> &mut Self {
        self.push_line("/**");
        for line in text.lines() {
            if line.is_empty() {
                self.push_line(" *");
            } else {
                self.push_line(&format!(" * {}", line));
            }
        }
        self.push_line(" */")
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.indent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::new(Indent(2));
        builder
            .push_dedent()
            .push_line("a;")
            .push_indent()
            .push_line("b;");
        assert_eq!(builder.build(), "a;\n  b;\n");
    }

    #[test]
    fn test_single_line_javadoc_is_a_block() {
        let mut builder = CodeBuilder::java();
        builder
            .push_indent()
            .push_javadoc("Group of libraries at <b>androidx</b>");
        assert_eq!(
            builder.build(),
            "    /**\n     * Group of libraries at <b>androidx</b>\n     */\n"
        );
    }

    #[test]
    fn test_multi_line_javadoc() {
        let mut builder = CodeBuilder::java();
        builder.push_javadoc("first\n\nsecond");
        assert_eq!(builder.build(), "/**\n * first\n *\n * second\n */\n");
    }

    #[test]
    fn test_nested_blocks() {
        let mut builder = CodeBuilder::java();
        builder
            .push_line("class A {")
            .push_indent()
            .push_blank()
            .push_line("void b() {")
            .push_indent()
            .push_line("return;")
            .push_dedent()
            .push_line("}")
            .push_dedent()
            .push_line("}");
        assert_eq!(
            builder.build(),
            "class A {\n\n    void b() {\n        return;\n    }\n}\n"
        );
    }
}
