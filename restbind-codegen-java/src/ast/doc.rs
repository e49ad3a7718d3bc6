//! Javadoc blocks and wrapped line comments.

use restbind_codegen::{
    CodeFragment, Renderable,
    text::{LINE_WIDTH, wrap},
};

/// A `/** ... */` block whose text is wrapped to a fixed width.
#[derive(Debug, Clone)]
pub struct JavaDoc {
    text: String,
    width: usize,
}

impl JavaDoc {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: LINE_WIDTH,
        }
    }

    /// Wrap width of the comment lines, not counting the enclosing indentation.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Renderable for JavaDoc {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = vec![CodeFragment::line("/**")];
        fragments.extend(
            wrap(&self.text, " * ", self.width)
                .into_iter()
                .map(CodeFragment::Line),
        );
        fragments.push(CodeFragment::line(" */"));
        fragments
    }
}

/// Wrapped `//` comment lines.
#[derive(Debug, Clone)]
pub struct LineComment {
    text: String,
    width: usize,
}

impl LineComment {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: LINE_WIDTH,
        }
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }
}

impl Renderable for LineComment {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        wrap(&self.text, "// ", self.width)
            .into_iter()
            .map(CodeFragment::Line)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use restbind_codegen::CodeBuilder;

    use super::*;

    #[test]
    fn test_javadoc_short() {
        let mut builder = CodeBuilder::java();
        builder.emit(&JavaDoc::new("Number of rows."));
        assert_eq!(builder.build(), "/**\n * Number of rows.\n */\n");
    }

    #[test]
    fn test_javadoc_wraps_to_width() {
        let doc = JavaDoc::new("aaa bbb ccc").width(10);
        let mut builder = CodeBuilder::java();
        builder.emit(&doc);
        assert_eq!(builder.build(), "/**\n * aaa bbb\n * ccc\n */\n");
    }

    #[test]
    fn test_javadoc_empty_text() {
        let mut builder = CodeBuilder::java();
        builder.emit(&JavaDoc::new(""));
        assert_eq!(builder.build(), "/**\n *\n */\n");
    }

    #[test]
    fn test_line_comment() {
        let mut builder = CodeBuilder::java();
        builder.push_indent().emit(&LineComment::new("Frame to train on."));
        assert_eq!(builder.build(), "    // Frame to train on.\n");
    }
}
