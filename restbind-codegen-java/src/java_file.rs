//! JavaFile abstraction for structured Java file generation.
//!
//! Every generated file starts with the same header comment and a package
//! declaration, followed by imports and the body.

use restbind_codegen::{CodeBuilder, CodeFragment, Indent, Renderable};

/// First line of every generated file's header comment.
pub const GENERATED_BY: &str = "This file is auto-generated by restbind. Do not edit.";

/// A structured representation of a Java source file.
///
/// # Example
///
/// ```ignore
/// let file = JavaFile::new("water.bindings.pojos")
///     .import("com.google.gson.Gson")
///     .add(class_block)
///     .render();
/// ```
#[derive(Debug, Clone)]
pub struct JavaFile {
    package: String,
    notice: Option<String>,
    imports: Vec<String>,
    body: Vec<Vec<CodeFragment>>,
}

impl JavaFile {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            notice: None,
            imports: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Extra line placed in the header comment below the generator notice.
    pub fn notice(mut self, notice: Option<&str>) -> Self {
        self.notice = notice.map(str::to_string);
        self
    }

    pub fn import(mut self, import: impl Into<String>) -> Self {
        self.imports.push(import.into());
        self
    }

    pub fn import_if(self, condition: bool, import: impl Into<String>) -> Self {
        if condition { self.import(import) } else { self }
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    /// Render with the default 4-space indentation.
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::JAVA)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        builder.push_line("/*").push_line(&format!(" * {}", GENERATED_BY));
        if let Some(notice) = &self.notice {
            builder.push_line(&format!(" * {}", notice));
        }
        builder.push_line(" */");
        builder.push_line(&format!("package {};", self.package));
        builder.push_blank();

        for import in &self.imports {
            builder.push_line(&format!("import {};", import));
        }
        if !self.imports.is_empty() && !self.body.is_empty() {
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
}
