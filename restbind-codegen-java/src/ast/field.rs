//! Java field declarations.

use restbind_codegen::{CodeFragment, Renderable};

use super::JavaDoc;

/// A field declaration, optionally documented and annotated with its wire name.
#[derive(Debug, Clone)]
pub struct JavaField {
    pub name: String,
    pub ty: String,
    pub doc: Option<JavaDoc>,
    pub serialized_name: Option<String>,
    pub visibility: &'static str,
    pub initializer: Option<String>,
}

impl JavaField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            serialized_name: None,
            visibility: "public",
            initializer: None,
        }
    }

    pub fn doc(mut self, doc: JavaDoc) -> Self {
        self.doc = Some(doc);
        self
    }

    /// Annotate with `@SerializedName` when the wire name differs from the field name.
    pub fn wire_name(mut self, wire_name: &str) -> Self {
        if wire_name != self.name {
            self.serialized_name = Some(wire_name.to_string());
        }
        self
    }

    pub fn private(mut self) -> Self {
        self.visibility = "private";
        self
    }

    pub fn initializer(mut self, value: impl Into<String>) -> Self {
        self.initializer = Some(value.into());
        self
    }

    /// The bare declaration line.
    pub fn declaration(&self) -> String {
        match &self.initializer {
            Some(value) => format!("{} {} {} = {};", self.visibility, self.ty, self.name, value),
            None => format!("{} {} {};", self.visibility, self.ty, self.name),
        }
    }
}

impl Renderable for JavaField {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.extend(doc.to_fragments());
        }
        if let Some(wire) = &self.serialized_name {
            fragments.push(CodeFragment::line(format!("@SerializedName(\"{}\")", wire)));
        }
        fragments.push(CodeFragment::line(self.declaration()));
        fragments
    }
}
