//! Java interface method declarations.

use restbind_codegen::{CodeFragment, Renderable};

use super::JavaDoc;

/// A method parameter with optional annotations.
#[derive(Debug, Clone)]
pub struct Param {
    pub annotation: Option<String>,
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            annotation: None,
            ty: ty.into(),
            name: name.into(),
        }
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    fn format(&self) -> String {
        match &self.annotation {
            Some(a) => format!("{} {} {}", a, self.ty, self.name),
            None => format!("{} {}", self.ty, self.name),
        }
    }
}

/// An abstract method of a Java interface.
///
/// Methods with more than one parameter put each parameter on its own line.
#[derive(Debug, Clone)]
pub struct InterfaceMethod {
    pub doc: Option<JavaDoc>,
    pub annotations: Vec<String>,
    pub return_type: String,
    pub name: String,
    pub params: Vec<Param>,
}

impl InterfaceMethod {
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            doc: None,
            annotations: Vec::new(),
            return_type: return_type.into(),
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: JavaDoc) -> Self {
        self.doc = Some(doc);
        self
    }

    pub fn annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotations.push(annotation.into());
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Param>) -> Self {
        self.params.extend(params);
        self
    }
}

impl Renderable for InterfaceMethod {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.extend(doc.to_fragments());
        }
        fragments.extend(self.annotations.iter().map(CodeFragment::line));

        if self.params.len() <= 1 {
            let params = self.params.iter().map(Param::format).collect::<String>();
            fragments.push(CodeFragment::line(format!(
                "{} {}({});",
                self.return_type, self.name, params
            )));
        } else {
            let last = self.params.len() - 1;
            let body = self
                .params
                .iter()
                .enumerate()
                .map(|(i, p)| {
                    let sep = if i == last { "" } else { "," };
                    CodeFragment::line(format!("{}{}", p.format(), sep))
                })
                .collect();
            fragments.push(CodeFragment::block(
                format!("{} {}(", self.return_type, self.name),
                body,
                Some(");".to_string()),
            ));
        }
        fragments
    }
}

#[cfg(test)]
mod tests {
    use restbind_codegen::CodeBuilder;

    use super::*;

    fn render(method: &InterfaceMethod) -> String {
        let mut builder = CodeBuilder::compact();
        builder.emit(method);
        builder.build()
    }

    #[test]
    fn test_no_params() {
        let method = InterfaceMethod::new("Call<FramesV3>", "list").annotation("@GET(\"/3/Frames\")");
        assert_eq!(render(&method), "@GET(\"/3/Frames\")\nCall<FramesV3> list();\n");
    }

    #[test]
    fn test_single_param_inline() {
        let method = InterfaceMethod::new("Call<FramesV3>", "fetch")
            .param(Param::new("String", "frame_id").annotation("@Path(\"frame_id\")"));
        assert_eq!(
            render(&method),
            "Call<FramesV3> fetch(@Path(\"frame_id\") String frame_id);\n"
        );
    }

    #[test]
    fn test_many_params_one_per_line() {
        let method = InterfaceMethod::new("Call<JobV3>", "train").params([
            Param::new("int", "ntrees").annotation("@Field(\"ntrees\")"),
            Param::new("String", "training_frame").annotation("@Field(\"training_frame\")"),
        ]);
        assert_eq!(
            render(&method),
            "Call<JobV3> train(\n  @Field(\"ntrees\") int ntrees,\n  @Field(\"training_frame\") String training_frame\n);\n"
        );
    }
}
