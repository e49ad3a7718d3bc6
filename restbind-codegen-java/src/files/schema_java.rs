//! Data-class file for one schema.

use std::{collections::HashSet, path::PathBuf};

use restbind_codegen::{CodeFragment, Error, Indent, Renderable, Result};
use restbind_core::GeneratedFile;
use restbind_descriptor::SchemaDescriptor;

use super::text_width;
use crate::{
    JAVA_NAMING, JavaContext, JavaFile,
    ast::{JavaDoc, JavaField, LineComment},
    literal::NULL,
};

/// Field that carries descriptor metadata and is never emitted.
const META_FIELD: &str = "__meta";
/// Field whose presence marks a model-builder schema.
const CAN_BUILD_FIELD: &str = "can_build";
/// Builder field flattened into an array of parameter schemas.
const PARAMETERS_FIELD: &str = "parameters";

const RULE_WIDTH: usize = 114;
const INHERITED_TITLE_OFFSET: usize = 50;

#[derive(Debug, Clone)]
struct SchemaField {
    wire_name: String,
    name: String,
    ty: String,
    literal: String,
    help: String,
    inherited: bool,
}

impl SchemaField {
    fn java_field(&self, indent: Indent) -> JavaField {
        JavaField::new(&self.name, &self.ty)
            .wire_name(&self.wire_name)
            .doc(JavaDoc::new(&self.help).width(text_width(1, indent.width())))
    }

    /// Whether the constructor assigns this field.
    fn is_initialized(&self) -> bool {
        !self.inherited && self.wire_name != PARAMETERS_FIELD && self.literal != NULL
    }
}

/// A schema rendered as a Gson-serializable Java class.
///
/// Types and default literals are resolved up front, so a schema that cannot
/// be translated fails in [`SchemaJava::new`] and rendering never fails.
#[derive(Debug, Clone)]
pub struct SchemaJava<'a> {
    ctx: &'a JavaContext,
    name: String,
    superclass: String,
    fields: Vec<SchemaField>,
}

impl<'a> SchemaJava<'a> {
    pub fn new(ctx: &'a JavaContext, schema: &SchemaDescriptor) -> Result<Self> {
        let is_builder = schema
            .fields
            .iter()
            .any(|f| !f.is_inherited && f.name == CAN_BUILD_FIELD);

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(schema.fields.len());
        for field in schema.fields.iter().filter(|f| f.name != META_FIELD) {
            let name = JAVA_NAMING.field_name(&field.name);
            if !field.is_inherited && !seen.insert(name.clone()) {
                return Err(Error::descriptor_invariant(
                    &schema.name,
                    format!("duplicate field '{}'", field.name),
                ));
            }

            let (ty, literal) = if is_builder && field.name == PARAMETERS_FIELD {
                let ty = ctx.array_of(&ctx.options.model_parameter_schema);
                (ty, NULL.to_string())
            } else {
                let ty = ctx.java_type(field, &schema.name)?;
                let literal = ctx.literal(field, &ty);
                (ty, literal)
            };

            fields.push(SchemaField {
                wire_name: field.name.clone(),
                name,
                ty,
                literal,
                help: field.help.clone(),
                inherited: field.is_inherited,
            });
        }

        Ok(Self {
            ctx,
            name: schema.name.clone(),
            superclass: ctx.superclass(&schema.superclass).to_string(),
            fields,
        })
    }

    fn own_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.fields.iter().filter(|f| !f.inherited)
    }

    fn inherited_fields(&self) -> impl Iterator<Item = &SchemaField> {
        self.fields.iter().filter(|f| f.inherited)
    }

    fn has_map(&self) -> bool {
        self.own_fields().any(|f| f.ty.starts_with("Map<"))
    }

    fn inherited_block(&self, indent: Indent) -> Vec<CodeFragment> {
        let mut body = vec![
            CodeFragment::line(format!("/*{}", "-".repeat(RULE_WIDTH))),
            CodeFragment::line(format!(
                "//{}INHERITED",
                " ".repeat(INHERITED_TITLE_OFFSET)
            )),
            CodeFragment::line(format!("//{}", "-".repeat(RULE_WIDTH))),
            CodeFragment::blank(),
        ];
        for field in self.inherited_fields() {
            body.extend(
                LineComment::new(&field.help)
                    .width(text_width(1, indent.width()))
                    .to_fragments(),
            );
            body.extend(JavaField::new(&field.name, &field.ty).to_fragments());
            body.push(CodeFragment::blank());
        }
        body.push(CodeFragment::line("*/"));
        body
    }

    fn constructor(&self) -> Vec<CodeFragment> {
        let assignments = self
            .own_fields()
            .filter(|f| f.is_initialized())
            .map(|f| CodeFragment::line(format!("{} = {};", f.name, f.literal)))
            .collect();

        let mut fragments = JavaDoc::new("Public constructor").to_fragments();
        fragments.push(CodeFragment::block(
            format!("public {}() {{", self.name),
            assignments,
            Some("}".to_string()),
        ));
        fragments
    }

    fn to_string_method() -> Vec<CodeFragment> {
        let mut fragments =
            JavaDoc::new("Return the contents of this object as a JSON String.").to_fragments();
        fragments.push(CodeFragment::line("@Override"));
        fragments.push(CodeFragment::block(
            "public String toString() {",
            vec![CodeFragment::line("return new Gson().toJson(this);")],
            Some("}".to_string()),
        ));
        fragments
    }

    fn class_block(&self, indent: Indent) -> CodeFragment {
        let mut body = vec![CodeFragment::blank()];
        for field in self.own_fields() {
            body.extend(field.java_field(indent).to_fragments());
            body.push(CodeFragment::blank());
        }
        if self.inherited_fields().next().is_some() {
            body.extend(self.inherited_block(indent));
            body.push(CodeFragment::blank());
        }
        body.extend(self.constructor());
        body.push(CodeFragment::blank());
        body.extend(Self::to_string_method());
        body.push(CodeFragment::blank());

        CodeFragment::block(
            format!("public class {} extends {} {{", self.name, self.superclass),
            body,
            Some("}".to_string()),
        )
    }
}

impl GeneratedFile for SchemaJava<'_> {
    fn relative_path(&self) -> PathBuf {
        self.ctx.schema_dir().join(format!("{}.java", self.name))
    }

    fn render(&self) -> String {
        let indent = Indent::JAVA;
        JavaFile::new(&self.ctx.options.schema_package)
            .notice(self.ctx.options.notice.as_deref())
            .import("com.google.gson.Gson")
            .import("com.google.gson.annotations.*")
            .import_if(self.has_map(), "java.util.Map")
            .add(self.class_block(indent))
            .render_with_indent(indent)
    }
}

#[cfg(test)]
mod tests {
    use restbind_descriptor::FieldDescriptor;
    use serde_json::json;

    use super::*;

    fn render(schema: &SchemaDescriptor) -> String {
        let ctx = JavaContext::default();
        SchemaJava::new(&ctx, schema).unwrap().render()
    }

    #[test]
    fn test_root_superclass_is_object() {
        let schema = SchemaDescriptor::new("RapidsV3", "Iced");
        assert!(render(&schema).contains("public class RapidsV3 extends Object {"));
    }

    #[test]
    fn test_meta_field_is_skipped() {
        let schema = SchemaDescriptor::new("RapidsV3", "Iced")
            .field(FieldDescriptor::new("__meta", "Meta").nested_schema())
            .field(FieldDescriptor::new("ast", "string"));
        let content = render(&schema);
        assert!(!content.contains("__meta"));
        assert!(content.contains("public String ast;"));
    }

    #[test]
    fn test_duplicate_field_is_rejected() {
        let ctx = JavaContext::default();
        let schema = SchemaDescriptor::new("FrameV3", "Iced")
            .field(FieldDescriptor::new("rows", "long"))
            .field(FieldDescriptor::new("rows", "long"));
        let err = SchemaJava::new(&ctx, &schema).unwrap_err();
        assert_eq!(
            err,
            Error::descriptor_invariant("FrameV3", "duplicate field 'rows'")
        );
    }

    #[test]
    fn test_unmapped_type_names_field_and_schema() {
        let ctx = JavaContext::default();
        let schema = SchemaDescriptor::new("FrameV3", "Iced")
            .field(FieldDescriptor::new("frob", "Frobnicator"));
        let err = SchemaJava::new(&ctx, &schema).unwrap_err();
        assert!(matches!(
            err,
            Error::UnmappedType { ref token, ref field, ref owner }
                if token == "Frobnicator" && field == "frob" && owner == "FrameV3"
        ));
    }

    #[test]
    fn test_map_import_only_when_needed() {
        let plain = SchemaDescriptor::new("A", "Iced").field(FieldDescriptor::new("n", "int"));
        assert!(!render(&plain).contains("import java.util.Map;"));

        let with_map = SchemaDescriptor::new("B", "Iced")
            .field(FieldDescriptor::new("m", "Map<string,string>"));
        assert!(render(&with_map).contains("import java.util.Map;"));
    }

    #[test]
    fn test_parameters_kept_outside_builders() {
        let schema = SchemaDescriptor::new("JobV3", "Iced").field(
            FieldDescriptor::new("parameters", "ModelParametersV3")
                .schema_name("ModelParametersV3")
                .nested_schema(),
        );
        assert!(render(&schema).contains("public ModelParametersV3 parameters;"));
    }

    #[test]
    fn test_constructor_skips_null_and_inherited() {
        let schema = SchemaDescriptor::new("FrameV3", "FrameBaseV3")
            .field(FieldDescriptor::new("rows", "long").value(json!(10)))
            .field(FieldDescriptor::new("frame_id", "Key<Frame>"))
            .field(
                FieldDescriptor::new("checksum", "long")
                    .value(json!(0))
                    .inherited(),
            );
        let content = render(&schema);
        assert!(content.contains("        rows = 10L;\n"));
        assert!(!content.contains("frameId = "));
        assert!(!content.contains("checksum = "));
    }

    #[test]
    fn test_field_without_help_keeps_doc_block() {
        let schema = SchemaDescriptor::new("A", "Iced").field(FieldDescriptor::new("n", "int"));
        assert!(render(&schema).contains("    /**\n     *\n     */\n    public int n;\n"));
    }

    #[test]
    fn test_inherited_block_lists_names_only() {
        let schema = SchemaDescriptor::new("FrameV3", "FrameBaseV3").field(
            FieldDescriptor::new("frame_id", "string")
                .help("Frame ID.")
                .inherited(),
        );
        let content = render(&schema);
        assert!(content.contains("    // Frame ID.\n    public String frameId;\n"));
        assert!(!content.contains("@SerializedName"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let schema = SchemaDescriptor::new("FrameV3", "Iced")
            .field(FieldDescriptor::new("num_rows", "long").help("Number of rows."));
        assert_eq!(render(&schema), render(&schema));
    }
}
