//! Retrofit proxy interface for one endpoint group.

use std::{path::PathBuf, sync::LazyLock};

use regex::Regex;
use restbind_codegen::{CodeFragment, Indent, Renderable, Result};
use restbind_core::GeneratedFile;
use restbind_descriptor::EndpointDescriptor;

use super::text_width;
use crate::{
    JAVA_NAMING, JavaContext, JavaFile,
    ast::{InterfaceMethod, JavaDoc, Param},
    type_mapper::STRING,
};

/// Prefix of the column-specifier schema types.
const COLUMN_SPECIFIER: &str = "ColSpecifier";
const COLUMN_SPECIFIER_TYPE: &str = "ColSpecifierV3";
const KEY_ARRAY_HELPER: &str = "keyArrayToStringArray";

/// Opening of a regex-style named group, `(?<name>`.
static NAMED_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\?<(\w+)>").expect("Invalid named group regex"));

/// Rewrite a route pattern so every placeholder reads `{name}`.
///
/// Regex-style named groups `(?<name>...)` collapse to `{name}`; `{name}`
/// placeholders are kept as they are. A group without its closing
/// parenthesis is copied through unchanged.
pub fn route_template(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(caps) = NAMED_GROUP_RE.captures(rest) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let Some(close) = group_end(&rest[open.end()..]) else {
            break;
        };
        out.push_str(&rest[..open.start()]);
        out.push('{');
        out.push_str(name.as_str());
        out.push('}');
        rest = &rest[open.end() + close + 1..];
    }
    out.push_str(rest);
    out
}

/// Offset of the `)` that closes a group whose body starts at `body`.
fn group_end(body: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in body.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

#[derive(Debug, Clone)]
struct ProxyParam {
    wire_name: String,
    /// Type as translated, before the wire override.
    java_type: String,
    is_path: bool,
}

#[derive(Debug, Clone)]
struct ProxyMethod {
    endpoint: EndpointDescriptor,
    params: Vec<ProxyParam>,
}

/// A Retrofit interface with one routed method per endpoint, plus a static
/// `Helper` class for builder and grid endpoints.
#[derive(Debug, Clone)]
pub struct ProxyJava<'a> {
    ctx: &'a JavaContext,
    class_name: String,
    methods: Vec<ProxyMethod>,
}

impl<'a> ProxyJava<'a> {
    pub fn new(
        ctx: &'a JavaContext,
        class_name: &str,
        endpoints: &[&EndpointDescriptor],
    ) -> Result<Self> {
        let methods = endpoints
            .iter()
            .map(|endpoint| -> Result<ProxyMethod> {
                let owner = format!("{}.{}", class_name, endpoint.handler_method);
                let params = endpoint
                    .input_params
                    .iter()
                    .map(|field| -> Result<ProxyParam> {
                        Ok(ProxyParam {
                            wire_name: field.name.clone(),
                            java_type: ctx.java_type(field, &owner)?,
                            is_path: field.is_path_param,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(ProxyMethod {
                    endpoint: (*endpoint).clone(),
                    params,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ctx,
            class_name: class_name.to_string(),
            methods,
        })
    }

    /// Type sent over the wire: keys and column specifiers travel as their names.
    fn wire_type(&self, java_type: &str) -> String {
        let key = self.ctx.key_type();
        let key_array = self.ctx.array_of(key);
        if java_type.ends_with(&key_array) {
            self.ctx.array_of(STRING)
        } else if java_type.ends_with(key) || java_type == COLUMN_SPECIFIER_TYPE {
            STRING.to_string()
        } else {
            java_type.to_string()
        }
    }

    fn interface_method(&self, method: &ProxyMethod, indent: Indent) -> InterfaceMethod {
        let endpoint = &method.endpoint;
        let mut decl = InterfaceMethod::new(
            format!("Call<{}>", endpoint.output_schema),
            JAVA_NAMING.safe_name(&endpoint.handler_method),
        )
        .doc(JavaDoc::new(&endpoint.summary).width(text_width(1, indent.width())));
        if endpoint.http_method == "POST" {
            decl = decl.annotation("@FormUrlEncoded");
        }
        decl.annotation(format!(
            "@{}(\"{}\")",
            endpoint.http_method,
            route_template(&endpoint.url_pattern)
        ))
        .params(method.params.iter().map(|p| {
            let binding = if p.is_path { "Path" } else { "Field" };
            Param::new(self.wire_type(&p.java_type), JAVA_NAMING.safe_name(&p.wire_name))
                .annotation(format!("@{}(\"{}\")", binding, p.wire_name))
        }))
    }

    /// Argument forwarded by the helper for one parameter of `p`.
    fn helper_argument(&self, param: &ProxyParam) -> (String, bool) {
        let name = JAVA_NAMING.field_name(&param.wire_name);
        let key = self.ctx.key_type();
        let key_array = self.ctx.array_of(key);
        if param.java_type.ends_with(key) {
            (format!("(p.{0} == null? null : p.{0}.name)", name), false)
        } else if param.java_type.ends_with(&key_array) {
            (
                format!("(p.{0} == null? null : {1}(p.{0}))", name, KEY_ARRAY_HELPER),
                true,
            )
        } else if param.java_type.starts_with(COLUMN_SPECIFIER) {
            (format!("(p.{0} == null? null : p.{0}.columnName)", name), false)
        } else {
            (format!("p.{}", name), false)
        }
    }

    /// Static overload taking the whole parameters object; also reports
    /// whether it needs the key-array conversion.
    fn helper_method(&self, method: &ProxyMethod, indent: Indent) -> (Vec<CodeFragment>, bool) {
        let endpoint = &method.endpoint;
        let name = JAVA_NAMING.safe_name(&endpoint.handler_method);
        let mut uses_key_array = false;
        let args: Vec<String> = method
            .params
            .iter()
            .map(|p| {
                let (arg, needs_helper) = self.helper_argument(p);
                uses_key_array |= needs_helper;
                arg
            })
            .collect();

        let call = if args.is_empty() {
            CodeFragment::line(format!("return z.{}();", name))
        } else {
            let last = args.len() - 1;
            CodeFragment::block(
                format!("return z.{}(", name),
                args.iter()
                    .enumerate()
                    .map(|(i, a)| {
                        let sep = if i == last { "" } else { "," };
                        CodeFragment::line(format!("{}{}", a, sep))
                    })
                    .collect(),
                Some(");".to_string()),
            )
        };

        let mut fragments = JavaDoc::new(&endpoint.summary)
            .width(text_width(2, indent.width()))
            .to_fragments();
        fragments.push(CodeFragment::block(
            format!(
                "public static Call<{}> {}({} z, {} p) {{",
                endpoint.output_schema, name, self.class_name, endpoint.input_schema
            ),
            vec![call],
            Some("}".to_string()),
        ));
        (fragments, uses_key_array)
    }

    fn key_array_helper(&self) -> Vec<CodeFragment> {
        let key = self.ctx.key_type();
        let mut fragments =
            JavaDoc::new("Return an array of Strings for an array of keys.").to_fragments();
        fragments.push(CodeFragment::block(
            format!("public static String[] {}({}[] keys) {{", KEY_ARRAY_HELPER, key),
            vec![
                CodeFragment::line("if (keys == null) return null;"),
                CodeFragment::line("String[] ids = new String[keys.length];"),
                CodeFragment::line("int i = 0;"),
                CodeFragment::line(format!("for ({} key : keys) ids[i++] = key.name;", key)),
                CodeFragment::line("return ids;"),
            ],
            Some("}".to_string()),
        ));
        fragments
    }

    fn helper_class(&self, indent: Indent) -> Option<CodeFragment> {
        let mut body = Vec::new();
        let mut uses_key_array = false;
        for method in self.methods.iter().filter(|m| m.endpoint.is_model_builder()) {
            let (fragments, needs) = self.helper_method(method, indent);
            uses_key_array |= needs;
            body.extend(fragments);
            body.push(CodeFragment::blank());
        }
        if body.is_empty() {
            return None;
        }
        if uses_key_array {
            body.extend(self.key_array_helper());
        } else {
            body.pop();
        }
        Some(CodeFragment::block(
            "public static class Helper {",
            body,
            Some("}".to_string()),
        ))
    }

    fn interface_block(&self, indent: Indent) -> CodeFragment {
        let mut body = vec![CodeFragment::blank()];
        for method in &self.methods {
            body.extend(self.interface_method(method, indent).to_fragments());
            body.push(CodeFragment::blank());
        }
        if let Some(helper) = self.helper_class(indent) {
            body.push(helper);
            body.push(CodeFragment::blank());
        }
        CodeFragment::block(
            format!("public interface {} {{", self.class_name),
            body,
            Some("}".to_string()),
        )
    }
}

impl GeneratedFile for ProxyJava<'_> {
    fn relative_path(&self) -> PathBuf {
        self.ctx.proxy_dir().join(format!("{}.java", self.class_name))
    }

    fn render(&self) -> String {
        let indent = Indent::COMPACT;
        JavaFile::new(&self.ctx.options.proxy_package)
            .notice(self.ctx.options.notice.as_deref())
            .import(format!("{}.*", self.ctx.options.schema_package))
            .import("retrofit2.*")
            .import("retrofit2.http.*")
            .import("java.util.Map")
            .add(self.interface_block(indent))
            .render_with_indent(indent)
    }
}

#[cfg(test)]
mod tests {
    use restbind_descriptor::FieldDescriptor;

    use super::*;

    #[test]
    fn test_route_template_keeps_braces() {
        assert_eq!(route_template("/3/Frames/{frame_id}"), "/3/Frames/{frame_id}");
        assert_eq!(route_template("/3/About"), "/3/About");
    }

    #[test]
    fn test_route_template_named_groups() {
        assert_eq!(
            route_template("/3/Frames/(?<frameid>.*)/columns/(?<column>[^/]+)"),
            "/3/Frames/{frameid}/columns/{column}"
        );
        assert_eq!(route_template("/3/Jobs/(?<id>(a|b)+)/x"), "/3/Jobs/{id}/x");
    }

    #[test]
    fn test_route_template_unterminated_group() {
        assert_eq!(route_template("/3/(?<id"), "/3/(?<id");
        assert_eq!(route_template("/3/(?<id>.*"), "/3/(?<id>.*");
        assert_eq!(route_template("/3/(?<a>x)/(?<b>.*"), "/3/{a}/(?<b>.*");
    }

    #[test]
    fn test_wire_type_overrides() {
        let ctx = JavaContext::default();
        let proxy = ProxyJava::new(&ctx, "Frames", &[]).unwrap();
        assert_eq!(proxy.wire_type("KeyV3"), "String");
        assert_eq!(proxy.wire_type("FrameKeyV3"), "String");
        assert_eq!(proxy.wire_type("KeyV3[]"), "String[]");
        assert_eq!(proxy.wire_type("ColSpecifierV3"), "String");
        assert_eq!(proxy.wire_type("int[]"), "int[]");
    }

    #[test]
    fn test_unmapped_param_fails_group() {
        let ctx = JavaContext::default();
        let endpoint = EndpointDescriptor::new("GET", "/3/X", "x", "Xs")
            .schemas("XV3", "XV3")
            .param(FieldDescriptor::new("frob", "Frobnicator"));
        assert!(ProxyJava::new(&ctx, "Xs", &[&endpoint]).is_err());
    }

    #[test]
    fn test_no_helper_without_builders() {
        let ctx = JavaContext::default();
        let endpoint = EndpointDescriptor::new("GET", "/3/About", "get", "About")
            .schemas("AboutV3", "AboutV3");
        let content = ProxyJava::new(&ctx, "About", &[&endpoint]).unwrap().render();
        assert!(content.contains("  @GET(\"/3/About\")\n  Call<AboutV3> get();\n"));
        assert!(!content.contains("Helper"));
        assert!(!content.contains("@FormUrlEncoded"));
    }
}
