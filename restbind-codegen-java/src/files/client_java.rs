//! Optional `H2oApi`-style facade over all proxies.
//!
//! Only endpoints whose input schema has no required field besides the
//! excluded-fields filter get real methods. Every other endpoint is left as
//! a flagged comment for a hand-written wrapper.

use std::path::PathBuf;

use restbind_codegen::{CodeFragment, Error, Indent, Renderable, Result};
use restbind_core::GeneratedFile;
use restbind_descriptor::{ApiDescription, Direction, EndpointDescriptor};

use super::text_width;
use crate::{
    JAVA_NAMING, JavaContext, JavaFile,
    ast::{JavaDoc, JavaField},
};

const EXCLUDE_FIELDS: &str = "_exclude_fields";

#[derive(Debug, Clone)]
enum ClientMethod {
    /// Three overloads around the proxy call.
    Filter {
        endpoint: EndpointDescriptor,
        takes_filter: bool,
    },
    /// Endpoint left for a hand-written wrapper.
    Stub {
        endpoint: EndpointDescriptor,
        fields: Vec<String>,
    },
}

/// The client facade class.
#[derive(Debug, Clone)]
pub struct ClientJava<'a> {
    ctx: &'a JavaContext,
    methods: Vec<ClientMethod>,
}

impl<'a> ClientJava<'a> {
    pub fn new(ctx: &'a JavaContext, api: &ApiDescription) -> Result<Self> {
        let schemas = api.schemas_map();
        let mut methods = Vec::with_capacity(api.endpoints.len());
        for endpoint in &api.endpoints {
            let input = schemas.get(endpoint.input_schema.as_str()).ok_or_else(|| {
                Error::descriptor_invariant(
                    &endpoint.api_name,
                    format!("unknown input schema '{}'", endpoint.input_schema),
                )
            })?;
            let input_fields: Vec<String> = input
                .fields
                .iter()
                .filter(|f| f.direction != Direction::Output)
                .map(|f| f.name.clone())
                .collect();

            if input_fields.iter().all(|name| name == EXCLUDE_FIELDS) {
                methods.push(ClientMethod::Filter {
                    endpoint: endpoint.clone(),
                    takes_filter: endpoint.input_params.iter().any(|p| p.name == EXCLUDE_FIELDS),
                });
            } else {
                tracing::warn!(
                    endpoint = %endpoint.api_name,
                    fields = input_fields.len(),
                    "client method not generated; endpoint needs a hand-written wrapper"
                );
                methods.push(ClientMethod::Stub {
                    endpoint: endpoint.clone(),
                    fields: input_fields,
                });
            }
        }
        Ok(Self { ctx, methods })
    }

    fn class_name(&self) -> &str {
        &self.ctx.options.client_class
    }

    fn method(header: String, body: Vec<CodeFragment>) -> CodeFragment {
        CodeFragment::block(header, body, Some("}".to_string()))
    }

    fn filter_overloads(endpoint: &EndpointDescriptor, takes_filter: bool) -> Vec<CodeFragment> {
        let out = &endpoint.output_schema;
        let name = JAVA_NAMING.safe_name(&endpoint.api_name);
        let proxy = &endpoint.class_name;
        let call_args = if takes_filter { "excluded_fields" } else { "" };
        vec![
            Self::method(
                format!("public {} {}() throws IOException {{", out, name),
                vec![CodeFragment::line(format!("return {}(\"\");", name))],
            ),
            Self::method(
                format!(
                    "public {} {}(String[] excluded_fields) throws IOException {{",
                    out, name
                ),
                vec![CodeFragment::line(format!(
                    "return {}(String.join(\",\", excluded_fields));",
                    name
                ))],
            ),
            Self::method(
                format!(
                    "public {} {}(String excluded_fields) throws IOException {{",
                    out, name
                ),
                vec![
                    CodeFragment::line(format!(
                        "{0} s = getRetrofit().create({0}.class);",
                        proxy
                    )),
                    CodeFragment::line(format!(
                        "return s.{}({}).execute().body();",
                        JAVA_NAMING.safe_name(&endpoint.handler_method),
                        call_args
                    )),
                ],
            ),
        ]
    }

    fn endpoint_fragments(&self, method: &ClientMethod, indent: Indent) -> Vec<CodeFragment> {
        let endpoint = match method {
            ClientMethod::Filter { endpoint, .. } | ClientMethod::Stub { endpoint, .. } => endpoint,
        };
        let mut fragments = JavaDoc::new(&endpoint.summary)
            .width(text_width(1, indent.width()))
            .to_fragments();
        match method {
            ClientMethod::Filter {
                endpoint,
                takes_filter,
            } => fragments.extend(Self::filter_overloads(endpoint, *takes_filter)),
            ClientMethod::Stub { endpoint, fields } => {
                fragments.push(CodeFragment::line(format!(
                    "// {} -> {} fields: [{}]",
                    endpoint.api_name,
                    fields.len(),
                    fields.join(", ")
                )));
                fragments.push(CodeFragment::line(
                    "// NOT GENERATED: this endpoint takes input fields; add a wrapper by hand.",
                ));
            }
        }
        fragments
    }

    fn setters(&self) -> Vec<CodeFragment> {
        let class = self.class_name();
        vec![
            CodeFragment::line(format!("public {}() {{}}", class)),
            CodeFragment::line(format!("public {}(String url) {{ this.url = url; }}", class)),
            CodeFragment::blank(),
            Self::method(
                "public void setUrl(String s) {".to_string(),
                vec![
                    CodeFragment::line("url = s;"),
                    CodeFragment::line("retrofit = null;"),
                ],
            ),
            CodeFragment::blank(),
            Self::method(
                "public void setTimeout(int t) {".to_string(),
                vec![
                    CodeFragment::line("timeout_s = t;"),
                    CodeFragment::line("retrofit = null;"),
                ],
            ),
        ]
    }

    fn private_section(&self) -> Vec<CodeFragment> {
        let options = &self.ctx.options;
        let key = self.ctx.key_type();
        let mut fragments = vec![
            CodeFragment::line(format!("//--------- PRIVATE {}", "-".repeat(58))),
            CodeFragment::blank(),
            CodeFragment::line(JavaField::new("retrofit", "Retrofit").private().declaration()),
            CodeFragment::line(
                JavaField::new("url", "String")
                    .private()
                    .initializer(format!("\"{}\"", options.base_url))
                    .declaration(),
            ),
            CodeFragment::line(
                JavaField::new("timeout_s", "int")
                    .private()
                    .initializer(options.timeout_secs.to_string())
                    .declaration(),
            ),
            CodeFragment::blank(),
            Self::method(
                "private void initializeRetrofit() {".to_string(),
                vec![
                    CodeFragment::line("Gson gson = new GsonBuilder()"),
                    CodeFragment::indent(vec![
                        CodeFragment::line(format!(
                            ".registerTypeAdapter({}.class, new KeySerializer())",
                            key
                        )),
                        CodeFragment::line(".create();"),
                    ]),
                    CodeFragment::blank(),
                    CodeFragment::line("OkHttpClient client = new OkHttpClient.Builder()"),
                    CodeFragment::indent(CodeFragment::lines([
                        ".connectTimeout(timeout_s, TimeUnit.SECONDS)",
                        ".writeTimeout(timeout_s, TimeUnit.SECONDS)",
                        ".readTimeout(timeout_s, TimeUnit.SECONDS)",
                        ".build();",
                    ])
                    .to_fragments()),
                    CodeFragment::blank(),
                    CodeFragment::line("this.retrofit = new Retrofit.Builder()"),
                    CodeFragment::indent(CodeFragment::lines([
                        ".client(client)",
                        ".baseUrl(url)",
                        ".addConverterFactory(GsonConverterFactory.create(gson))",
                        ".build();",
                    ])
                    .to_fragments()),
                ],
            ),
            CodeFragment::blank(),
            Self::method(
                "private Retrofit getRetrofit() {".to_string(),
                vec![
                    CodeFragment::line("if (retrofit == null) initializeRetrofit();"),
                    CodeFragment::line("return retrofit;"),
                ],
            ),
            CodeFragment::blank(),
        ];
        fragments.extend(
            JavaDoc::new(
                "Keys get sent as Strings and returned as objects also containing the type and URL, \
                 so they need a custom GSON serializer.",
            )
            .to_fragments(),
        );
        fragments.push(CodeFragment::block(
            format!(
                "private static class KeySerializer implements JsonSerializer<{}> {{",
                key
            ),
            vec![Self::method(
                format!(
                    "public JsonElement serialize({} key, Type typeOfKey, JsonSerializationContext context) {{",
                    key
                ),
                vec![CodeFragment::line("return new JsonPrimitive(key.name);")],
            )],
            Some("}".to_string()),
        ));
        fragments
    }

    fn class_block(&self, indent: Indent) -> CodeFragment {
        let mut body = vec![CodeFragment::blank()];
        body.extend(self.setters());
        body.push(CodeFragment::blank());
        for method in &self.methods {
            body.extend(self.endpoint_fragments(method, indent));
            body.push(CodeFragment::blank());
        }
        body.extend(self.private_section());
        CodeFragment::block(
            format!("public class {} {{", self.class_name()),
            body,
            Some("}".to_string()),
        )
    }

    /// Number of endpoints left as stubs.
    pub fn stub_count(&self) -> usize {
        self.methods
            .iter()
            .filter(|m| matches!(m, ClientMethod::Stub { .. }))
            .count()
    }
}

impl GeneratedFile for ClientJava<'_> {
    fn relative_path(&self) -> PathBuf {
        self.ctx
            .client_dir()
            .join(format!("{}.java", self.class_name()))
    }

    fn render(&self) -> String {
        let options = &self.ctx.options;
        let indent = Indent::COMPACT;
        JavaFile::new(&options.client_package)
            .notice(options.notice.as_deref())
            .import(format!("{}.*", options.schema_package))
            .import(format!("{}.*", options.proxy_package))
            .import("retrofit2.*")
            .import("retrofit2.converter.gson.GsonConverterFactory")
            .import("com.google.gson.*")
            .import("okhttp3.OkHttpClient")
            .import("java.io.IOException")
            .import("java.lang.reflect.Type")
            .import("java.util.concurrent.TimeUnit")
            .add(self.class_block(indent))
            .render_with_indent(indent)
    }
}
