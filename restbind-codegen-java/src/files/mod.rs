//! One generated-file type per artifact kind.

mod client_java;
mod enum_java;
mod proxy_java;
mod schema_java;

pub use client_java::ClientJava;
pub use enum_java::EnumJava;
pub use proxy_java::{ProxyJava, route_template};
pub use schema_java::SchemaJava;

/// Wrap width left for comment text at `depth` levels of `indent_width` columns.
fn text_width(depth: usize, indent_width: usize) -> usize {
    restbind_codegen::text::LINE_WIDTH.saturating_sub(depth * indent_width)
}
