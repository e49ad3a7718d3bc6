//! Java type syntax and the per-run Java context.

use restbind_codegen::{TypeSyntax, TypeTranslator};
use restbind_core::package_to_path;
use restbind_descriptor::{FieldDescriptor, JavaConfig};

use crate::literal;

/// Java's string type; the abstract `string` token maps here.
pub const STRING: &str = "String";

/// Java's universal object type.
pub const OBJECT: &str = "Object";

/// Java type syntax: `T[]`, `Map<K,V>` and a fixed key class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaTypeSyntax {
    key_type: String,
}

impl JavaTypeSyntax {
    pub fn new(key_type: impl Into<String>) -> Self {
        Self {
            key_type: key_type.into(),
        }
    }
}

impl Default for JavaTypeSyntax {
    fn default() -> Self {
        Self::new("KeyV3")
    }
}

impl TypeSyntax for JavaTypeSyntax {
    fn language(&self) -> &'static str {
        "java"
    }

    fn array(&self, element: &str) -> String {
        format!("{}[]", element)
    }

    fn array2(&self, element: &str) -> String {
        format!("{}[][]", element)
    }

    fn map(&self, key: &str, value: &str) -> String {
        format!("Map<{},{}>", key, value)
    }

    fn key(&self) -> String {
        self.key_type.clone()
    }

    fn overrides(&self) -> Vec<(&'static str, &'static str)> {
        vec![("string", STRING)]
    }
}

/// Java type translator.
pub type JavaTypeTranslator = TypeTranslator<JavaTypeSyntax>;

/// Everything a Java emitter needs: the type translator and the options.
///
/// Built once per run and shared read-only by all emitters.
#[derive(Debug, Clone)]
pub struct JavaContext {
    pub translator: JavaTypeTranslator,
    pub options: JavaConfig,
}

impl JavaContext {
    pub fn new(options: JavaConfig) -> Self {
        let translator = TypeTranslator::new(JavaTypeSyntax::new(&options.key_type))
            .with_overrides(options.types.clone());
        Self {
            translator,
            options,
        }
    }

    /// Translate a field type, naming the field and its owner on failure.
    pub fn java_type(&self, field: &FieldDescriptor, owner: &str) -> restbind_codegen::Result<String> {
        self.translator.translate_field(field, owner)
    }

    /// Default-value literal of a field whose Java type is `java_type`.
    pub fn literal(&self, field: &FieldDescriptor, java_type: &str) -> String {
        literal::render(field, java_type, &self.options.root_schema)
    }

    /// Java array of `element`.
    pub fn array_of(&self, element: &str) -> String {
        self.translator.syntax().array(element)
    }

    /// Superclass to declare: the root sentinel becomes `Object`.
    pub fn superclass<'s>(&self, superclass: &'s str) -> &'s str {
        if superclass == self.options.root_schema {
            OBJECT
        } else {
            superclass
        }
    }

    pub fn key_type(&self) -> &str {
        &self.options.key_type
    }

    pub fn schema_dir(&self) -> std::path::PathBuf {
        package_to_path(&self.options.schema_package)
    }

    pub fn proxy_dir(&self) -> std::path::PathBuf {
        package_to_path(&self.options.proxy_package)
    }

    pub fn client_dir(&self) -> std::path::PathBuf {
        package_to_path(&self.options.client_package)
    }
}

impl Default for JavaContext {
    fn default() -> Self {
        Self::new(JavaConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_java_string_override() {
        let ctx = JavaContext::default();
        assert_eq!(ctx.translator.translate("string", None).unwrap(), "String");
        assert_eq!(ctx.translator.translate("string[]", None).unwrap(), "String[]");
    }

    #[test]
    fn test_java_arrays_and_maps() {
        let ctx = JavaContext::default();
        let t = &ctx.translator;
        assert_eq!(t.translate("double[]", None).unwrap(), "double[]");
        assert_eq!(t.translate("double[][]", None).unwrap(), "double[][]");
        assert_eq!(
            t.translate("Map<string,string>", None).unwrap(),
            "Map<String,String>"
        );
        assert_eq!(t.translate("Key<Frame>", None).unwrap(), "KeyV3");
    }

    #[test]
    fn test_config_overrides_apply_last() {
        let mut options = JavaConfig::default();
        options.types.insert("string".to_string(), "CharSequence".to_string());
        options.key_type = "ObjectKey".to_string();
        let ctx = JavaContext::new(options);

        assert_eq!(ctx.translator.translate("string", None).unwrap(), "CharSequence");
        assert_eq!(ctx.translator.translate("Key<Model>", None).unwrap(), "ObjectKey");
    }

    #[test]
    fn test_superclass_sentinel() {
        let ctx = JavaContext::default();
        assert_eq!(ctx.superclass("Iced"), "Object");
        assert_eq!(ctx.superclass("ModelSchemaV3"), "ModelSchemaV3");
    }

    #[test]
    fn test_dirs() {
        let ctx = JavaContext::default();
        assert_eq!(ctx.schema_dir(), PathBuf::from("water/bindings/pojos"));
        assert_eq!(ctx.proxy_dir(), PathBuf::from("water/bindings/proxies/retrofit"));
    }
}
