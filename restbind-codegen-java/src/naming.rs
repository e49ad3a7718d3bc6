//! Java-specific naming conventions.

use restbind_codegen::NamingConvention;
use restbind_core::to_camel_case;

fn escape_java_reserved(name: &str) -> String {
    format!("{}_", name)
}

/// Java naming conventions.
pub const JAVA_NAMING: NamingConvention = NamingConvention {
    field_to_name: to_camel_case,
    reserved_words: &[
        "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
        "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
        "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
        "interface", "long", "native", "new", "package", "private", "protected", "public",
        "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
        "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
        "null",
    ],
    escape_reserved: escape_java_reserved,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_java_naming_field() {
        assert_eq!(JAVA_NAMING.field_name("num_rows"), "numRows");
        assert_eq!(JAVA_NAMING.field_name("frame_id"), "frameId");
        assert_eq!(JAVA_NAMING.field_name("_exclude_fields"), "ExcludeFields");
    }

    #[test]
    fn test_java_reserved_words() {
        assert!(JAVA_NAMING.is_reserved("default"));
        assert!(JAVA_NAMING.is_reserved("class"));
        assert!(!JAVA_NAMING.is_reserved("frames"));
    }

    #[test]
    fn test_java_escape_reserved() {
        assert_eq!(JAVA_NAMING.field_name("default"), "default_");
        assert_eq!(JAVA_NAMING.safe_name("package"), "package_");
        assert_eq!(JAVA_NAMING.safe_name("rows"), "rows");
    }
}
