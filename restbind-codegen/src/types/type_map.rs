//! Primitive type table.

use indexmap::IndexMap;

/// Mapping from raw primitive type tokens to target type names.
///
/// Built once at startup from the defaults plus target and user overrides,
/// then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMap {
    types: IndexMap<String, String>,
}

impl TypeMap {
    /// The primitive tokens every target starts from.
    pub fn defaults() -> Self {
        let types = [
            ("byte", "byte"),
            ("short", "short"),
            ("int", "int"),
            ("long", "long"),
            ("float", "float"),
            ("double", "double"),
            ("boolean", "boolean"),
            ("string", "string"),
            ("Polymorphic", "Object"),
            ("Object", "Object"),
        ]
        .into_iter()
        .map(|(token, ty)| (token.to_string(), ty.to_string()))
        .collect();
        Self { types }
    }

    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Map `token` to `ty`, replacing any previous mapping.
    pub fn set(&mut self, token: impl Into<String>, ty: impl Into<String>) {
        self.types.insert(token.into(), ty.into());
    }

    /// Look up the target type of a primitive token.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.types.get(token).map(String::as_str)
    }

    /// Iterate over `(token, type)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeMap {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let map = TypeMap::defaults();
        assert_eq!(map.get("int"), Some("int"));
        assert_eq!(map.get("string"), Some("string"));
        assert_eq!(map.get("Polymorphic"), Some("Object"));
        assert_eq!(map.get("Frame"), None);
    }

    #[test]
    fn test_override_keeps_position() {
        let mut map = TypeMap::defaults();
        let len = map.len();
        map.set("string", "String");

        assert_eq!(map.get("string"), Some("String"));
        assert_eq!(map.len(), len);
        assert_eq!(map.iter().nth(7), Some(("string", "String")));
    }

    #[test]
    fn test_empty() {
        let mut map = TypeMap::empty();
        assert!(map.is_empty());
        map.set("int", "i32");
        assert_eq!(map.get("int"), Some("i32"));
    }
}
