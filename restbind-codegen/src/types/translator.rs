//! Type translation rules.

use std::fmt;

use restbind_descriptor::FieldDescriptor;

use super::TypeMap;
use crate::Error;

/// How a target language spells composite types.
///
/// The translation rules themselves live in [`TypeTranslator`]; a target only
/// describes its syntax and, optionally, which primitive mappings it replaces.
pub trait TypeSyntax {
    /// Target language name.
    fn language(&self) -> &'static str;

    /// One-dimensional array of `element`.
    fn array(&self, element: &str) -> String;

    /// Two-dimensional array of `element`.
    fn array2(&self, element: &str) -> String {
        self.array(&self.array(element))
    }

    /// Generic map from `key` to `value`.
    fn map(&self, key: &str, value: &str) -> String;

    /// The fixed type every `Key<...>` reference translates to.
    fn key(&self) -> String;

    /// Primitive mappings this target replaces in the default [`TypeMap`].
    fn overrides(&self) -> Vec<(&'static str, &'static str)> {
        Vec::new()
    }
}

/// A raw type token no rule could translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmappedType {
    pub token: String,
}

impl UnmappedType {
    fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }

    /// Attach the field and owning schema/endpoint to the failure.
    pub fn in_field(self, field: impl Into<String>, owner: impl Into<String>) -> Error {
        Error::UnmappedType {
            token: self.token,
            field: field.into(),
            owner: owner.into(),
        }
    }
}

/// Maps raw descriptor type tokens to target type names.
///
/// Rules, applied in order:
/// 1. `T[][]` / `T[]` translate `T` and re-attach the array dimensions.
/// 2. `Map<K,V>` becomes the target's generic map over `K` and `V`.
/// 3. `Key<...>` becomes the fixed key type, whatever entity it refers to.
/// 4. `enum...` becomes the referenced enum name.
/// 5. Any other token with a schema reference becomes that schema name.
/// 6. Everything else must be in the [`TypeMap`].
#[derive(Debug, Clone)]
pub struct TypeTranslator<S> {
    types: TypeMap,
    syntax: S,
}

impl<S: TypeSyntax> TypeTranslator<S> {
    /// Create a translator from the default table plus the target's overrides.
    pub fn new(syntax: S) -> Self {
        let mut types = TypeMap::defaults();
        for (token, ty) in syntax.overrides() {
            types.set(token, ty);
        }
        Self { types, syntax }
    }

    /// Apply user overrides on top of the target's table.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (token, ty) in overrides {
            self.types.set(token, ty);
        }
        self
    }

    pub fn syntax(&self) -> &S {
        &self.syntax
    }

    pub fn types(&self) -> &TypeMap {
        &self.types
    }

    /// Translate a raw type token, given the field's schema reference.
    pub fn translate(&self, raw: &str, schema_ref: Option<&str>) -> Result<String, UnmappedType> {
        if let Some(base) = raw.strip_suffix("[][]") {
            return Ok(self.syntax.array2(&self.translate(base, schema_ref)?));
        }
        if let Some(base) = raw.strip_suffix("[]") {
            return Ok(self.syntax.array(&self.translate(base, schema_ref)?));
        }
        if raw.starts_with("Map") {
            let (key, value) = raw
                .strip_prefix("Map<")
                .and_then(|inner| inner.strip_suffix('>'))
                .and_then(|inner| inner.split_once(','))
                .ok_or_else(|| UnmappedType::new(raw))?;
            let key = self.translate(key.trim(), None)?;
            let value = self.translate(value.trim(), None)?;
            return Ok(self.syntax.map(&key, &value));
        }
        if raw == "Key" || raw.starts_with("Key<") {
            return Ok(self.syntax.key());
        }
        if raw.starts_with("enum") {
            return schema_ref
                .map(str::to_string)
                .ok_or_else(|| UnmappedType::new(raw));
        }
        if let Some(schema) = schema_ref {
            return Ok(schema.to_string());
        }
        self.types
            .get(raw)
            .map(str::to_string)
            .ok_or_else(|| UnmappedType::new(raw))
    }

    /// Translate a field's type, naming the field and its owner on failure.
    pub fn translate_field(&self, field: &FieldDescriptor, owner: &str) -> crate::Result<String> {
        self.translate(&field.ty, field.schema_name.as_deref())
            .map_err(|e| e.in_field(&field.name, owner))
    }
}

impl<S: TypeSyntax> fmt::Display for TypeTranslator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Type translation map ({}):", self.syntax.language())?;
        let width = self.types.iter().map(|(t, _)| t.len()).max().unwrap_or(0);
        for (token, ty) in self.types.iter() {
            writeln!(f, "  {token:<width$} -> {ty}")?;
        }
        writeln!(f, "  {:<width$} -> {}", "Key<*>", self.syntax.key())?;
        write!(f, "  {:<width$} -> {}", "Map<K,V>", self.syntax.map("K", "V"))
    }
}
